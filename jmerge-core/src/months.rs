use once_cell::sync::Lazy;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, IntoStaticStr};

/// Calendar months, in order. `as_ref()` yields the English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, IntoStaticStr)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// 1-based month number.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn english(self) -> &'static str {
        self.into()
    }

    pub fn spanish(self) -> &'static str {
        match self {
            Month::January => "Enero",
            Month::February => "Febrero",
            Month::March => "Marzo",
            Month::April => "Abril",
            Month::May => "Mayo",
            Month::June => "Junio",
            Month::July => "Julio",
            Month::August => "Agosto",
            Month::September => "Septiembre",
            Month::October => "Octubre",
            Month::November => "Noviembre",
            Month::December => "Diciembre",
        }
    }

    /// Looks a month up by its English or Spanish name.
    ///
    /// Matching is exact and case-sensitive (`May` and `Mayo`, not `may`).
    pub fn from_name(name: &str) -> Option<Month> {
        table().get(name).copied()
    }
}

/// Name → month registry, built once on first access and never mutated.
fn table() -> &'static HashMap<&'static str, Month> {
    static TABLE: Lazy<HashMap<&'static str, Month>> = Lazy::new(|| {
        let mut m = HashMap::new();
        for month in Month::iter() {
            m.insert(month.english(), month);
            m.insert(month.spanish(), month);
        }
        m
    });
    &TABLE
}
