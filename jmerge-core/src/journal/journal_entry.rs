use crate::error::{MergeError, MergeResult};
use crate::months::Month;
use chrono::NaiveDate;
use std::ops::RangeInclusive;

/// One dated journal entry: a `DD MonthName YYYY` header, its underline and
/// the body text.
///
/// Equality and hashing follow the full text; the date is derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    pub date: NaiveDate,
    text: String,
}

impl Entry {
    /// Builds an entry from its trimmed text, parsing the header into a date.
    pub fn from_text(text: impl Into<String>) -> MergeResult<Self> {
        let text = text.into();
        let date = parse_header_date(header_of(&text))?;
        Ok(Self { date, text })
    }

    /// The full entry text, as read from the journal file.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The first line, e.g. `01 May 2013`.
    pub fn header(&self) -> &str {
        header_of(&self.text)
    }

    /// Everything after the header and its underline, trimmed.
    pub fn body(&self) -> &str {
        self.text.splitn(3, '\n').nth(2).unwrap_or("").trim()
    }

    pub fn lines(&self) -> std::str::Split<'_, char> {
        self.text.split('\n')
    }
}

fn header_of(text: &str) -> &str {
    text.split('\n').next().unwrap_or("")
}

/// Parses `DD MonthName YYYY` with the bilingual month table.
///
/// # Arguments
///
/// * `header` - the first line of an entry (e.g. `07 Mayo 2013`).
pub fn parse_header_date(header: &str) -> MergeResult<NaiveDate> {
    let parts: Vec<&str> = header.split_whitespace().collect();
    let &[day, month, year] = parts.as_slice() else {
        return Err(MergeError::date_parse(
            header,
            format!("expected `day month year`, found {} words", parts.len()),
        ));
    };

    let month = Month::from_name(month)
        .ok_or_else(|| MergeError::date_parse(header, format!("unknown month name `{month}`")))?;
    let day: u32 = parse_digits(day, 1..=2)
        .ok_or_else(|| MergeError::date_parse(header, format!("invalid day `{day}`")))?;
    let year: i32 = parse_digits(year, 4..=4)
        .ok_or_else(|| MergeError::date_parse(header, format!("invalid year `{year}`")))?;

    NaiveDate::from_ymd_opt(year, month.number(), day)
        .ok_or_else(|| MergeError::date_parse(header, "no such calendar day"))
}

/// Parses an all-digit token whose length is within `width` (`DD`, `YYYY`).
fn parse_digits<N: std::str::FromStr>(token: &str, width: RangeInclusive<usize>) -> Option<N> {
    let digits_only = token.chars().all(|c| c.is_ascii_digit());
    if !digits_only || !width.contains(&token.len()) {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english_and_spanish_headers() {
        let expected = NaiveDate::from_ymd_opt(2013, 5, 7).unwrap();
        assert_eq!(parse_header_date("07 May 2013").unwrap(), expected);
        assert_eq!(parse_header_date("07 Mayo 2013").unwrap(), expected);
        assert_eq!(parse_header_date("  7   May 2013 ").unwrap(), expected);
    }

    #[test]
    fn rejects_malformed_headers() {
        for header in [
            "",
            "Some notes",
            "12 Foo 34",
            "07 may 2013",
            "07 May 2013 extra",
            "31 February 2013",
            "xx May 2013",
            "01 May 13",
            "001 May 2013",
            "01 May 20130",
            "+1 May 2013",
        ] {
            let err = parse_header_date(header).unwrap_err();
            assert!(
                matches!(err, MergeError::DateParse { .. }),
                "expected a date error for {header:?}"
            );
        }
    }

    #[test]
    fn entry_exposes_header_and_body() {
        let entry = Entry::from_text("01 May 2013\n--------\n\nFirst.\n\nSecond.").unwrap();
        assert_eq!(entry.header(), "01 May 2013");
        assert_eq!(entry.body(), "First.\n\nSecond.");
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2013, 5, 1).unwrap());
        assert_eq!(entry.lines().count(), 6);
    }

    #[test]
    fn entry_without_body() {
        let entry = Entry::from_text("01 May 2013\n--------").unwrap();
        assert_eq!(entry.body(), "");
        let entry = Entry::from_text("01 May 2013").unwrap();
        assert_eq!(entry.body(), "");
    }

    #[test]
    fn empty_text_is_not_an_entry() {
        assert!(Entry::from_text("").is_err());
    }
}
