//! Output views over a merged [`Journal`].
//!
//! - plain:   every entry, separated by two blank lines
//! - summary: long entries abridged to their first and last lines
//! - dates:   one header per line
//! - html:    a minimal standalone document
use crate::journal::format_utils::{
    HTML_FOOT, SummaryLimits, format_date_line, format_html_entry, format_html_head,
    format_plain_entry, format_summary_entry,
};
use crate::journal::Journal;
use std::io::{self, Write};
use std::iter;
use strum_macros::{AsRefStr, EnumIter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum View {
    #[default]
    Plain,
    Html,
    Summary,
    Dates,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub html_title: String,
    pub summary: SummaryLimits,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            html_title: "Journal".to_string(),
            summary: SummaryLimits::default(),
        }
    }
}

pub struct Renderer<'a> {
    journal: &'a Journal,
    opts: RenderOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(journal: &'a Journal, opts: Option<RenderOptions>) -> Self {
        Self {
            journal,
            opts: opts.unwrap_or_default(),
        }
    }

    pub fn plain(&self) -> impl Iterator<Item = String> + 'a {
        self.journal.iter().map(format_plain_entry)
    }

    pub fn dates(&self) -> impl Iterator<Item = String> + 'a {
        self.journal.iter().map(format_date_line)
    }

    pub fn summary(&self) -> String {
        self.journal
            .iter()
            .map(|entry| format_summary_entry(entry, &self.opts.summary))
            .collect()
    }

    /// The document head, one block per entry, then the closing tags.
    pub fn html(&self) -> impl Iterator<Item = String> + 'a {
        iter::once(format_html_head(&self.opts.html_title))
            .chain(self.journal.iter().map(format_html_entry))
            .chain(iter::once(HTML_FOOT.to_string()))
    }

    /// Writes the chosen view, chunk by chunk.
    pub fn write_view<W: Write + ?Sized>(&self, view: View, out: &mut W) -> io::Result<()> {
        match view {
            View::Plain => write_chunks(out, self.plain()),
            View::Html => write_chunks(out, self.html()),
            View::Summary => out.write_all(self.summary().as_bytes()),
            View::Dates => write_chunks(out, self.dates()),
        }
    }

    pub fn render(&self, view: View) -> String {
        match view {
            View::Plain => self.plain().collect(),
            View::Html => self.html().collect(),
            View::Summary => self.summary(),
            View::Dates => self.dates().collect(),
        }
    }
}

fn write_chunks<W: Write + ?Sized>(
    out: &mut W,
    chunks: impl Iterator<Item = String>,
) -> io::Result<()> {
    for chunk in chunks {
        out.write_all(chunk.as_bytes())?;
    }
    Ok(())
}
