use super::journal_entry::Entry;

/// Marker replacing the middle lines of an abridged entry.
pub const ELISION_MARKER: &str = "  [...]";

/// When and how much of an entry the summary view keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLimits {
    /// Entries with at least this many lines are abridged.
    pub abridge_at: usize,
    /// Lines kept from the top of an abridged entry.
    pub head: usize,
    /// Lines kept from the bottom of an abridged entry.
    pub tail: usize,
}

impl Default for SummaryLimits {
    fn default() -> Self {
        Self {
            abridge_at: 12,
            head: 6,
            tail: 3,
        }
    }
}

/// Full entry text followed by two blank lines.
pub fn format_plain_entry(entry: &Entry) -> String {
    format!("{}\n\n\n", entry.text())
}

/// `01 May 2013\n`
pub fn format_date_line(entry: &Entry) -> String {
    format!("{}\n", entry.header())
}

/// The entry, abridged to head + marker + tail when it is too long, followed
/// by a blank line.
pub fn format_summary_entry(entry: &Entry, limits: &SummaryLimits) -> String {
    let lines: Vec<&str> = entry.lines().collect();
    if lines.len() < limits.abridge_at {
        return format!("{}\n\n", entry.text());
    }
    let head = lines[..limits.head.min(lines.len())].join("\n");
    let tail = lines[lines.len().saturating_sub(limits.tail)..].join("\n");
    format!("{head}\n{ELISION_MARKER}\n{tail}\n\n")
}

/// Document shell opening, up to and including `<body>`.
pub fn format_html_head(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>{}</title>
  <meta charset="utf-8">
  <style>
    div.date {{ color: blue; font-weight: bold; }}
  </style>
</head>

<body>
"#,
        escape_html(title)
    )
}

pub const HTML_FOOT: &str = "\n</body>\n</html>";

/// One `<div class="entry">` block. Blank lines in the body become paragraph
/// boundaries.
pub fn format_html_entry(entry: &Entry) -> String {
    let body = escape_html(entry.body()).replace("\n\n", "\n</p>\n<p>\n");
    format!(
        "\n<div class=\"entry\">\n<div class=\"date\">{}</div>\n<p>\n{}\n</p>\n</div>\n",
        escape_html(entry.header()),
        body
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
