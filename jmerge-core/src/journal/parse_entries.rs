//! Splits the raw lines of one journal file into entry texts.
//!
//! An entry starts where a date line is immediately followed by an underline:
//!
//! ```text
//! 01 May 2013
//! -----------
//!
//! Body...
//! ```

use std::borrow::Cow;

/// A line starting with this many dashes underlines a date.
const UNDERLINE: &str = "--------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    AwaitingContent,
    /// The pending line looks like `DD Month YYYY`; an underline now opens an entry.
    JustSawDateLine,
}

/// Lazy iterator over the trimmed entry texts of one source.
///
/// Boundary flushes never yield empty text, but the final entry is always
/// yielded, even when empty, so a file without any header reaches the merger
/// and fails there on its unparseable date.
pub struct EntryParser<I> {
    lines: I,
    state: ParserState,
    pending_line: String,
    current_entry: String,
    finished: bool,
}

impl<I, T> EntryParser<I>
where
    I: Iterator<Item = T>,
    T: AsRef<str>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            state: ParserState::AwaitingContent,
            pending_line: String::new(),
            current_entry: String::new(),
            finished: false,
        }
    }

    /// Feeds one line and returns a completed entry if the line closed one.
    fn push_line(&mut self, line: &str) -> Option<String> {
        if self.state == ParserState::JustSawDateLine && is_underline(line) {
            let finished = self.current_entry.trim().to_string();
            self.current_entry = std::mem::take(&mut self.pending_line);
            self.current_entry.push_str(line);
            return (!finished.is_empty()).then_some(finished);
        }

        self.state = if is_date_line(line) {
            ParserState::JustSawDateLine
        } else {
            ParserState::AwaitingContent
        };
        self.current_entry.push_str(&self.pending_line);
        self.pending_line.clear();
        self.pending_line.push_str(line);
        None
    }

    fn finish(&mut self) -> String {
        self.finished = true;
        self.current_entry.push_str(&self.pending_line);
        self.pending_line.clear();
        std::mem::take(&mut self.current_entry).trim().to_string()
    }
}

impl<I, T> Iterator for EntryParser<I>
where
    I: Iterator<Item = T>,
    T: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        while let Some(line) = self.lines.next() {
            let line = normalize_line_ending(line.as_ref());
            if let Some(entry) = self.push_line(&line) {
                return Some(entry);
            }
        }
        Some(self.finish())
    }
}

/// Parses the lines of one source into entry texts.
///
/// Lines are expected with their trailing newline characters, as produced by
/// [`str::split_inclusive`].
pub fn parse_entries<I, T>(lines: I) -> EntryParser<I::IntoIter>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    EntryParser::new(lines.into_iter())
}

/// Turns a `\r\n` line ending into `\n`, so CRLF files parse like LF ones.
fn normalize_line_ending(line: &str) -> Cow<'_, str> {
    match line.strip_suffix("\r\n") {
        Some(content) => Cow::Owned(format!("{content}\n")),
        None => Cow::Borrowed(line.strip_suffix('\r').unwrap_or(line)),
    }
}

fn is_underline(line: &str) -> bool {
    line.starts_with(UNDERLINE)
}

/// `DD Month YYYY`: exactly three tokens, the outer two made of digits only.
///
/// The middle token is not checked here; unknown month names fail later,
/// when the entry's date is computed.
fn is_date_line(line: &str) -> bool {
    let parts: Vec<&str> = line.split_whitespace().collect();
    parts.len() == 3 && is_number(parts[0]) && is_number(parts[2])
}

fn is_number(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}
