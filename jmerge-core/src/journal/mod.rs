pub mod format_utils;
mod journal;
mod journal_entry;
mod parse_entries;

pub use journal::Journal;
pub use journal_entry::{Entry, parse_header_date};
pub use parse_entries::{EntryParser, parse_entries};
