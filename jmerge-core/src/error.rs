//! Fatal error kinds raised while merging journals.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every variant aborts the whole run; there is no partial output.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Cannot find input file \"{}\".", path.display())]
    MissingInputFile { path: PathBuf },

    #[error("Output file \"{}\" already exists.", path.display())]
    OutputExists { path: PathBuf },

    #[error("Cannot parse a date from entry header \"{header}\": {reason}.")]
    DateParse { header: String, reason: String },

    #[error("I/O error on \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MergeError {
    pub(crate) fn date_parse(header: &str, reason: impl Into<String>) -> Self {
        MergeError::DateParse {
            header: header.to_string(),
            reason: reason.into(),
        }
    }
}

pub type MergeResult<T> = Result<T, MergeError>;
