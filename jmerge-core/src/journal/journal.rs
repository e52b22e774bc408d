//! The merged, deduplicated and date-ordered `Journal`.
use super::journal_entry::Entry;
use super::parse_entries::parse_entries;
use crate::error::{MergeError, MergeResult};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// All entries of one or more journal files, unique and sorted by date.
///
/// A `Journal` is built once and never mutated afterwards.
#[derive(Debug, Default)]
pub struct Journal {
    entries: Vec<Entry>,
}

impl Journal {
    /// Merges the given sources, one line sequence per journal file.
    ///
    /// - Each source runs through its own entry parser, in the given order.
    /// - Entries whose full text repeats an earlier one are dropped.
    /// - Survivors are stable-sorted by date, so same-day entries keep their
    ///   arrival order.
    ///
    /// Fails with [`MergeError::DateParse`] when any surviving entry has a
    /// header that is not a `day month year` date; nothing is returned then.
    pub fn build<S, L, T>(sources: S) -> MergeResult<Self>
    where
        S: IntoIterator<Item = L>,
        L: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut texts = Vec::new();
        for (index, source) in sources.into_iter().enumerate() {
            let before = texts.len();
            texts.extend(parse_entries(source));
            debug!(source = index, entries = texts.len() - before, "parsed source");
        }

        let total = texts.len();
        let mut seen = HashSet::new();
        texts.retain(|text| seen.insert(text.clone()));

        let mut entries = texts
            .into_iter()
            .map(Entry::from_text)
            .collect::<MergeResult<Vec<_>>>()?;
        entries.sort_by_key(|entry| entry.date);

        info!(
            entries = entries.len(),
            duplicates = total - entries.len(),
            "merged journal"
        );
        Ok(Self { entries })
    }

    /// Reads and merges journal files from disk.
    ///
    /// Every path is checked before any file is read, so a missing file is
    /// reported without doing partial work.
    pub fn from_paths(paths: &[PathBuf]) -> MergeResult<Self> {
        Self::check_inputs(paths)?;

        let mut contents = Vec::with_capacity(paths.len());
        for path in paths {
            debug!(path = %path.display(), "reading journal file");
            let content = fs::read_to_string(path).map_err(|source| MergeError::Io {
                path: path.clone(),
                source,
            })?;
            contents.push(content);
        }

        Self::build(
            contents
                .iter()
                .map(|content| content.split_inclusive('\n')),
        )
    }

    /// Fails with [`MergeError::MissingInputFile`] on the first path that
    /// does not exist.
    pub fn check_inputs(paths: &[PathBuf]) -> MergeResult<()> {
        match paths.iter().find(|path| !path.exists()) {
            Some(missing) => Err(MergeError::MissingInputFile {
                path: missing.clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Journal {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
