use std::fs;
use std::path::{Path, PathBuf};

/// Two entries in May 2013.
pub const FIRST_FILE: &str = r#"
01 May 2013
-----------

Bla bla bla

Etc

07 May 2013
-----------

Even more bla bla bla.
"#;

/// Shares `07 May 2013` with [`FIRST_FILE`] and adds a Spanish header.
pub const SECOND_FILE: &str = r#"02 June 2014
------------

A year later.

07 May 2013
-----------

Even more bla bla bla.


03 Mayo 2013
------------

En castellano.
"#;

/// Test helper to write a journal file into a temporary directory.
pub fn write_journal_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write journal fixture");
    path
}
