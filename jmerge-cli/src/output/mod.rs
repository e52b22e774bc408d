//! Where the rendered journal goes.
use jmerge_core::MergeError;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `None` and `-` select stdout. A path that already exists is refused.
    pub fn resolve(outfile: Option<&Path>) -> Result<Self, MergeError> {
        match outfile {
            None => Ok(Self::Stdout),
            Some(path) if path == Path::new("-") => Ok(Self::Stdout),
            Some(path) if path.exists() => Err(MergeError::OutputExists {
                path: path.to_path_buf(),
            }),
            Some(path) => Ok(Self::File(path.to_path_buf())),
        }
    }

    /// Opens the sink and hands it to `write`.
    ///
    /// The file is created only now, with `create_new`, so it is never
    /// clobbered even if it appeared after [`OutputTarget::resolve`].
    pub fn write_with<F>(&self, write: F) -> Result<(), MergeError>
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        match self {
            Self::Stdout => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                write(&mut out)
                    .and_then(|_| out.flush())
                    .map_err(|source| MergeError::Io {
                        path: PathBuf::from("-"),
                        source,
                    })
            }
            Self::File(path) => {
                debug!(path = %path.display(), "writing output file");
                let file = OpenOptions::new()
                    .write(true)
                    .create_new(true)
                    .open(path)
                    .map_err(|source| match source.kind() {
                        io::ErrorKind::AlreadyExists => MergeError::OutputExists {
                            path: path.clone(),
                        },
                        _ => MergeError::Io {
                            path: path.clone(),
                            source,
                        },
                    })?;
                let mut out = BufWriter::new(file);
                write(&mut out)
                    .and_then(|_| out.flush())
                    .map_err(|source| MergeError::Io {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }
}
