//! Errors surfaced while building an index.
//!
//! Tokenization and querying never fail; only the providers that supply
//! documents and noise words can.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A document list, document or noise-word source does not exist.
    #[error("source not found: {0}")]
    SourceNotFound(String),

    /// The source exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Map an I/O failure on `path`, keeping "not found" distinct.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Error::SourceNotFound(path.display().to_string())
        } else {
            Error::Io { path, source }
        }
    }
}
