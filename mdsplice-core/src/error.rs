//! Error type shared across the preprocessing pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort an invocation. There is no partial-output
/// mode: any of these ends the run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("include file not found: {directive}\n  resolved to: {resolved:?}\n  from: {from:?}")]
    IncludeNotFound {
        directive: String,
        resolved: PathBuf,
        from: PathBuf,
    },

    #[error("include cycle detected: {path:?} is already being processed")]
    IncludeCycle { path: PathBuf },

    #[error("cannot resolve @generated@ path {directive:?} without a generated root")]
    GeneratedRootUnavailable { directive: String },

    #[error("root is not a directory: {path:?}")]
    InvalidRoot { path: PathBuf },

    #[error("chapter path {path:?} resolves outside the source root {root:?}")]
    PathOutsideRoot { path: PathBuf, root: PathBuf },

    #[error("include nesting exceeds {limit} levels at {path:?}")]
    RecursionLimit { path: PathBuf, limit: usize },

    #[error("malformed host payload: {0}")]
    MalformedPayload(String),

    #[error("io error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
