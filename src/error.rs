//! Error enum
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Error {
    /// Source corpus missing, unreadable or not valid UTF-8.
    InputAccess(PathBuf, std::io::Error),
    /// Destination could not be created or written to.
    OutputWrite(PathBuf, std::io::Error),
    /// A finished temporary file could not be moved onto its destination.
    Persist(tempfile::PersistError),
    /// A worker of the distribution phase failed.
    Worker { worker: usize, source: Box<Error> },
    /// A line is in the reverse index but its content is not indexed as a duplicate.
    MalformedIndex(usize),
    /// Paired corpora with different line counts.
    Misaligned { a: usize, b: usize },
    InvalidWorkerCount(usize),
    ThreadPool(rayon::ThreadPoolBuildError),
    Serde(serde_json::Error),
    Custom(String),
}

impl Error {
    pub(crate) fn input(path: &Path, e: std::io::Error) -> Self {
        Self::InputAccess(path.to_path_buf(), e)
    }

    pub(crate) fn output(path: &Path, e: std::io::Error) -> Self {
        Self::OutputWrite(path.to_path_buf(), e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputAccess(p, e) => write!(f, "could not read {:?}: {}", p, e),
            Error::OutputWrite(p, e) => write!(f, "could not write {:?}: {}", p, e),
            Error::Persist(e) => write!(f, "could not move output into place: {}", e),
            Error::Worker { worker, source } => write!(f, "worker {} failed: {}", worker, source),
            Error::MalformedIndex(line) => {
                write!(f, "inconsistent duplicate index for line {}", line)
            }
            Error::Misaligned { a, b } => write!(
                f,
                "corpora are not aligned: {} lines in corpus a, {} lines in corpus b",
                a, b
            ),
            Error::InvalidWorkerCount(n) => write!(f, "invalid worker count: {}", n),
            Error::ThreadPool(e) => write!(f, "could not build worker pool: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Custom(s) => f.write_str(s),
        }
    }
}

impl std::error::Error for Error {}

impl From<tempfile::PersistError> for Error {
    fn from(e: tempfile::PersistError) -> Error {
        Error::Persist(e)
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(e: rayon::ThreadPoolBuildError) -> Error {
        Error::ThreadPool(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
