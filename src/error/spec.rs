use std::path::PathBuf;
use thiserror::Error;

/// Failure on a single testspec line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("line {line}: expected '<name>:<description>', found '{text}'")]
    MissingDelimiter { line: usize, text: String },
}

#[derive(Error, Debug)]
pub enum SpecError {
    /// The testspec at `path` has a line that cannot be split into name and
    /// description. The offending line is kept as the source.
    #[error("testspec malformed: {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: LineError,
    },
}

impl SpecError {
    pub fn malformed(path: impl Into<PathBuf>, source: LineError) -> Self {
        Self::Malformed {
            path: path.into(),
            source,
        }
    }
}
