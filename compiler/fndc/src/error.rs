//! Driver errors: problems with the invocation itself, not the source.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Usage(String),
}

impl DriverError {
    #[inline]
    pub fn is_usage(&self) -> bool {
        matches!(self, DriverError::Usage(_))
    }
}
