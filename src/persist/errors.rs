/// Errors from writing and formatting the output file.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur after both HTTP steps have succeeded.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Records could not be serialized.
    #[error("Could not serialize records: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output file could not be written.
    #[error("Could not write {}: {source}", path.display())]
    Write {
        /// Target file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The formatter binary was found but could not be started.
    #[error("Could not run {}: {source}", formatter.display())]
    FormatterSpawn {
        /// Resolved formatter path.
        formatter: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The formatter ran and reported failure.
    #[error("{} exited with {}", formatter.display(), code.map_or_else(|| "a signal".to_owned(), |c| format!("status {c}")))]
    FormatterFailed {
        /// Resolved formatter path.
        formatter: PathBuf,
        /// Exit code, `None` if terminated by a signal.
        code: Option<i32>,
    },
}
