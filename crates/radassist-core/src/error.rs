//! Error types for radassist-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for radassist-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in radassist-core.
///
/// Rendering never fails; these cover loading and saving configuration.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error on a specific file
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File that was being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
