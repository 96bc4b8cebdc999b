//! Error types for radassist-web

use thiserror::Error;

/// Result type alias for radassist-web operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in radassist-web
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from radassist-core
    #[error("Core error: {0}")]
    Core(#[from] radassist_core::Error),

    /// Could not bind the listening socket
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested
        addr: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
