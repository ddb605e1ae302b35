//! Error types for Folio
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`
//! at the edge.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Folio operations
pub type FolioResult<T> = Result<T, FolioError>;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Invalid site configuration
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A stored date that is not calendar-month shaped
    #[error("invalid date '{value}' in {context} - expected YYYY-MM")]
    InvalidDate { value: String, context: String },

    /// Theme preference could not be persisted
    #[error("could not persist theme preference to {path}: {message}")]
    PersistPreference { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
