//! Error types for Sift
//!
//! Uses `thiserror` for library errors. Evaluating a specification or running
//! a filter never fails; errors only come from parsing user input and loading
//! catalog or config files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Sift operations
pub type SiftResult<T> = Result<T, SiftError>;

/// Main error type for Sift operations
#[derive(Error, Debug)]
pub enum SiftError {
    /// Color token not recognised
    #[error("unknown color '{token}' (expected one of: {expected})")]
    UnknownColor { token: String, expected: String },

    /// Lower price bound above upper bound
    #[error("invalid price range: minimum {min} is greater than maximum {max}")]
    InvalidPriceRange { min: u32, max: u32 },

    /// Unrecognised value for an enumerated option
    #[error("invalid value '{value}' for {option} (expected one of: {expected})")]
    InvalidOption {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Catalog file missing
    #[error("catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Catalog file present but malformed
    #[error("invalid catalog in {file}: {message}")]
    InvalidCatalog { file: PathBuf, message: String },

    /// Config file present but malformed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
