//! Error types for domainfix.
//!
//! Suggesting a domain never fails; errors only come from loading reference
//! data and from the command line front end. All of them are represented by
//! [`DomainfixError`].
//!
//! # Examples
//!
//! ```
//! use domainfix::error::{DomainfixError, Result};
//!
//! fn check_cutoff(cutoff: f64) -> Result<f64> {
//!     if cutoff > 0.0 && cutoff <= 1.0 {
//!         Ok(cutoff)
//!     } else {
//!         Err(DomainfixError::invalid_argument("cutoff must be in (0, 1]"))
//!     }
//! }
//!
//! assert!(check_cutoff(0.77).is_ok());
//! assert!(check_cutoff(1.5).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for domainfix operations.
#[derive(Error, Debug)]
pub enum DomainfixError {
    /// I/O errors while reading reference data.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reference data that parsed but is not usable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument passed on the command line.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with DomainfixError.
pub type Result<T> = std::result::Result<T, DomainfixError>;

impl DomainfixError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        DomainfixError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        DomainfixError::InvalidArgument(msg.into())
    }
}
