//! Core error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `EdError` via `From` impls or wrap `EdError` as one variant.

use thiserror::Error;

use crate::PatientId;

/// The top-level error type for `ed-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EdError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("severity {0} is outside 1..=5")]
    InvalidSeverity(u8),

    #[error("patient {0} not found")]
    PatientNotFound(PatientId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ed-*` crates.
pub type EdResult<T> = Result<T, EdError>;
