//! Error types for toastline
//!
//! Rendering itself never fails. Errors only surface where untyped input
//! (tokens, hex strings, configuration files) is turned into typed values.

use thiserror::Error;

/// Errors that can occur while parsing toastline inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToastlineError {
    /// Unknown anchor position token
    #[error("invalid toast position: {0:?}")]
    InvalidPosition(String),

    /// Unknown motion preset token
    #[error("invalid motion preset: {0:?}")]
    InvalidMotionPreset(String),

    /// Malformed color literal
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// Configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for toastline operations
pub type Result<T> = std::result::Result<T, ToastlineError>;
