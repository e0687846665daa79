//! Error types for vercheck operations.
//!
//! This module defines [`VercheckError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - [`VercheckError::ModuleNotFound`] is the only kind the checker
//!   recovers from; it means "install needed"
//! - Every other variant propagates to the caller unchanged
//! - Use `anyhow::Error` (via `VercheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for vercheck operations.
#[derive(Debug, Error)]
pub enum VercheckError {
    /// A dotted version string contains a segment that is not an integer.
    #[error("Invalid version '{input}': segment '{segment}' is not a non-negative integer")]
    VersionParse { input: String, segment: String },

    /// No module with this name is installed.
    #[error("Module not found: {name}")]
    ModuleNotFound { name: String },

    /// The module exists but could not be loaded for another reason.
    #[error("Failed to load module '{name}': {message}")]
    ModuleLoadFailed { name: String, message: String },

    /// The module was loaded but reports no version.
    #[error("Module '{name}' does not report a version")]
    MissingVersion { name: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VercheckError {
    /// Whether this error means the module is simply absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, VercheckError::ModuleNotFound { .. })
    }
}

/// Result type alias for vercheck operations.
pub type Result<T> = std::result::Result<T, VercheckError>;
