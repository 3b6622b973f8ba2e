//! Error types for pyvet operations.
//!
//! This module defines [`PyvetError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PyvetError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PyvetError::Other`) for unexpected errors
//! - Version resolution never surfaces errors: failed lookups collapse into
//!   the `not installed` sentinel instead

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pyvet operations.
#[derive(Debug, Error)]
pub enum PyvetError {
    /// The environment exists but has no usable interpreter.
    #[error("Python executable not found in virtual environment: {path}")]
    InterpreterNotFound { path: PathBuf },

    /// No interpreter anywhere, venv or system.
    #[error("Python not found. Please install Python 3.10 or higher.")]
    PythonMissing,

    /// The interpreter is older than the supported minimum.
    #[error("Python version {found} found, but version {required} or higher is required")]
    PythonVersionUnsupported { found: String, required: String },

    /// Interpreter version output did not look like `Python X.Y[.Z]`.
    #[error("Could not parse Python version from: {output:?}")]
    VersionParseError { output: String },

    /// `python -m venv` failed.
    #[error("Failed to create virtual environment: {detail}")]
    VenvCreateFailed { detail: String },

    /// A pip operation failed during environment provisioning.
    #[error("Failed to {action}: {detail}")]
    PipFailed { action: String, detail: String },

    /// The device probe script failed or produced unreadable output.
    #[error("Device probe failed: {detail}")]
    DeviceProbeFailed { detail: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pyvet operations.
pub type Result<T> = std::result::Result<T, PyvetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpreter_not_found_displays_path() {
        let err = PyvetError::InterpreterNotFound {
            path: PathBuf::from("/data/pythonenv/bin/python"),
        };
        let msg = err.to_string();
        assert!(msg.contains("virtual environment"));
        assert!(msg.contains("/data/pythonenv/bin/python"));
    }

    #[test]
    fn python_missing_mentions_minimum_version() {
        assert!(PyvetError::PythonMissing.to_string().contains("3.10"));
    }

    #[test]
    fn version_unsupported_displays_found_and_required() {
        let err = PyvetError::PythonVersionUnsupported {
            found: "3.8.10".into(),
            required: "3.10".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("3.8.10"));
        assert!(msg.contains("3.10"));
    }

    #[test]
    fn venv_create_failed_displays_detail() {
        let err = PyvetError::VenvCreateFailed {
            detail: "ensurepip is not available".into(),
        };
        assert!(err.to_string().contains("ensurepip is not available"));
    }

    #[test]
    fn pip_failed_displays_action_and_detail() {
        let err = PyvetError::PipFailed {
            action: "install torch".into(),
            detail: "no matching distribution".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("install torch"));
        assert!(msg.contains("no matching distribution"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PyvetError = io_err.into();
        assert!(matches!(err, PyvetError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PyvetError::PythonMissing)
        }
        assert!(returns_error().is_err());
    }
}
