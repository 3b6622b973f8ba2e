//! Python version parsing and the minimum-version gate.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{PyvetError, Result};

/// Minimum interpreter version the managed environment supports.
pub const MIN_PYTHON: (u32, u32) = (3, 10);

/// A parsed `Python X.Y[.Z]` version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PythonVersion {
    /// Parse a version out of `python --version` output.
    ///
    /// Accepts anything containing `Python X.Y` or `Python X.Y.Z`; the
    /// patch component defaults to zero when absent.
    pub fn parse(output: &str) -> Result<Self> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| {
            Regex::new(r"Python\s+(\d+)\.(\d+)(?:\.(\d+))?").expect("valid version regex")
        });

        let caps = re
            .captures(output)
            .ok_or_else(|| PyvetError::VersionParseError {
                output: output.trim().to_string(),
            })?;

        let part = |i: usize| {
            caps.get(i)
                .map(|m| m.as_str().parse::<u32>().unwrap_or(0))
                .unwrap_or(0)
        };

        Ok(Self {
            major: part(1),
            minor: part(2),
            patch: part(3),
        })
    }

    /// Whether this version satisfies the [`MIN_PYTHON`] gate.
    pub fn is_supported(&self) -> bool {
        (self.major, self.minor) >= MIN_PYTHON
    }

    /// Error unless the version satisfies the gate.
    pub fn require_supported(&self) -> Result<()> {
        if self.is_supported() {
            Ok(())
        } else {
            Err(PyvetError::PythonVersionUnsupported {
                found: self.to_string(),
                required: format!("{}.{}", MIN_PYTHON.0, MIN_PYTHON.1),
            })
        }
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_version() {
        let v = PythonVersion::parse("Python 3.11.4").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (3, 11, 4));
    }

    #[test]
    fn parses_two_component_version() {
        let v = PythonVersion::parse("Python 3.10").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (3, 10, 0));
    }

    #[test]
    fn parses_with_trailing_build_info() {
        let v = PythonVersion::parse("Python 3.12.1 (main, Dec  8 2023)").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (3, 12, 1));
    }

    #[test]
    fn rejects_garbage() {
        let err = PythonVersion::parse("pyenv 2.3.0").unwrap_err();
        assert!(err.to_string().contains("pyenv 2.3.0"));
    }

    #[test]
    fn supported_versions() {
        assert!(PythonVersion::parse("Python 3.10.0").unwrap().is_supported());
        assert!(PythonVersion::parse("Python 3.12.1").unwrap().is_supported());
        assert!(PythonVersion::parse("Python 4.0").unwrap().is_supported());
    }

    #[test]
    fn unsupported_versions() {
        assert!(!PythonVersion::parse("Python 3.9.18").unwrap().is_supported());
        assert!(!PythonVersion::parse("Python 2.7.18").unwrap().is_supported());
    }

    #[test]
    fn require_supported_names_both_versions() {
        let v = PythonVersion::parse("Python 3.8.10").unwrap();
        let err = v.require_supported().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("3.8.10"));
        assert!(msg.contains("3.10"));
    }

    #[test]
    fn display_is_three_component() {
        let v = PythonVersion::parse("Python 3.10").unwrap();
        assert_eq!(v.to_string(), "3.10.0");
    }
}
