//! Python environment location and layout.
//!
//! pyvet inspects a dedicated virtual environment rather than whatever
//! interpreter happens to be on PATH. [`PythonEnv`] owns the environment
//! root and derives every path from it; the venv layout differs between
//! Windows (`Scripts/`) and everything else (`bin/`).

use std::path::{Path, PathBuf};

/// Directory name of the managed environment under the data directory.
const ENV_DIR_NAME: &str = "pythonenv";

/// A located (but not necessarily existing) Python virtual environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonEnv {
    root: PathBuf,
}

impl PythonEnv {
    /// Create an environment handle at an explicit root.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the environment root: an explicit override wins, otherwise
    /// the platform data directory (`<data_dir>/pyvet/pythonenv`).
    ///
    /// The `--env` flag and the `PYVET_ENV` variable both arrive here as
    /// the override, courtesy of clap's `env` feature.
    pub fn resolve(override_root: Option<PathBuf>) -> Self {
        match override_root {
            Some(root) => Self::at(root),
            None => Self::at(default_root()),
        }
    }

    /// The environment root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the environment root exists on disk.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Path to the environment's Python interpreter.
    pub fn python_path(&self) -> PathBuf {
        if cfg!(windows) {
            self.root.join("Scripts").join("python.exe")
        } else {
            self.root.join("bin").join("python")
        }
    }

    /// Path to the environment's pip executable.
    pub fn pip_path(&self) -> PathBuf {
        if cfg!(windows) {
            self.root.join("Scripts").join("pip.exe")
        } else {
            self.root.join("bin").join("pip")
        }
    }

    /// Directory holding voice-model files.
    pub fn models_dir(&self) -> PathBuf {
        self.root.join("models")
    }
}

/// Default environment root under the platform data directory.
fn default_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pyvet")
        .join(ENV_DIR_NAME)
}
