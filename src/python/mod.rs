//! Python interpreter discovery and execution.
//!
//! Every query pyvet performs goes through a Python interpreter: the
//! environment's own venv interpreter when it is present, otherwise the
//! system one (`python` on Windows, `python3` elsewhere). [`Interpreter`]
//! records which of the two it is so reports can say so.

pub mod version;

pub use version::{PythonVersion, MIN_PYTHON};

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::env::PythonEnv;

/// Where an interpreter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The environment's own venv interpreter.
    Venv,
    /// The system interpreter found by name on PATH.
    System,
}

impl Source {
    /// Human-readable provenance label used in version reports.
    pub fn label(&self) -> &'static str {
        match self {
            Source::Venv => "Virtual Environment",
            Source::System => "System",
        }
    }
}

/// Captured output of a finished interpreter run.
#[derive(Debug, Clone)]
pub struct Captured {
    /// Whether the process exited with status 0.
    pub success: bool,
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,
    /// Standard output, lossily decoded.
    pub stdout: String,
    /// Standard error, lossily decoded.
    pub stderr: String,
}

/// A resolved Python interpreter.
#[derive(Debug, Clone)]
pub struct Interpreter {
    path: PathBuf,
    source: Source,
}

impl Interpreter {
    /// The interpreter for an environment: its venv interpreter when the
    /// binary exists, the system interpreter otherwise.
    pub fn for_env(env: &PythonEnv) -> Self {
        Self::venv(env).unwrap_or_else(Self::system)
    }

    /// The environment's venv interpreter, if its binary exists.
    pub fn venv(env: &PythonEnv) -> Option<Self> {
        let path = env.python_path();
        path.is_file().then_some(Self {
            path,
            source: Source::Venv,
        })
    }

    /// The system interpreter, addressed by name and resolved via PATH
    /// at spawn time.
    pub fn system() -> Self {
        let name = if cfg!(windows) { "python" } else { "python3" };
        Self::at(name)
    }

    /// An interpreter at an explicit path, treated as a system one.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            source: Source::System,
        }
    }

    /// Path (or bare command name) of the interpreter.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this is the venv or the system interpreter.
    pub fn source(&self) -> Source {
        self.source
    }

    /// Run the interpreter with raw arguments, capturing output.
    ///
    /// Spawn failures surface as `Err`; a non-zero exit is a normal
    /// [`Captured`] with `success == false`, matching how the version
    /// probe treats pip output as opaque text regardless of exit status.
    pub fn run(&self, args: &[&str]) -> std::io::Result<Captured> {
        tracing::debug!(interpreter = %self.path.display(), ?args, "running python");
        let output = Command::new(&self.path).args(args).output()?;
        Ok(Captured {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run `python -m <module> <args…>`.
    pub fn run_module(&self, module: &str, args: &[&str]) -> std::io::Result<Captured> {
        let mut full = vec!["-m", module];
        full.extend_from_slice(args);
        self.run(&full)
    }

    /// Run `python -c <code>`.
    pub fn run_code(&self, code: &str) -> std::io::Result<Captured> {
        self.run(&["-c", code])
    }

    /// Raw trimmed output of `python --version` (e.g. `Python 3.11.4`).
    pub fn version_output(&self) -> std::io::Result<Option<String>> {
        let captured = self.run(&["--version"])?;
        if captured.success {
            Ok(Some(captured.stdout.trim().to_string()))
        } else {
            Ok(None)
        }
    }
}
