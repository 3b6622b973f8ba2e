//! pip invocations used when provisioning the environment.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{PyvetError, Result};

/// Options for a `pip install` invocation.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Alternate package index (e.g. the PyTorch cu118 wheel index).
    pub index_url: Option<String>,
    /// Pass `--force-reinstall --no-cache-dir`.
    pub force: bool,
}

/// Thin wrapper around the environment's pip executable.
#[derive(Debug, Clone)]
pub struct PipCli {
    program: PathBuf,
}

impl PipCli {
    /// Create a wrapper for the pip binary at `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Path of the wrapped pip binary.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Install one or more requirement specifiers.
    pub fn install(&self, specs: &[&str], options: &InstallOptions) -> Result<()> {
        let mut args = vec!["install"];
        if options.force {
            args.push("--force-reinstall");
            args.push("--no-cache-dir");
        }
        args.extend_from_slice(specs);
        if let Some(index) = options.index_url.as_deref() {
            args.push("--index-url");
            args.push(index);
        }
        self.run(&args, &format!("install {}", specs.join(" ")))
    }

    /// Uninstall a package; missing packages are not an error.
    pub fn uninstall(&self, package: &str) -> Result<()> {
        // pip exits zero for `uninstall -y` on an absent package, so any
        // failure here is a real one.
        self.run(&["uninstall", package, "-y"], &format!("uninstall {}", package))
    }

    /// Purge the pip download cache.
    pub fn cache_purge(&self) -> Result<()> {
        self.run(&["cache", "purge"], "purge pip cache")
    }

    fn run(&self, args: &[&str], action: &str) -> Result<()> {
        tracing::debug!(pip = %self.program.display(), ?args, "running pip");
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| PyvetError::PipFailed {
                action: action.to_string(),
                detail: e.to_string(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(PyvetError::PipFailed {
                action: action.to_string(),
                detail: stderr.trim().to_string(),
            })
        }
    }
}
