//! Status command implementation.
//!
//! `pyvet status` answers one question: is the environment ready to run
//! the voice pipeline? Ready means the venv interpreter exists and all
//! four required libraries resolve to a version. The exit code mirrors
//! the answer so scripts can gate on it.

use serde::Serialize;

use crate::cli::args::StatusArgs;
use crate::env::PythonEnv;
use crate::error::Result;
use crate::packages::{resolve_all, LibraryVersions};
use crate::python::Interpreter;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Structured readiness report.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    /// Whether the environment can run the pipeline as-is.
    pub environment_ready: bool,
    /// Interpreter version line, with provenance suffix.
    pub python_version: Option<String>,
    /// Library report; `None` when no venv interpreter exists to ask.
    pub library_versions: Option<LibraryVersions>,
    /// Human-readable summary.
    pub message: String,
}

/// The status command implementation.
pub struct StatusCommand {
    env: PythonEnv,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(env: PythonEnv, args: StatusArgs) -> Self {
        Self { env, args }
    }

    /// Build the readiness report for the environment.
    pub fn build_report(env: &PythonEnv) -> StatusReport {
        if !env.exists() {
            return StatusReport {
                environment_ready: false,
                python_version: None,
                library_versions: None,
                message: "Virtual environment not found".to_string(),
            };
        }

        let venv = Interpreter::venv(env);

        let python_version = venv.as_ref().and_then(|interpreter| {
            let raw = interpreter.version_output().ok().flatten()?;
            Some(format!("{} ({})", raw, interpreter.source().label()))
        });

        let library_versions = venv.as_ref().map(resolve_all);

        let environment_ready = python_version.is_some()
            && library_versions
                .as_ref()
                .is_some_and(LibraryVersions::is_complete);

        let message = if environment_ready {
            "Environment is ready".to_string()
        } else if python_version.is_none() {
            "Python virtual environment not found".to_string()
        } else {
            match &library_versions {
                None => "Failed to check library versions".to_string(),
                Some(report) => {
                    format!("Missing libraries: {}", report.missing().join(", "))
                }
            }
        };

        StatusReport {
            environment_ready,
            python_version,
            library_versions,
            message,
        }
    }

    fn show_human(&self, report: &StatusReport, ui: &mut dyn UserInterface) {
        ui.show_header("Python Environment Status");
        ui.key_value("Environment", &self.env.root().display().to_string());
        ui.key_value(
            "Python",
            report.python_version.as_deref().unwrap_or("not found"),
        );

        if let Some(libraries) = &report.library_versions {
            for (dist, version) in libraries.entries() {
                ui.key_value(dist, version);
            }
        }

        ui.message("");
        if report.environment_ready {
            ui.success(&report.message);
        } else {
            ui.warning(&report.message);
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = Self::build_report(&self.env);

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            self.show_human(&report, ui);
        }

        if report.environment_ready {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
