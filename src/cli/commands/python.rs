//! Python command implementation.
//!
//! `pyvet python` reports the interpreter version together with where it
//! came from. A broken venv interpreter falls back to the system one, so
//! the command still answers on a half-provisioned machine.

use crate::cli::args::PythonArgs;
use crate::env::PythonEnv;
use crate::error::{PyvetError, Result};
use crate::python::Interpreter;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The python command implementation.
pub struct PythonCommand {
    env: PythonEnv,
    #[allow(dead_code)]
    args: PythonArgs,
}

impl PythonCommand {
    /// Create a new python command.
    pub fn new(env: PythonEnv, args: PythonArgs) -> Self {
        Self { env, args }
    }

    /// Resolve the version line, venv first, system as fallback.
    fn version_line(&self) -> Result<String> {
        if let Some(venv) = Interpreter::venv(&self.env) {
            if let Ok(Some(raw)) = venv.version_output() {
                return Ok(format!("{} ({})", raw, venv.source().label()));
            }
            tracing::debug!("virtual environment interpreter failed, trying system Python");
        }

        let system = Interpreter::system();
        match system.version_output() {
            Ok(Some(raw)) => Ok(format!("{} ({})", raw, system.source().label())),
            _ => Err(PyvetError::PythonMissing),
        }
    }
}

impl Command for PythonCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let line = self.version_line()?;
        ui.message(&line);
        Ok(CommandResult::success())
    }
}
