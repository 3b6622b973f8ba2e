//! Devices command implementation.
//!
//! `pyvet devices` lists the compute devices the runtime could use. The
//! probe needs the environment's own interpreter; the system one would
//! answer for the wrong torch install.

use crate::cli::args::DevicesArgs;
use crate::devices;
use crate::env::PythonEnv;
use crate::error::{PyvetError, Result};
use crate::python::Interpreter;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The devices command implementation.
pub struct DevicesCommand {
    env: PythonEnv,
    args: DevicesArgs,
}

impl DevicesCommand {
    /// Create a new devices command.
    pub fn new(env: PythonEnv, args: DevicesArgs) -> Self {
        Self { env, args }
    }
}

impl Command for DevicesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let interpreter =
            Interpreter::venv(&self.env).ok_or_else(|| PyvetError::InterpreterNotFound {
                path: self.env.python_path(),
            })?;

        let devices = devices::probe(&interpreter)?;

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&devices)?);
        } else {
            for device in &devices {
                ui.key_value(&device.id, &device.name);
            }
        }

        Ok(CommandResult::success())
    }
}
