//! Reset command implementation.
//!
//! `pyvet reset` deletes the environment root and rebuilds it. Destructive,
//! so it asks first; `--yes` skips the prompt, and non-interactive runs
//! answer no unless `--yes` is given.

use crate::cli::args::ResetArgs;
use crate::env::PythonEnv;
use crate::error::Result;
use crate::python::Interpreter;
use crate::setup::run_reset;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The reset command implementation.
pub struct ResetCommand {
    env: PythonEnv,
    args: ResetArgs,
    bootstrap: Interpreter,
}

impl ResetCommand {
    /// Create a new reset command.
    pub fn new(env: PythonEnv, args: ResetArgs) -> Self {
        Self {
            env,
            args,
            bootstrap: Interpreter::system(),
        }
    }

    /// Override the bootstrap interpreter (tests inject a scripted one).
    pub fn with_bootstrap(mut self, bootstrap: Interpreter) -> Self {
        self.bootstrap = bootstrap;
        self
    }
}

impl Command for ResetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.args.yes {
            let question = format!(
                "Remove the Python environment at {} and rebuild it?",
                self.env.root().display()
            );
            if !ui.confirm(&question, false)? {
                ui.message("Reset cancelled");
                return Ok(CommandResult::failure(1));
            }
        }

        ui.show_header("Python Environment Reset");

        run_reset(&self.env, &self.bootstrap, ui)?;

        ui.message("");
        ui.success("Python environment reset successfully");

        Ok(CommandResult::success())
    }
}
