//! Setup command implementation.
//!
//! `pyvet setup` provisions the environment end to end. With `--force` it
//! uninstalls the four libraries, purges the pip cache, and reinstalls.

use crate::cli::args::SetupArgs;
use crate::env::PythonEnv;
use crate::error::Result;
use crate::python::Interpreter;
use crate::setup::run_setup;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The setup command implementation.
pub struct SetupCommand {
    env: PythonEnv,
    args: SetupArgs,
    bootstrap: Interpreter,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(env: PythonEnv, args: SetupArgs) -> Self {
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

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Python Environment Setup");

        let outcome = run_setup(&self.env, &self.bootstrap, self.args.force, ui)?;

        ui.message("");
        ui.key_value("Python", &outcome.python_version);
        ui.key_value("Environment", &outcome.env_path.display().to_string());
        ui.key_value("Installed", &outcome.installed.join(", "));
        ui.message("");
        ui.success("Environment setup completed successfully!");

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PyvetError;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn setup_command_creation() {
        let cmd = SetupCommand::new(PythonEnv::at("/tmp/env"), SetupArgs { force: true });
        assert!(cmd.args.force);
    }

    #[test]
    fn unspawnable_bootstrap_reports_python_missing() {
        let temp = TempDir::new().unwrap();
        let cmd = SetupCommand::new(PythonEnv::at(temp.path().join("env")), SetupArgs::default())
            .with_bootstrap(Interpreter::at("/nonexistent/pyvet-test-python"));
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, PyvetError::PythonMissing));
    }
}
