//! Check command implementation.
//!
//! `pyvet check` resolves the installed versions of the four required
//! libraries and prints them as a JSON object. This is the diagnostic
//! other tooling parses, so the contract is strict: stdout carries exactly
//! the four-key object, and the exit status is always success. Lookups
//! that fail resolve to the `not installed` sentinel instead of an error.

use crate::cli::args::CheckArgs;
use crate::env::PythonEnv;
use crate::packages::resolve_all;
use crate::python::Interpreter;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    env: PythonEnv,
    #[allow(dead_code)]
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(env: PythonEnv, args: CheckArgs) -> Self {
        Self { env, args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        if !self.env.exists() {
            tracing::warn!(
                env = %self.env.root().display(),
                "environment not found, falling back to the system interpreter"
            );
        }

        let interpreter = Interpreter::for_env(&self.env);
        let report = resolve_all(&interpreter);
        println!("{}", report.to_json());

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn check_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(PythonEnv::at(temp.path()), CheckArgs::default());
        assert_eq!(cmd.env.root(), temp.path());
    }

    #[cfg(unix)]
    #[test]
    fn check_succeeds_even_with_unusable_interpreter() {
        use std::fs;

        let temp = TempDir::new().unwrap();
        let env = PythonEnv::at(temp.path());
        fs::create_dir_all(env.python_path().parent().unwrap()).unwrap();
        fs::write(env.python_path(), "not a binary").unwrap();

        let cmd = CheckCommand::new(env, CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }
}
