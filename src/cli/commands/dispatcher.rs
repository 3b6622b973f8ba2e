//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::env::PythonEnv;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command against the given UI.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    env: PythonEnv,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given environment.
    pub fn new(env: PythonEnv) -> Self {
        Self { env }
    }

    /// The environment commands will run against.
    pub fn env(&self) -> &PythonEnv {
        &self.env
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand means `check`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(self.env.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Python(args)) => {
                let cmd = super::python::PythonCommand::new(self.env.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Status(args)) => {
                let cmd = super::status::StatusCommand::new(self.env.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Devices(args)) => {
                let cmd = super::devices::DevicesCommand::new(self.env.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Models(args)) => {
                let cmd = super::models::ModelsCommand::new(self.env.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Setup(args)) => {
                let cmd = super::setup::SetupCommand::new(self.env.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Reset(args)) => {
                let cmd = super::reset::ResetCommand::new(self.env.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::check::CheckCommand::new(self.env.clone(), CheckArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_holds_the_environment() {
        let dispatcher = CommandDispatcher::new(PythonEnv::at("/test/env"));
        assert_eq!(dispatcher.env().root(), Path::new("/test/env"));
    }
}
