//! Models command implementation.
//!
//! `pyvet models` lists the `.pth` voice-model files in the environment's
//! models directory.

use crate::cli::args::ModelsArgs;
use crate::env::PythonEnv;
use crate::error::Result;
use crate::models::list_models;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The models command implementation.
pub struct ModelsCommand {
    env: PythonEnv,
    #[allow(dead_code)]
    args: ModelsArgs,
}

impl ModelsCommand {
    /// Create a new models command.
    pub fn new(env: PythonEnv, args: ModelsArgs) -> Self {
        Self { env, args }
    }
}

impl Command for ModelsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let models = list_models(&self.env.models_dir())?;

        if models.is_empty() {
            ui.message("No voice models installed");
        } else {
            for model in &models {
                ui.message(model);
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_inventory_prints_placeholder() {
        let temp = TempDir::new().unwrap();
        let cmd = ModelsCommand::new(PythonEnv::at(temp.path()), ModelsArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        assert_eq!(ui.messages(), ["No voice models installed"]);
    }

    #[test]
    fn lists_models_sorted() {
        let temp = TempDir::new().unwrap();
        let env = PythonEnv::at(temp.path());
        fs::create_dir_all(env.models_dir()).unwrap();
        fs::write(env.models_dir().join("beta.pth"), b"").unwrap();
        fs::write(env.models_dir().join("alpha.pth"), b"").unwrap();
        fs::write(env.models_dir().join("readme.md"), b"").unwrap();

        let cmd = ModelsCommand::new(env, ModelsArgs::default());
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.messages(), ["alpha.pth", "beta.pth"]);
    }
}
