//! Environment provisioning: setup, force reinstall, and reset.
//!
//! Provisioning always runs the same ordered sequence: verify the bootstrap
//! interpreter, create the venv, then install the four required
//! distributions. The PyTorch packages are pinned to the cu118 builds and
//! come from the PyTorch wheel index; the speech libraries come from PyPI.

use std::path::PathBuf;

use crate::env::PythonEnv;
use crate::error::{PyvetError, Result};
use crate::pip::install::{InstallOptions, PipCli};
use crate::python::{Interpreter, PythonVersion};
use crate::ui::UserInterface;

/// Pinned torch build matching the runtime's CUDA toolchain.
const TORCH_SPEC: &str = "torch==2.1.1+cu118";
/// Pinned torchaudio build matching the torch pin.
const TORCHAUDIO_SPEC: &str = "torchaudio==2.1.1+cu118";
/// Wheel index hosting the cu118 builds.
const TORCH_INDEX_URL: &str = "https://download.pytorch.org/whl/cu118";

/// What a successful provisioning run produced.
#[derive(Debug, Clone)]
pub struct SetupOutcome {
    /// Raw interpreter version line of the bootstrap interpreter.
    pub python_version: String,
    /// Environment root that was provisioned.
    pub env_path: PathBuf,
    /// Requirement specifiers installed, in order.
    pub installed: Vec<String>,
}

/// Set up the environment: version gate, venv, package installs.
///
/// `bootstrap` is the interpreter used to create the venv (the system
/// interpreter in normal operation; injectable for tests). With `force`,
/// the four packages are first uninstalled and the pip cache purged, and
/// installs run with `--force-reinstall --no-cache-dir`.
pub fn run_setup(
    env: &PythonEnv,
    bootstrap: &Interpreter,
    force: bool,
    ui: &mut dyn UserInterface,
) -> Result<SetupOutcome> {
    let python_version = check_bootstrap(bootstrap, ui)?;
    create_venv(env, bootstrap, ui)?;

    let pip = PipCli::new(env.pip_path());
    if force {
        clean_existing(&pip, ui);
    }
    install_packages(&pip, force, ui)?;

    Ok(SetupOutcome {
        python_version,
        env_path: env.root().to_path_buf(),
        installed: vec![
            "edge-tts".to_string(),
            TORCH_SPEC.to_string(),
            TORCHAUDIO_SPEC.to_string(),
            "rvc-python".to_string(),
        ],
    })
}

/// Reset the environment: remove the root, then provision from scratch.
pub fn run_reset(
    env: &PythonEnv,
    bootstrap: &Interpreter,
    ui: &mut dyn UserInterface,
) -> Result<SetupOutcome> {
    if env.exists() {
        let mut spinner = ui.start_spinner("Removing existing virtual environment...");
        match std::fs::remove_dir_all(env.root()) {
            Ok(()) => spinner.finish_success("Removed existing virtual environment"),
            Err(e) => {
                spinner.finish_error("Failed to remove existing environment");
                return Err(e.into());
            }
        }
    }

    run_setup(env, bootstrap, false, ui)
}

/// Verify the bootstrap interpreter exists and satisfies the version gate.
fn check_bootstrap(bootstrap: &Interpreter, ui: &mut dyn UserInterface) -> Result<String> {
    let mut spinner = ui.start_spinner("Checking Python installation and version...");

    let raw = match bootstrap.version_output() {
        Ok(Some(raw)) if !raw.is_empty() => raw,
        _ => {
            spinner.finish_error("Python not found");
            return Err(PyvetError::PythonMissing);
        }
    };

    let version = match PythonVersion::parse(&raw) {
        Ok(version) => version,
        Err(e) => {
            spinner.finish_error(&format!("Found {}", raw));
            return Err(e);
        }
    };
    if let Err(e) = version.require_supported() {
        spinner.finish_error(&format!("Found {}", raw));
        return Err(e);
    }

    spinner.finish_success(&format!("Found {}", raw));
    Ok(raw)
}

/// Create the environment root and the venv inside it.
fn create_venv(env: &PythonEnv, bootstrap: &Interpreter, ui: &mut dyn UserInterface) -> Result<()> {
    std::fs::create_dir_all(env.root())?;

    let mut spinner = ui.start_spinner("Creating Python virtual environment...");
    let root = env.root().to_string_lossy().into_owned();
    let captured = bootstrap
        .run_module("venv", &[root.as_str()])
        .map_err(|e| PyvetError::VenvCreateFailed {
            detail: e.to_string(),
        });

    match captured {
        Ok(captured) if captured.success => {
            spinner.finish_success("Created Python virtual environment");
            Ok(())
        }
        Ok(captured) => {
            spinner.finish_error("Failed to create virtual environment");
            Err(PyvetError::VenvCreateFailed {
                detail: captured.stderr.trim().to_string(),
            })
        }
        Err(e) => {
            spinner.finish_error("Failed to create virtual environment");
            Err(e)
        }
    }
}

/// Uninstall the four packages and purge the pip cache, warning on failures.
fn clean_existing(pip: &PipCli, ui: &mut dyn UserInterface) {
    for package in ["edge-tts", "rvc-python", "torch", "torchaudio"] {
        let mut spinner = ui.start_spinner(&format!("Uninstalling {}...", package));
        match pip.uninstall(package) {
            Ok(()) => spinner.finish_success(&format!("Uninstalled {}", package)),
            Err(e) => {
                spinner.finish_skipped(&format!("Could not uninstall {}", package));
                ui.warning(&format!("Failed to uninstall {}: {}", package, e));
            }
        }
    }

    // Cache purge failing (e.g. an already-empty cache) is not worth a warning.
    let _ = pip.cache_purge();
}

/// Install the four packages in order.
fn install_packages(pip: &PipCli, force: bool, ui: &mut dyn UserInterface) -> Result<()> {
    let plain = InstallOptions {
        index_url: None,
        force,
    };
    let torch_index = InstallOptions {
        index_url: Some(TORCH_INDEX_URL.to_string()),
        force,
    };

    let steps: [(&str, &[&str], &InstallOptions); 4] = [
        ("edge-tts", &["edge-tts"], &plain),
        ("PyTorch (cu118)", &[TORCH_SPEC], &torch_index),
        ("torchaudio (cu118)", &[TORCHAUDIO_SPEC], &torch_index),
        ("rvc-python", &["rvc-python"], &plain),
    ];

    for (label, specs, options) in steps {
        let mut spinner = ui.start_spinner(&format!("Installing {}...", label));
        match pip.install(specs, options) {
            Ok(()) => spinner.finish_success(&format!("Installed {}", label)),
            Err(e) => {
                spinner.finish_error(&format!("Failed to install {}", label));
                return Err(e);
            }
        }
    }

    Ok(())
}
