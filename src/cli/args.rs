//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// pyvet - Python environment diagnostics for speech and ML runtimes.
#[derive(Debug, Parser)]
#[command(name = "pyvet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the Python environment root (overrides the default data directory)
    #[arg(short, long, global = true, env = "PYVET_ENV", value_name = "PATH")]
    pub env: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report installed versions of the required libraries (default)
    Check(CheckArgs),

    /// Show the Python interpreter version
    Python(PythonArgs),

    /// Show environment readiness status
    Status(StatusArgs),

    /// List available compute devices
    Devices(DevicesArgs),

    /// List installed voice-model files
    Models(ModelsArgs),

    /// Create the environment and install the required libraries
    Setup(SetupArgs),

    /// Delete the environment and rebuild it from scratch
    Reset(ResetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {}

/// Arguments for the `python` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PythonArgs {}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Emit the status report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `devices` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DevicesArgs {
    /// Emit the device list as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `models` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ModelsArgs {}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetupArgs {
    /// Uninstall, purge the pip cache, and reinstall everything
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `reset` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
