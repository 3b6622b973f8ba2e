//! pyvet - Python environment diagnostics for speech and ML runtimes.
//!
//! pyvet inspects and provisions the dedicated Python virtual environment
//! used by a voice-conversion/TTS runtime. Its core diagnostic resolves the
//! installed versions of the four required libraries (`rvc-python`,
//! `edge-tts`, `torch`, `torchaudio`) through `pip show`, falling back to
//! importing each library, and reports `not installed` when both fail.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`devices`] - Compute device enumeration via the interpreter
//! - [`env`] - Environment root resolution and venv layout
//! - [`error`] - Error types and result aliases
//! - [`models`] - Voice-model inventory
//! - [`packages`] - Required distributions and version resolution
//! - [`pip`] - Package-manager queries and install plans
//! - [`python`] - Interpreter discovery and execution
//! - [`setup`] - Environment provisioning and reset
//! - [`ui`] - Terminal output, spinners, and prompts
//!
//! # Example
//!
//! ```no_run
//! use pyvet::env::PythonEnv;
//! use pyvet::packages::resolve_all;
//! use pyvet::python::Interpreter;
//!
//! let env = PythonEnv::resolve(None);
//! let report = resolve_all(&Interpreter::for_env(&env));
//! println!("{}", report.to_json());
//! ```

pub mod cli;
pub mod devices;
pub mod env;
pub mod error;
pub mod models;
pub mod packages;
pub mod pip;
pub mod python;
pub mod setup;
pub mod ui;

pub use error::{PyvetError, Result};
