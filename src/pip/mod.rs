//! Package-manager queries and provisioning commands.
//!
//! Version lookups go through `python -m pip show`, the same route the
//! interpreter itself would take, so the answer reflects the environment
//! being inspected rather than whatever pip is first on PATH. Provisioning
//! (install/uninstall/cache) talks to the environment's pip binary directly.

pub mod install;
pub mod metadata;

pub use install::PipCli;
pub use metadata::version_from_show;

use crate::python::Interpreter;

/// Run `python -m pip show <dist>` and return its stdout.
///
/// The exit status is deliberately ignored: pip prints nothing for an
/// unknown distribution and the caller scans the text for a version line
/// either way. Only a spawn failure is an error.
pub fn show(interpreter: &Interpreter, dist: &str) -> std::io::Result<String> {
    let captured = interpreter.run_module("pip", &["show", dist])?;
    Ok(captured.stdout)
}
