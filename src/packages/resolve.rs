//! Version resolution for the required distributions.
//!
//! Resolution is a three-step chain, applied to each package in turn:
//!
//! 1. `python -m pip show <dist>`, scanning stdout for a `version:` line.
//! 2. `python -c "import <module>; print(<module>.__version__)"`.
//! 3. The `not installed` sentinel.
//!
//! Nothing in the chain can fail the overall run. A pip subprocess that
//! cannot even be spawned falls through to the import fallback the same
//! way an empty `pip show` answer does.

use crate::packages::{PackageSpec, REQUIRED_PACKAGES};
use crate::pip;
use crate::python::Interpreter;

use super::{LibraryVersions, NOT_INSTALLED};

/// Resolve the version of a single distribution.
pub fn resolve_version(interpreter: &Interpreter, spec: &PackageSpec) -> String {
    match pip::show(interpreter, spec.dist) {
        Ok(stdout) => {
            if let Some(version) = pip::version_from_show(&stdout) {
                tracing::debug!(dist = spec.dist, %version, "resolved via pip show");
                return version;
            }
        }
        Err(e) => {
            tracing::debug!(dist = spec.dist, error = %e, "pip show could not be spawned");
        }
    }

    if let Some(version) = import_version(interpreter, spec) {
        tracing::debug!(dist = spec.dist, %version, "resolved via import fallback");
        return version;
    }

    tracing::debug!(dist = spec.dist, "not installed");
    NOT_INSTALLED.to_string()
}

/// Resolve all four required distributions, sequentially, in report order.
pub fn resolve_all(interpreter: &Interpreter) -> LibraryVersions {
    let mut report = LibraryVersions::all_missing();
    for spec in &REQUIRED_PACKAGES {
        report.set(spec.dist, resolve_version(interpreter, spec));
    }
    report
}

/// Import the package's module and read its version attribute.
fn import_version(interpreter: &Interpreter, spec: &PackageSpec) -> Option<String> {
    let code = format!(
        "import {module}; print({module}.__version__)",
        module = spec.module
    );
    let captured = interpreter.run_code(&code).ok()?;
    if !captured.success {
        return None;
    }
    let version = captured.stdout.trim();
    (!version.is_empty()).then(|| version.to_string())
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use crate::env::PythonEnv;
    use std::fs;
    use tempfile::TempDir;

    /// A scripted stand-in for the interpreter.
    ///
    /// Handles `-m pip show <dist>` and `-c <code>` the way the resolution
    /// chain invokes them, with behavior keyed off the distribution and
    /// module names.
    fn scripted_interpreter(dir: &std::path::Path) -> Interpreter {
        use std::os::unix::fs::PermissionsExt;
        let bin = dir.join("bin");
        fs::create_dir_all(&bin).unwrap();
        let path = bin.join("python");
        let script = r#"#!/bin/sh
if [ "$1" = "-m" ] && [ "$2" = "pip" ] && [ "$3" = "show" ]; then
    case "$4" in
        torch) printf 'Name: torch\nVersion: 2.1.0\n'; exit 0 ;;
        torchaudio) printf 'Name: torchaudio\nversion: 2.1.1+cu118\n'; exit 0 ;;
        *) exit 1 ;;
    esac
fi
if [ "$1" = "-c" ]; then
    case "$2" in
        *edge_tts*) echo "7.0.0"; exit 0 ;;
        *) echo "ModuleNotFoundError" 1>&2; exit 1 ;;
    esac
fi
exit 2
"#;
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        Interpreter::for_env(&PythonEnv::at(dir))
    }

    fn spec(dist: &'static str, module: &'static str) -> PackageSpec {
        PackageSpec { dist, module }
    }

    #[test]
    fn pip_show_version_wins() {
        let temp = TempDir::new().unwrap();
        let interpreter = scripted_interpreter(temp.path());
        assert_eq!(
            resolve_version(&interpreter, &spec("torch", "torch")),
            "2.1.0"
        );
    }

    #[test]
    fn lowercase_version_line_is_accepted() {
        let temp = TempDir::new().unwrap();
        let interpreter = scripted_interpreter(temp.path());
        assert_eq!(
            resolve_version(&interpreter, &spec("torchaudio", "torchaudio")),
            "2.1.1+cu118"
        );
    }

    #[test]
    fn import_fallback_covers_missing_pip_record() {
        let temp = TempDir::new().unwrap();
        let interpreter = scripted_interpreter(temp.path());
        assert_eq!(
            resolve_version(&interpreter, &spec("edge-tts", "edge_tts")),
            "7.0.0"
        );
    }

    #[test]
    fn both_failures_yield_the_sentinel() {
        let temp = TempDir::new().unwrap();
        let interpreter = scripted_interpreter(temp.path());
        assert_eq!(
            resolve_version(&interpreter, &spec("rvc-python", "rvc")),
            NOT_INSTALLED
        );
    }

    #[test]
    fn unspawnable_interpreter_yields_all_sentinels() {
        let temp = TempDir::new().unwrap();
        let env = PythonEnv::at(temp.path());
        fs::create_dir_all(env.python_path().parent().unwrap()).unwrap();
        // Present but not executable: every spawn fails, and every failure
        // is absorbed into the sentinel.
        fs::write(env.python_path(), "not a binary").unwrap();
        let interpreter = Interpreter::venv(&env).unwrap();

        let report = resolve_all(&interpreter);
        assert_eq!(report, LibraryVersions::all_missing());
    }

    #[test]
    fn resolve_all_fills_every_entry() {
        let temp = TempDir::new().unwrap();
        let interpreter = scripted_interpreter(temp.path());
        let report = resolve_all(&interpreter);

        assert_eq!(report.torch, "2.1.0");
        assert_eq!(report.torchaudio, "2.1.1+cu118");
        assert_eq!(report.edge_tts, "7.0.0");
        assert_eq!(report.rvc_python, NOT_INSTALLED);
        assert_eq!(report.missing(), ["rvc-python"]);
    }
}
