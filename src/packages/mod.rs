//! The required Python distributions and their version resolution.
//!
//! The runtime depends on exactly four distributions: two speech libraries
//! and the two PyTorch packages backing them. The set is fixed; there is no
//! configuration surface for it.

pub mod report;
pub mod resolve;

pub use report::LibraryVersions;
pub use resolve::{resolve_all, resolve_version};

/// Sentinel reported when no version can be determined by any method.
pub const NOT_INSTALLED: &str = "not installed";

/// A required distribution: its PyPI name and its import-module name.
///
/// The two differ for the speech libraries (`rvc-python` imports as `rvc`,
/// `edge-tts` as `edge_tts`), which is exactly why the import fallback needs
/// its own name column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageSpec {
    /// Distribution name as known to pip.
    pub dist: &'static str,
    /// Module name used by the import fallback.
    pub module: &'static str,
}

/// The four distributions the runtime requires, in report order.
pub const REQUIRED_PACKAGES: [PackageSpec; 4] = [
    PackageSpec {
        dist: "rvc-python",
        module: "rvc",
    },
    PackageSpec {
        dist: "edge-tts",
        module: "edge_tts",
    },
    PackageSpec {
        dist: "torch",
        module: "torch",
    },
    PackageSpec {
        dist: "torchaudio",
        module: "torchaudio",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_has_exactly_four_entries() {
        assert_eq!(REQUIRED_PACKAGES.len(), 4);
    }

    #[test]
    fn manifest_order_matches_report_order() {
        let dists: Vec<_> = REQUIRED_PACKAGES.iter().map(|p| p.dist).collect();
        assert_eq!(dists, ["rvc-python", "edge-tts", "torch", "torchaudio"]);
    }

    #[test]
    fn import_names_diverge_only_for_speech_libraries() {
        for spec in &REQUIRED_PACKAGES {
            match spec.dist {
                "rvc-python" => assert_eq!(spec.module, "rvc"),
                "edge-tts" => assert_eq!(spec.module, "edge_tts"),
                other => assert_eq!(spec.module, other),
            }
        }
    }

    #[test]
    fn sentinel_is_the_exact_literal() {
        assert_eq!(NOT_INSTALLED, "not installed");
    }
}
