//! The four-entry version report.

use serde::{Deserialize, Serialize};

use super::NOT_INSTALLED;

/// Resolved versions of the four required distributions.
///
/// Serializes to a JSON object with exactly the four fixed keys, in
/// manifest order. Every value is a string: either a version or the
/// `not installed` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryVersions {
    #[serde(rename = "rvc-python")]
    pub rvc_python: String,
    #[serde(rename = "edge-tts")]
    pub edge_tts: String,
    pub torch: String,
    pub torchaudio: String,
}

impl LibraryVersions {
    /// A report with every entry set to the sentinel.
    pub fn all_missing() -> Self {
        Self {
            rvc_python: NOT_INSTALLED.to_string(),
            edge_tts: NOT_INSTALLED.to_string(),
            torch: NOT_INSTALLED.to_string(),
            torchaudio: NOT_INSTALLED.to_string(),
        }
    }

    /// Entries in report order, keyed by distribution name.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("rvc-python", self.rvc_python.as_str()),
            ("edge-tts", self.edge_tts.as_str()),
            ("torch", self.torch.as_str()),
            ("torchaudio", self.torchaudio.as_str()),
        ]
    }

    /// Look up a single entry by distribution name.
    pub fn get(&self, dist: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(name, _)| *name == dist)
            .map(|(_, version)| version)
    }

    /// Set an entry by distribution name. Unknown names are ignored.
    pub fn set(&mut self, dist: &str, version: String) {
        match dist {
            "rvc-python" => self.rvc_python = version,
            "edge-tts" => self.edge_tts = version,
            "torch" => self.torch = version,
            "torchaudio" => self.torchaudio = version,
            _ => {}
        }
    }

    /// Distribution names whose entry is the sentinel.
    pub fn missing(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|(_, version)| *version == NOT_INSTALLED)
            .map(|(name, _)| name)
            .collect()
    }

    /// Whether all four distributions resolved to a version.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Render the report as indented JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("report serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LibraryVersions {
        LibraryVersions {
            rvc_python: NOT_INSTALLED.to_string(),
            edge_tts: "7.0.0".to_string(),
            torch: "2.1.0".to_string(),
            torchaudio: "2.1.1+cu118".to_string(),
        }
    }

    #[test]
    fn json_contains_exactly_the_four_fixed_keys() {
        let value: serde_json::Value = serde_json::from_str(&sample().to_json()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for key in ["rvc-python", "edge-tts", "torch", "torchaudio"] {
            assert!(object.contains_key(key), "missing key {key}");
            assert!(object[key].is_string());
        }
    }

    #[test]
    fn json_is_two_space_indented() {
        let json = sample().to_json();
        assert!(json.starts_with("{\n  \""));
        assert!(json.contains("\"torch\": \"2.1.0\""));
    }

    #[test]
    fn keys_appear_in_manifest_order() {
        let json = sample().to_json();
        let positions: Vec<_> = ["rvc-python", "edge-tts", "torch", "torchaudio"]
            .iter()
            .map(|k| json.find(&format!("\"{}\"", k)).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn missing_lists_sentinel_entries() {
        assert_eq!(sample().missing(), ["rvc-python"]);
        assert!(LibraryVersions::all_missing().missing().len() == 4);
    }

    #[test]
    fn is_complete_requires_all_four() {
        let mut report = sample();
        assert!(!report.is_complete());
        report.set("rvc-python", "0.1.4".to_string());
        assert!(report.is_complete());
    }

    #[test]
    fn get_and_set_round_trip() {
        let mut report = LibraryVersions::all_missing();
        report.set("torch", "2.1.0".to_string());
        assert_eq!(report.get("torch"), Some("2.1.0"));
        assert_eq!(report.get("edge-tts"), Some(NOT_INSTALLED));
        assert_eq!(report.get("numpy"), None);
    }

    #[test]
    fn deserializes_from_renamed_keys() {
        let report: LibraryVersions = serde_json::from_str(
            r#"{"rvc-python": "0.1.4", "edge-tts": "7.0.0", "torch": "2.1.0", "torchaudio": "2.1.1"}"#,
        )
        .unwrap();
        assert_eq!(report.rvc_python, "0.1.4");
        assert_eq!(report.edge_tts, "7.0.0");
    }
}
