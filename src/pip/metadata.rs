//! Scanning `pip show` metadata output.
//!
//! pip's output format is not a contract; it is treated as opaque text and
//! pattern-matched. The only line of interest is the first one beginning
//! with a case-insensitive `version:` prefix.

/// Extract the version from `pip show` output.
///
/// Returns the text after the first `:` on the first line whose prefix up
/// to that `:` is exactly `version` (case-insensitive), trimmed of
/// surrounding whitespace. A line like `version : 1.0` does not match:
/// the prefix must be `version:` with no intervening characters.
pub fn version_from_show(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        key.eq_ignore_ascii_case("version")
            .then(|| value.trim().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TORCH_SHOW: &str = "\
Name: torch
Version: 2.1.0
Summary: Tensors and Dynamic neural networks in Python
Home-page: https://pytorch.org/
Location: /env/lib/python3.11/site-packages
Requires: filelock, fsspec, jinja2
Required-by: torchaudio
";

    #[test]
    fn extracts_version_line() {
        assert_eq!(version_from_show(TORCH_SHOW).as_deref(), Some("2.1.0"));
    }

    #[test]
    fn prefix_match_is_case_insensitive() {
        assert_eq!(
            version_from_show("version: 1.2.3\n").as_deref(),
            Some("1.2.3")
        );
        assert_eq!(
            version_from_show("VERSION: 1.2.3\n").as_deref(),
            Some("1.2.3")
        );
    }

    #[test]
    fn value_is_trimmed() {
        assert_eq!(
            version_from_show("Version:   2.1.1+cu118  \n").as_deref(),
            Some("2.1.1+cu118")
        );
    }

    #[test]
    fn first_matching_line_wins() {
        let output = "Version: 1.0.0\nVersion: 2.0.0\n";
        assert_eq!(version_from_show(output).as_deref(), Some("1.0.0"));
    }

    #[test]
    fn space_before_colon_does_not_match() {
        assert_eq!(version_from_show("version : 1.0\n"), None);
    }

    #[test]
    fn prefixed_key_does_not_match() {
        assert_eq!(version_from_show("Metadata-Version: 2.1\n"), None);
    }

    #[test]
    fn line_without_colon_does_not_match() {
        assert_eq!(version_from_show("Version\n"), None);
    }

    #[test]
    fn empty_output_yields_none() {
        assert_eq!(version_from_show(""), None);
    }

    #[test]
    fn empty_value_yields_empty_string() {
        // pip never prints this, but the scan contract is purely textual.
        assert_eq!(version_from_show("Version:\n").as_deref(), Some(""));
    }
}
