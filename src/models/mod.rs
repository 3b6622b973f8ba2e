//! Voice-model inventory.
//!
//! Models are `.pth` files dropped directly into the environment's models
//! directory. The inventory is a flat, sorted list of file names; nested
//! directories are not searched.

use std::path::Path;

use crate::error::Result;

/// File extension of voice-model files.
const MODEL_EXTENSION: &str = ".pth";

/// List model file names in `dir`, sorted by name.
///
/// A missing directory is an empty inventory, not an error.
pub fn list_models(dir: &Path) -> Result<Vec<String>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut models = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            if file_name.ends_with(MODEL_EXTENSION) {
                models.push(file_name.to_string());
            }
        }
    }

    models.sort();
    Ok(models)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_directory_is_empty() {
        let temp = TempDir::new().unwrap();
        let models = list_models(&temp.path().join("models")).unwrap();
        assert!(models.is_empty());
    }

    #[test]
    fn lists_only_pth_files_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("zeta.pth"), b"").unwrap();
        fs::write(temp.path().join("alpha.pth"), b"").unwrap();
        fs::write(temp.path().join("notes.txt"), b"").unwrap();
        fs::write(temp.path().join("index.json"), b"").unwrap();

        let models = list_models(temp.path()).unwrap();
        assert_eq!(models, ["alpha.pth", "zeta.pth"]);
    }

    #[test]
    fn skips_directories_even_with_model_extension() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("nested.pth")).unwrap();
        fs::write(temp.path().join("real.pth"), b"").unwrap();

        let models = list_models(temp.path()).unwrap();
        assert_eq!(models, ["real.pth"]);
    }

    #[test]
    fn empty_directory_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(list_models(temp.path()).unwrap().is_empty());
    }
}
