//! Shared JSON file helpers

use std::fs;

use camino::Utf8Path;
use serde_json::Value;

use crate::error::Result;

/// Serialize a JSON document pretty-printed and move it into place
///
/// Atomic write: write to a temp sibling, then rename. Readers never
/// observe a half-written document.
pub fn write_json_atomic(path: &Utf8Path, value: &Value) -> Result<()> {
    let temp_path = path.with_extension("tmp");

    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_write_json_atomic_creates_pretty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp_dir.path()).unwrap().join("a.json");

        write_json_atomic(&path, &json!({"key": "value"})).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        let parsed: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["key"], "value");
    }

    #[test]
    fn test_write_json_atomic_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp_dir.path()).unwrap().join("a.json");

        write_json_atomic(&path, &json!({"version": 1})).unwrap();
        write_json_atomic(&path, &json!({"version": 2})).unwrap();

        let parsed: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["version"], 2);
    }

    #[test]
    fn test_write_json_atomic_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp_dir.path()).unwrap();
        let path = dir.join("a.json");

        write_json_atomic(&path, &json!({})).unwrap();

        let entries: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(entries, vec!["a.json"]);
    }
}
