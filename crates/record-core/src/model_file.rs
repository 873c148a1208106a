//! Model files: a model plus generation settings, stored as YAML or JSON.
//!
//! ```yaml
//! volume: 50
//! seed: 42
//! fields:
//!   id: i
//!   title: "t:4-6w"
//!   content: "t:5s"
//!   image: "p:400*300"
//! ```

use crate::model::Model;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for model file operations.
#[derive(Debug, thiserror::Error)]
pub enum ModelFileError {
    /// Error reading model file
    #[error("Failed to read model file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML, including invalid field type strings
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Error parsing JSON, including invalid field type strings
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File extension is neither YAML nor JSON
    #[error("Unsupported model file format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),
}

/// A model together with optional generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelFile {
    /// Number of records per batch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<usize>,

    /// Seed for reproducible output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Field declarations, in output order
    pub fields: Model,
}

impl ModelFile {
    /// Load a model file, picking the format from the extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelFileError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml(&fs::read_to_string(path)?),
            Some("json") => Self::from_json(&fs::read_to_string(path)?),
            _ => Err(ModelFileError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parse a model file from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ModelFileError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a model file from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ModelFileError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
volume: 5
seed: 42
fields:
  id: "i:1-1000"
  title: "t:4-6w"
  score: "f:0-10"
  image: "p:640*480"
"#;

    #[test]
    fn test_from_yaml() {
        let file = ModelFile::from_yaml(SAMPLE).unwrap();
        assert_eq!(file.volume, Some(5));
        assert_eq!(file.seed, Some(42));
        assert_eq!(
            file.fields.field_names(),
            vec!["id", "title", "score", "image"]
        );
    }

    #[test]
    fn test_settings_are_optional() {
        let file = ModelFile::from_yaml("fields:\n  id: i\n").unwrap();
        assert_eq!(file.volume, None);
        assert_eq!(file.seed, None);
        assert_eq!(file.fields.len(), 1);
    }

    #[test]
    fn test_invalid_field_fails_whole_file() {
        let err = ModelFile::from_yaml("fields:\n  id: \"i:5-1\"\n").unwrap_err();
        assert!(matches!(err, ModelFileError::YamlError(_)));
        assert!(err.to_string().contains("inverted"));
    }

    #[test]
    fn test_from_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("model.yml");
        std::fs::write(&yaml_path, SAMPLE).unwrap();
        assert_eq!(ModelFile::from_file(&yaml_path).unwrap().volume, Some(5));

        let json_path = dir.path().join("model.json");
        let mut json_file = std::fs::File::create(&json_path).unwrap();
        write!(json_file, r#"{{"fields": {{"b": "t:2s", "a": "i"}}}}"#).unwrap();
        drop(json_file);
        let file = ModelFile::from_file(&json_path).unwrap();
        assert_eq!(file.fields.field_names(), vec!["b", "a"]);

        let toml_path = dir.path().join("model.toml");
        std::fs::write(&toml_path, "").unwrap();
        assert!(matches!(
            ModelFile::from_file(&toml_path),
            Err(ModelFileError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = ModelFile::from_file("/nonexistent/model.yaml").unwrap_err();
        assert!(matches!(err, ModelFileError::IoError(_)));
    }
}
