use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::FixtureError;

/// Where golden files live relative to the source root.
///
/// ```toml
/// source_marker = "src/google/protobuf"
/// testdata_dir = "src/google/protobuf/testdata"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GoldenConfig {
    /// Relative directory whose presence identifies the source root.
    pub source_marker: PathBuf,
    /// Directory holding the golden files, relative to the source root.
    pub testdata_dir: PathBuf,
}

impl Default for GoldenConfig {
    fn default() -> Self {
        Self {
            source_marker: PathBuf::from("src/google/protobuf"),
            testdata_dir: PathBuf::from("src/google/protobuf/testdata"),
        }
    }
}

impl GoldenConfig {
    pub fn from_toml(input: &str) -> Result<Self, FixtureError> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|source| FixtureError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_protobuf_layout() {
        assert_eq!(GoldenConfig::from_toml("").unwrap(), GoldenConfig::default());
    }

    #[test]
    fn overrides_one_key() {
        let config = GoldenConfig::from_toml(r#"testdata_dir = "golden""#).unwrap();
        assert_eq!(config.testdata_dir, PathBuf::from("golden"));
        assert_eq!(config.source_marker, PathBuf::from("src/google/protobuf"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = GoldenConfig::from_toml("marker = 1").unwrap_err();
        assert!(matches!(err, FixtureError::Config(_)));
    }
}
