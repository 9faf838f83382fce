//! Configuration file loading.
//!
//! Render settings live in a small YAML file:
//!
//! ```yaml
//! comment_indent: "    "
//! file_comment_indent: ""
//! block_separator: true
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

use super::types::RenderConfig;
use super::validation::Validatable;

/// Error type for config file operations.
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config file: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Invalid(Vec<super::ConfigError>),
}

/// Load and validate a `RenderConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<RenderConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: RenderConfig = serde_yaml::from_str(&content)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigFileError::Invalid(errors));
    }
    Ok(config)
}

/// Load config from `path` if given, falling back to defaults on any failure.
#[must_use]
pub fn load_or_default(path: Option<&Path>) -> (RenderConfig, Option<PathBuf>) {
    let Some(path) = path else {
        return (RenderConfig::default(), None);
    };

    match load_config_file(path) {
        Ok(config) => (config, Some(path.to_path_buf())),
        Err(e) => {
            tracing::warn!("Failed to load config from {}: {}", path.display(), e);
            (RenderConfig::default(), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn test_load_partial_config_keeps_defaults() {
        let file = write_config("comment_indent: \"  \"\n");
        let config = load_config_file(file.path()).expect("load");
        assert_eq!(config.comment_indent, "  ");
        assert_eq!(config.file_comment_indent, "");
        assert!(config.block_separator);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config_file(Path::new("/nonexistent/render.yaml")).unwrap_err();
        assert!(matches!(err, ConfigFileError::NotFound(_)));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let file = write_config("file_comment_indent: \"> \"\n");
        let err = load_config_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigFileError::Invalid(_)));
        assert!(err.to_string().contains("file_comment_indent"));
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let file = write_config("block_separator: [not, a, bool]\n");
        assert!(matches!(
            load_config_file(file.path()),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let (config, loaded) = load_or_default(Some(Path::new("/nonexistent/render.yaml")));
        assert_eq!(config, RenderConfig::default());
        assert!(loaded.is_none());

        let (config, loaded) = load_or_default(None);
        assert_eq!(config, RenderConfig::default());
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_or_default_reports_source() {
        let file = write_config("block_separator: false\n");
        let (config, loaded) = load_or_default(Some(file.path()));
        assert!(!config.block_separator);
        assert_eq!(loaded.as_deref(), Some(file.path()));
    }
}
