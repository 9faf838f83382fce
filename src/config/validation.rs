//! Configuration validation.

use super::types::RenderConfig;
use crate::error::{Result, TagValueError};

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

fn check_indent(field: &str, indent: &str, errors: &mut Vec<ConfigError>) {
    if indent.chars().any(|c| c != ' ' && c != '\t') {
        errors.push(ConfigError {
            field: field.to_string(),
            message: format!("Indent may only contain spaces and tabs, got {indent:?}"),
        });
    }
}

impl Validatable for RenderConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        check_indent("comment_indent", &self.comment_indent, &mut errors);
        check_indent("file_comment_indent", &self.file_comment_indent, &mut errors);
        errors
    }
}

impl RenderConfig {
    /// Fail with a config error if any field is invalid
    pub(crate) fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(TagValueError::config(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(RenderConfig::default().is_valid());
    }

    #[test]
    fn test_indent_rejects_non_whitespace() {
        let config = RenderConfig::default()
            .with_comment_indent("  ")
            .with_file_comment_indent("- ");
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "file_comment_indent");
    }

    #[test]
    fn test_newline_indent_is_invalid() {
        let config = RenderConfig::default().with_comment_indent("\n");
        assert!(!config.is_valid());
    }

    #[test]
    fn test_ensure_valid_reports_every_field() {
        assert!(RenderConfig::default().ensure_valid().is_ok());

        let config = RenderConfig::default()
            .with_comment_indent("\n")
            .with_file_comment_indent("x");
        match config.ensure_valid() {
            Err(TagValueError::Config(msg)) => {
                assert!(msg.starts_with("comment_indent: "), "{msg}");
                assert!(msg.contains("; file_comment_indent: "), "{msg}");
            }
            other => panic!("Expected Config error, got {other:?}"),
        }
    }
}
