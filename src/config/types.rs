//! Configuration types for block rendering.

use serde::{Deserialize, Serialize};

/// Default prefix for notice lines inside `PackageComment`
pub const DEFAULT_COMMENT_INDENT: &str = "\t";

/// Default prefix for notice lines inside `FileComment`
pub const DEFAULT_FILE_COMMENT_INDENT: &str = "";

/// Layout options for rendered blocks.
///
/// None of these change which tags are emitted or in what order; they only
/// control whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Prefix for notice lines nested under an origin in `PackageComment`
    pub comment_indent: String,
    /// Prefix for notice lines nested under an origin in `FileComment`
    pub file_comment_indent: String,
    /// Insert a blank line between blocks written by `TagValueWriter`
    pub block_separator: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            comment_indent: DEFAULT_COMMENT_INDENT.to_string(),
            file_comment_indent: DEFAULT_FILE_COMMENT_INDENT.to_string(),
            block_separator: true,
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn with_comment_indent(mut self, indent: impl Into<String>) -> Self {
        self.comment_indent = indent.into();
        self
    }

    #[must_use]
    pub fn with_file_comment_indent(mut self, indent: impl Into<String>) -> Self {
        self.file_comment_indent = indent.into();
        self
    }

    #[must_use]
    pub fn with_block_separator(mut self, enabled: bool) -> Self {
        self.block_separator = enabled;
        self
    }
}
