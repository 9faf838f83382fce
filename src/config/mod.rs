//! Configuration module for sbom-tagvalue.
//!
//! Rendering is configured by a single [`RenderConfig`], which only affects
//! whitespace inside blocks: the indent of nested notice lines and the blank
//! line between blocks. Tag order and sentinel values are not configurable.
//!
//! ```rust,ignore
//! use sbom_tagvalue::config::{load_or_default, RenderConfig};
//!
//! let config = RenderConfig::default().with_comment_indent("    ");
//! let (config, loaded_from) = load_or_default(Some(Path::new("render.yaml")));
//! ```

pub mod file;
mod types;
mod validation;

pub use file::{load_config_file, load_or_default, ConfigFileError};
pub use types::{RenderConfig, DEFAULT_COMMENT_INDENT, DEFAULT_FILE_COMMENT_INDENT};
pub use validation::{ConfigError, Validatable};

use std::path::Path;

use crate::error::{ErrorContext, Result};

/// Load a render config, converting failures into the crate error type.
pub fn load_render_config(path: &Path) -> Result<RenderConfig> {
    load_config_file(path).with_context(|| format!("loading {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TagValueError;

    #[test]
    fn test_load_render_config_adds_path_context() {
        match load_render_config(Path::new("/nonexistent/render.yaml")) {
            Err(TagValueError::Config(msg)) => {
                assert!(msg.starts_with("loading /nonexistent/render.yaml: "), "{msg}");
                assert!(msg.contains("not found"), "{msg}");
            }
            other => panic!("Expected Config error, got {other:?}"),
        }
    }
}
