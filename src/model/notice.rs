//! Analysis notices and the origins they are grouped under.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity tag attached to a notice
///
/// Serialized as its [`as_str`](Self::as_str) spelling and deserialized
/// through [`parse`](Self::parse).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
    Hint,
    /// Any level string a scanner emits that is not one of the above
    Custom(String),
}

impl NoticeLevel {
    /// Parse a level tag, keeping unknown tags verbatim
    pub fn parse(level: &str) -> Self {
        match level.to_lowercase().as_str() {
            "info" => Self::Info,
            "warning" => Self::Warning,
            "error" => Self::Error,
            "hint" => Self::Hint,
            _ => Self::Custom(level.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Hint => "hint",
            Self::Custom(level) => level,
        }
    }
}

impl From<String> for NoticeLevel {
    fn from(level: String) -> Self {
        Self::parse(&level)
    }
}

impl From<NoticeLevel> for String {
    fn from(level: NoticeLevel) -> Self {
        match level {
            NoticeLevel::Custom(level) => level,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single analysis message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn hint(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Hint, message)
    }
}

/// Notices grouped by where they came from (a tool, a layer, a command).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeOrigin {
    /// Human-readable source identifier
    pub origin_label: String,
    /// Notices in the order they were raised
    #[serde(default)]
    pub notices: Vec<Notice>,
}

impl NoticeOrigin {
    pub fn new(origin_label: impl Into<String>) -> Self {
        Self {
            origin_label: origin_label.into(),
            notices: Vec::new(),
        }
    }

    /// Append a notice, keeping insertion order
    pub fn add_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Builder form of [`add_notice`](Self::add_notice)
    #[must_use]
    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.add_notice(notice);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

/// True if any origin carries at least one notice
pub fn has_notices(origins: &[NoticeOrigin]) -> bool {
    origins.iter().any(|origin| !origin.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse_known_and_custom() {
        assert_eq!(NoticeLevel::parse("warning"), NoticeLevel::Warning);
        assert_eq!(NoticeLevel::parse("INFO"), NoticeLevel::Info);
        assert_eq!(
            NoticeLevel::parse("fatal"),
            NoticeLevel::Custom("fatal".to_string())
        );
        assert_eq!(NoticeLevel::parse("fatal").to_string(), "fatal");
    }

    #[test]
    fn test_has_notices_ignores_empty_origins() {
        let empty = vec![NoticeOrigin::new("layer 1"), NoticeOrigin::new("layer 2")];
        assert!(!has_notices(&empty));

        let mut origins = empty;
        origins[1].add_notice(Notice::warning("no package manager found"));
        assert!(has_notices(&origins));
    }

    #[test]
    fn test_level_serde_lowercase() {
        let yaml = serde_yaml::to_string(&Notice::hint("use a base image")).expect("serialize");
        assert!(yaml.contains("level: hint"), "{yaml}");
    }

    #[test]
    fn test_level_deserialize_matches_parse() {
        for raw in ["WARNING", "Info", "hint", "fatal"] {
            let notice: Notice =
                serde_yaml::from_str(&format!("level: {raw}\nmessage: m\n")).expect("parse");
            assert_eq!(notice.level, NoticeLevel::parse(raw), "level {raw}");
        }

        let custom = serde_yaml::to_string(&Notice::new(NoticeLevel::parse("Fatal"), "m"))
            .expect("serialize");
        assert!(custom.contains("level: Fatal"), "{custom}");
    }
}
