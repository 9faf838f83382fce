//! Files observed in a scanned image layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::notice::{has_notices, NoticeOrigin};

/// SPDX 2.x file type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    Source,
    Binary,
    Archive,
    Application,
    Audio,
    Image,
    Text,
    Video,
    Documentation,
    Spdx,
    #[default]
    #[serde(other)]
    Other,
}

impl FileType {
    pub const ALL: [Self; 11] = [
        Self::Source,
        Self::Binary,
        Self::Archive,
        Self::Application,
        Self::Audio,
        Self::Image,
        Self::Text,
        Self::Video,
        Self::Documentation,
        Self::Spdx,
        Self::Other,
    ];

    /// Tag-value spelling of the file type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "SOURCE",
            Self::Binary => "BINARY",
            Self::Archive => "ARCHIVE",
            Self::Application => "APPLICATION",
            Self::Audio => "AUDIO",
            Self::Image => "IMAGE",
            Self::Text => "TEXT",
            Self::Video => "VIDEO",
            Self::Documentation => "DOCUMENTATION",
            Self::Spdx => "SPDX",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = std::convert::Infallible;

    /// Unrecognized classifications fall back to `OTHER`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Ok(Self::ALL
            .into_iter()
            .find(|ft| ft.as_str() == upper)
            .unwrap_or(Self::Other))
    }
}

/// One file found in a layer of the image.
///
/// Checksums and SPDX identifiers are deliberately absent: they are derived
/// by an [`SpdxResolver`](crate::resolver::SpdxResolver) together with the
/// layer the file was seen in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileData {
    /// File path as reported in the document
    pub path: String,
    pub file_type: FileType,
    /// License strings found in the file, in discovery order
    #[serde(default)]
    pub licenses: Vec<String>,
    /// Contributor names
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub origins: Vec<NoticeOrigin>,
}

impl FileData {
    pub fn new(path: impl Into<String>, file_type: FileType) -> Self {
        Self {
            path: path.into(),
            file_type,
            licenses: Vec::new(),
            authors: Vec::new(),
            origins: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.licenses.push(license.into());
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.authors.push(author.into());
        self
    }

    #[must_use]
    pub fn with_origin(mut self, origin: NoticeOrigin) -> Self {
        self.origins.push(origin);
        self
    }

    /// Last path segment, used for display and reference IDs
    pub fn file_name(&self) -> &str {
        self.path
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(&self.path)
    }

    pub fn has_notices(&self) -> bool {
        has_notices(&self.origins)
    }
}
