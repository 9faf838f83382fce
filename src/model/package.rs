//! Packages discovered in an image.

use serde::{Deserialize, Serialize};

use super::notice::{has_notices, NoticeOrigin};

/// One discovered software package.
///
/// License conclusion is never attempted for packages, so there is no
/// concluded-license field here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageData {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    /// License string as declared by the package manager
    #[serde(default)]
    pub license_declared: Option<String>,
    /// Copyright text, possibly spanning several lines
    #[serde(default)]
    pub copyright_text: Option<String>,
    #[serde(default)]
    pub download_location: Option<String>,
    #[serde(default)]
    pub origins: Vec<NoticeOrigin>,
}

impl PackageData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_license_declared(mut self, license: impl Into<String>) -> Self {
        self.license_declared = Some(license.into());
        self
    }

    #[must_use]
    pub fn with_copyright_text(mut self, copyright: impl Into<String>) -> Self {
        self.copyright_text = Some(copyright.into());
        self
    }

    #[must_use]
    pub fn with_download_location(mut self, location: impl Into<String>) -> Self {
        self.download_location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_origin(mut self, origin: NoticeOrigin) -> Self {
        self.origins.push(origin);
        self
    }

    pub fn has_notices(&self) -> bool {
        has_notices(&self.origins)
    }
}
