//! Typed template mappings.
//!
//! A template is the projection of an entity onto the SPDX tags it
//! populates. Empty strings are collapsed to `None` so that "present but
//! empty" and "absent" cannot be told apart downstream.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TagValueError};
use crate::model::{FileData, PackageData};

/// Every tag this crate emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpdxTag {
    FileName,
    #[serde(rename = "SPDXID")]
    SpdxId,
    FileType,
    FileChecksum,
    LicenseConcluded,
    LicenseInfoInFile,
    FileCopyrightText,
    FileComment,
    FileNotice,
    FileContributor,
    PackageName,
    PackageVersion,
    PackageDownloadLocation,
    FilesAnalyzed,
    PackageLicenseConcluded,
    PackageLicenseDeclared,
    PackageCopyrightText,
    PackageComment,
}

impl SpdxTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FileName => "FileName",
            Self::SpdxId => "SPDXID",
            Self::FileType => "FileType",
            Self::FileChecksum => "FileChecksum",
            Self::LicenseConcluded => "LicenseConcluded",
            Self::LicenseInfoInFile => "LicenseInfoInFile",
            Self::FileCopyrightText => "FileCopyrightText",
            Self::FileComment => "FileComment",
            Self::FileNotice => "FileNotice",
            Self::FileContributor => "FileContributor",
            Self::PackageName => "PackageName",
            Self::PackageVersion => "PackageVersion",
            Self::PackageDownloadLocation => "PackageDownloadLocation",
            Self::FilesAnalyzed => "FilesAnalyzed",
            Self::PackageLicenseConcluded => "PackageLicenseConcluded",
            Self::PackageLicenseDeclared => "PackageLicenseDeclared",
            Self::PackageCopyrightText => "PackageCopyrightText",
            Self::PackageComment => "PackageComment",
        }
    }
}

impl fmt::Display for SpdxTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Tags populated from a [`FileData`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileTemplate {
    pub file_name: Option<String>,
    pub file_type: Option<String>,
}

impl FileTemplate {
    /// Tags a file template can carry
    pub const TAGS: [SpdxTag; 2] = [SpdxTag::FileName, SpdxTag::FileType];

    /// Project a file onto its template tags
    pub fn project(file: &FileData) -> Self {
        Self {
            file_name: non_empty(Some(&file.path)),
            file_type: non_empty(Some(file.file_type.as_str())),
        }
    }

    /// Look up a tag's value; tags outside [`Self::TAGS`] are always `None`
    pub fn get(&self, tag: SpdxTag) -> Option<&str> {
        let value = match tag {
            SpdxTag::FileName => self.file_name.as_deref(),
            SpdxTag::FileType => self.file_type.as_deref(),
            _ => None,
        };
        value.filter(|v| !v.is_empty())
    }

    pub(crate) fn require(&self, tag: SpdxTag, file: &FileData) -> Result<&str> {
        self.get(tag)
            .ok_or_else(|| TagValueError::missing_field(tag, format!("file '{}'", file.path)))
    }
}

/// Tags populated from a [`PackageData`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageTemplate {
    pub package_name: Option<String>,
    pub package_version: Option<String>,
    pub package_license_declared: Option<String>,
    pub package_copyright_text: Option<String>,
    pub package_download_location: Option<String>,
}

impl PackageTemplate {
    /// Tags a package template can carry
    pub const TAGS: [SpdxTag; 5] = [
        SpdxTag::PackageName,
        SpdxTag::PackageVersion,
        SpdxTag::PackageLicenseDeclared,
        SpdxTag::PackageCopyrightText,
        SpdxTag::PackageDownloadLocation,
    ];

    /// Project a package onto its template tags
    pub fn project(package: &PackageData) -> Self {
        Self {
            package_name: non_empty(Some(&package.name)),
            package_version: non_empty(package.version.as_deref()),
            package_license_declared: non_empty(package.license_declared.as_deref()),
            package_copyright_text: non_empty(package.copyright_text.as_deref()),
            package_download_location: non_empty(package.download_location.as_deref()),
        }
    }

    /// Look up a tag's value; tags outside [`Self::TAGS`] are always `None`
    pub fn get(&self, tag: SpdxTag) -> Option<&str> {
        let value = match tag {
            SpdxTag::PackageName => self.package_name.as_deref(),
            SpdxTag::PackageVersion => self.package_version.as_deref(),
            SpdxTag::PackageLicenseDeclared => self.package_license_declared.as_deref(),
            SpdxTag::PackageCopyrightText => self.package_copyright_text.as_deref(),
            SpdxTag::PackageDownloadLocation => self.package_download_location.as_deref(),
            _ => None,
        };
        value.filter(|v| !v.is_empty())
    }

    pub(crate) fn require(&self, tag: SpdxTag, package: &PackageData) -> Result<&str> {
        self.get(tag)
            .ok_or_else(|| TagValueError::missing_field(tag, format!("package '{}'", package.name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileType;

    #[test]
    fn test_file_projection() {
        let file = FileData::new("etc/os-release", FileType::Text);
        let template = FileTemplate::project(&file);
        assert_eq!(template.get(SpdxTag::FileName), Some("etc/os-release"));
        assert_eq!(template.get(SpdxTag::FileType), Some("TEXT"));
        assert_eq!(template.get(SpdxTag::PackageName), None);
    }

    #[test]
    fn test_package_projection_collapses_empty_strings() {
        let package = PackageData::new("zlib")
            .with_version("")
            .with_download_location("https://zlib.net");
        let template = PackageTemplate::project(&package);
        assert_eq!(template.package_version, None);
        assert_eq!(
            template.get(SpdxTag::PackageDownloadLocation),
            Some("https://zlib.net")
        );
        assert_eq!(template.get(SpdxTag::PackageLicenseDeclared), None);
    }

    #[test]
    fn test_get_treats_empty_as_absent() {
        let template = FileTemplate {
            file_name: Some(String::new()),
            file_type: Some("BINARY".to_string()),
        };
        assert_eq!(template.get(SpdxTag::FileName), None);
    }

    #[test]
    fn test_require_reports_tag_and_entity() {
        let file = FileData::new("bin/sh", FileType::Binary);
        let err = FileTemplate::default()
            .require(SpdxTag::FileName, &file)
            .unwrap_err();
        match err {
            TagValueError::MissingField { tag, entity } => {
                assert_eq!(tag, SpdxTag::FileName);
                assert!(entity.contains("bin/sh"));
            }
            other => panic!("Expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_template_keys_deserialize_by_tag_name() {
        let yaml = "PackageName: musl\nPackageVersion: 1.2.4\n";
        let template: PackageTemplate = serde_yaml::from_str(yaml).expect("parse");
        assert_eq!(template.get(SpdxTag::PackageName), Some("musl"));
        assert_eq!(template.get(SpdxTag::PackageVersion), Some("1.2.4"));
        assert_eq!(template.package_copyright_text, None);
    }

    #[test]
    fn test_tag_spelling() {
        assert_eq!(SpdxTag::SpdxId.to_string(), "SPDXID");
        assert_eq!(
            SpdxTag::PackageDownloadLocation.to_string(),
            "PackageDownloadLocation"
        );
        for tag in PackageTemplate::TAGS {
            assert!(tag.as_str().starts_with("Package"));
        }
    }
}
