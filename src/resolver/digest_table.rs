//! Resolver backed by content digests recorded during layer extraction.

use indexmap::IndexMap;

use super::identifiers::{sanitize_id, short_digest, SPDX_REF_PREFIX};
use super::SpdxResolver;
use crate::error::{ResolveOp, Result, TagValueError};
use crate::model::{FileData, PackageData};

/// Maps file paths to their SHA-256 digests and primary notices.
///
/// File references combine the path, the digest, and the layer so the same
/// bytes seen in two layers get two identifiers.
///
/// ```
/// use sbom_tagvalue::model::{FileData, FileType};
/// use sbom_tagvalue::resolver::{DigestTable, SpdxResolver};
///
/// let table = DigestTable::new().with_digest("a.txt", "AB12");
/// let file = FileData::new("a.txt", FileType::Text);
/// assert_eq!(table.compute_file_checksum(&file).unwrap(), "SHA256: ab12");
/// assert_ne!(
///     table.resolve_file_ref(&file, "layer-1").unwrap(),
///     table.resolve_file_ref(&file, "layer-2").unwrap(),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct DigestTable {
    digests: IndexMap<String, String>,
    notices: IndexMap<String, String>,
}

impl DigestTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the SHA-256 hex digest of a file, returning any previous one
    pub fn insert_digest(
        &mut self,
        path: impl Into<String>,
        sha256_hex: impl AsRef<str>,
    ) -> Option<String> {
        self.digests
            .insert(path.into(), sha256_hex.as_ref().trim().to_lowercase())
    }

    #[must_use]
    pub fn with_digest(mut self, path: impl Into<String>, sha256_hex: impl AsRef<str>) -> Self {
        self.insert_digest(path, sha256_hex);
        self
    }

    /// Record the primary notice text of a file (its NOTICE contents)
    pub fn insert_notice(&mut self, path: impl Into<String>, notice: impl Into<String>) {
        self.notices.insert(path.into(), notice.into());
    }

    #[must_use]
    pub fn with_notice(mut self, path: impl Into<String>, notice: impl Into<String>) -> Self {
        self.insert_notice(path, notice);
        self
    }

    pub fn digest(&self, path: &str) -> Option<&str> {
        self.digests.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    fn require_digest(&self, file: &FileData, operation: ResolveOp) -> Result<&str> {
        match self.digest(&file.path) {
            Some(digest) if !digest.is_empty() => Ok(digest),
            _ => Err(TagValueError::resolve(
                operation,
                format!("no digest recorded for '{}'", file.path),
            )),
        }
    }
}

impl SpdxResolver for DigestTable {
    fn resolve_file_ref(&self, file: &FileData, layer_id: &str) -> Result<String> {
        let digest = self.require_digest(file, ResolveOp::FileRef)?;
        let suffix = short_digest(&format!("{}:{digest}@{layer_id}", file.path));
        Ok(format!(
            "{SPDX_REF_PREFIX}{}-{suffix}",
            sanitize_id(file.file_name())
        ))
    }

    fn resolve_package_ref(&self, package: &PackageData) -> Result<String> {
        if package.name.trim().is_empty() {
            return Err(TagValueError::resolve(
                ResolveOp::PackageRef,
                "package has no name",
            ));
        }
        let id = match package.version.as_deref().filter(|v| !v.is_empty()) {
            Some(version) => format!("{}-{}", package.name, version),
            None => package.name.clone(),
        };
        Ok(format!("{SPDX_REF_PREFIX}{}", sanitize_id(&id)))
    }

    fn compute_file_checksum(&self, file: &FileData) -> Result<String> {
        let digest = self.require_digest(file, ResolveOp::FileChecksum)?;
        Ok(format!("SHA256: {digest}"))
    }

    fn primary_file_notice(&self, file: &FileData) -> Result<String> {
        Ok(self.notices.get(&file.path).cloned().unwrap_or_default())
    }
}
