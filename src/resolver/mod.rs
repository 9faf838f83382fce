//! External collaborators consulted while rendering.
//!
//! Identifier allocation, checksums and license canonicalization are policy
//! decisions owned by whoever assembles the document. The block generators
//! reach them only through [`SpdxResolver`], and propagate every error a
//! resolver returns without adding context or substituting defaults.
//!
//! [`DigestTable`] is a ready-made resolver for assemblers that already hold
//! per-file content digests from layer extraction.

mod digest_table;
mod identifiers;
mod license;

pub use digest_table::DigestTable;
pub use identifiers::{sanitize_id, short_digest, SPDX_REF_PREFIX};
pub use license::{canonical_license_ref, collect_unique_licenses, LICENSE_REF_PREFIX};

use crate::error::Result;
use crate::model::{FileData, PackageData};

/// Source of identifiers, checksums and license references.
///
/// Only the three identity methods are required; the license and notice
/// methods have defaults matching the stock canonicalization rules.
pub trait SpdxResolver {
    /// SPDXID for one occurrence of a file.
    ///
    /// The same content in two layers must map to distinct identifiers.
    fn resolve_file_ref(&self, file: &FileData, layer_id: &str) -> Result<String>;

    /// SPDXID for a package
    fn resolve_package_ref(&self, package: &PackageData) -> Result<String>;

    /// Checksum in tag-value form, e.g. `SHA256: <hex>`
    fn compute_file_checksum(&self, file: &FileData) -> Result<String>;

    /// License reference for a raw license token
    fn canonicalize_license(&self, token: &str) -> Result<String> {
        canonical_license_ref(token)
    }

    /// De-duplicated license tokens for a file, in output order
    fn collect_file_licenses(&self, file: &FileData) -> Result<Vec<String>> {
        Ok(collect_unique_licenses(&file.licenses))
    }

    /// Primary notice text for a file; empty when there is none
    fn primary_file_notice(&self, _file: &FileData) -> Result<String> {
        Ok(String::new())
    }
}

impl<R: SpdxResolver + ?Sized> SpdxResolver for &R {
    fn resolve_file_ref(&self, file: &FileData, layer_id: &str) -> Result<String> {
        (**self).resolve_file_ref(file, layer_id)
    }

    fn resolve_package_ref(&self, package: &PackageData) -> Result<String> {
        (**self).resolve_package_ref(package)
    }

    fn compute_file_checksum(&self, file: &FileData) -> Result<String> {
        (**self).compute_file_checksum(file)
    }

    fn canonicalize_license(&self, token: &str) -> Result<String> {
        (**self).canonicalize_license(token)
    }

    fn collect_file_licenses(&self, file: &FileData) -> Result<Vec<String>> {
        (**self).collect_file_licenses(file)
    }

    fn primary_file_notice(&self, file: &FileData) -> Result<String> {
        (**self).primary_file_notice(file)
    }
}
