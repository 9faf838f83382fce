//! License reference canonicalization.
//!
//! Uses the `spdx` crate to recognize valid SPDX license expressions, which
//! are emitted as-is. Any other string (a raw license text snippet, a
//! package manager's free-form field) is replaced by a synthetic
//! `LicenseRef-<digest>` so the output stays grammatical.

use indexmap::IndexSet;

use super::identifiers::short_digest;
use crate::error::{ResolveOp, Result, TagValueError};

/// Prefix of synthetic license references
pub const LICENSE_REF_PREFIX: &str = "LicenseRef-";

/// Check a token against the SPDX expression grammar and license list.
fn is_spdx_expression(token: &str) -> bool {
    if token.contains("NOASSERTION") || token.contains("NONE") {
        return false;
    }
    spdx::Expression::parse_mode(token, spdx::ParseMode::STRICT).is_ok()
}

/// Canonical license reference for a raw token.
///
/// ```
/// use sbom_tagvalue::resolver::canonical_license_ref;
///
/// assert_eq!(canonical_license_ref("MIT").unwrap(), "MIT");
/// assert!(canonical_license_ref("GPL version 2").unwrap().starts_with("LicenseRef-"));
/// ```
pub fn canonical_license_ref(token: &str) -> Result<String> {
    let token = token.trim();
    if token.is_empty() {
        return Err(TagValueError::resolve(
            ResolveOp::CanonicalizeLicense,
            "empty license token",
        ));
    }

    if is_spdx_expression(token) {
        Ok(token.to_string())
    } else {
        Ok(format!("{LICENSE_REF_PREFIX}{}", short_digest(token)))
    }
}

/// De-duplicate license tokens, keeping first-seen order and dropping blanks.
pub fn collect_unique_licenses(licenses: &[String]) -> Vec<String> {
    licenses
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_expressions_pass_through() {
        assert_eq!(canonical_license_ref("Apache-2.0").unwrap(), "Apache-2.0");
        assert_eq!(
            canonical_license_ref("MIT OR Apache-2.0").unwrap(),
            "MIT OR Apache-2.0"
        );
        assert_eq!(
            canonical_license_ref("  BSD-3-Clause ").unwrap(),
            "BSD-3-Clause"
        );
    }

    #[test]
    fn test_unknown_strings_become_license_refs() {
        let r = canonical_license_ref("Artistic or GPL, see /usr/share/common-licenses").unwrap();
        assert!(r.starts_with(LICENSE_REF_PREFIX));
        assert_eq!(r.len(), LICENSE_REF_PREFIX.len() + 7);

        // Stable across calls
        assert_eq!(
            r,
            canonical_license_ref("Artistic or GPL, see /usr/share/common-licenses").unwrap()
        );
    }

    #[test]
    fn test_sentinels_are_not_passed_through() {
        assert!(canonical_license_ref("NOASSERTION")
            .unwrap()
            .starts_with(LICENSE_REF_PREFIX));
        assert!(canonical_license_ref("NONE")
            .unwrap()
            .starts_with(LICENSE_REF_PREFIX));
    }

    #[test]
    fn test_empty_token_is_an_error() {
        let err = canonical_license_ref("   ").unwrap_err();
        assert_eq!(err.resolve_op(), Some(ResolveOp::CanonicalizeLicense));
    }

    #[test]
    fn test_collect_unique_licenses() {
        let licenses = vec![
            "GPL-2.0-only".to_string(),
            "MIT".to_string(),
            " ".to_string(),
            "GPL-2.0-only".to_string(),
            "zlib license".to_string(),
            " MIT".to_string(),
        ];
        assert_eq!(
            collect_unique_licenses(&licenses),
            vec!["GPL-2.0-only", "MIT", "zlib license"]
        );
    }
}
