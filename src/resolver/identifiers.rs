//! SPDX identifier helpers.

use sha2::{Digest, Sha256};

/// Prefix of every SPDX element identifier
pub const SPDX_REF_PREFIX: &str = "SPDXRef-";

/// Length of the digest suffix used in generated references
const SHORT_DIGEST_LEN: usize = 7;

/// Replace characters SPDX identifiers cannot hold.
///
/// SPDX element IDs allow only letters, digits, `.` and `-`.
pub fn sanitize_id(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Last seven hex characters of the SHA-256 of `input`
pub fn short_digest(input: &str) -> String {
    let hex = format!("{:x}", Sha256::digest(input.as_bytes()));
    hex[hex.len() - SHORT_DIGEST_LEN..].to_string()
}
