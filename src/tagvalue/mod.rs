//! SPDX tag-value block generation.
//!
//! Each generator turns one entity into an ordered run of `Tag: Value`
//! lines:
//! - [`render_file_block`]: `FileName` through `FileContributor`
//! - [`render_package_block`]: `PackageName` through `PackageComment`
//!
//! Both take a typed template (the projection of an entity onto the tags it
//! populates) and an [`SpdxResolver`](crate::resolver::SpdxResolver) that
//! supplies identifiers, checksums and license references. Generation is a
//! pure function of its inputs; nothing is cached between calls.
//!
//! # Sentinels
//!
//! `NOASSERTION` means no claim is made; `NONE` means the field has no
//! value. `NOASSERTION` is emitted for facts this crate never determines
//! (concluded licenses, file copyright). `NONE` is emitted only when the
//! input legitimately lacks data. Neither ever stands in for a resolver
//! failure.

mod file_block;
pub mod format;
mod package_block;
mod template;
mod writer;

pub use file_block::{render_file_block, render_file_block_with};
pub use package_block::{render_package_block, render_package_block_with};
pub use template::{FileTemplate, PackageTemplate, SpdxTag};
pub use writer::TagValueWriter;

/// No claim is made about the value
pub const NOASSERTION: &str = "NOASSERTION";

/// The field legitimately has no value
pub const NONE: &str = "NONE";
