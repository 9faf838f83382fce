//! Package block generation.

use super::format::{aggregate_notices, license_ref, TagBlock};
use super::{PackageTemplate, SpdxTag, NOASSERTION, NONE};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::model::PackageData;
use crate::resolver::SpdxResolver;

/// Render the tag-value block for one package.
///
/// Packages are never file-analyzed and their licenses are never concluded,
/// so `FilesAnalyzed: false` and `PackageLicenseConcluded: NOASSERTION` are
/// always present.
pub fn render_package_block<R: SpdxResolver + ?Sized>(
    package: &PackageData,
    template: &PackageTemplate,
    resolver: &R,
) -> Result<String> {
    render_package_block_with(package, template, resolver, &RenderConfig::default())
}

/// [`render_package_block`] with explicit layout options.
pub fn render_package_block_with<R: SpdxResolver + ?Sized>(
    package: &PackageData,
    template: &PackageTemplate,
    resolver: &R,
    config: &RenderConfig,
) -> Result<String> {
    config.ensure_valid()?;
    let name = template.require(SpdxTag::PackageName, package)?;

    let mut block = TagBlock::new();
    block.tag(SpdxTag::PackageName, name);
    block.tag(SpdxTag::SpdxId, &resolver.resolve_package_ref(package)?);

    if let Some(version) = template.get(SpdxTag::PackageVersion) {
        block.tag(SpdxTag::PackageVersion, version);
    }

    block.tag(
        SpdxTag::PackageDownloadLocation,
        template
            .get(SpdxTag::PackageDownloadLocation)
            .unwrap_or(NOASSERTION),
    );
    block.tag(SpdxTag::FilesAnalyzed, "false");
    block.tag(SpdxTag::PackageLicenseConcluded, NOASSERTION);

    match template.get(SpdxTag::PackageLicenseDeclared) {
        Some(declared) => {
            block.tag(SpdxTag::PackageLicenseDeclared, &license_ref(resolver, declared)?);
        }
        None => block.tag(SpdxTag::PackageLicenseDeclared, NONE),
    }

    match template.get(SpdxTag::PackageCopyrightText) {
        Some(copyright) => block.inline_text(SpdxTag::PackageCopyrightText, copyright),
        None => block.tag(SpdxTag::PackageCopyrightText, NONE),
    }

    if package.has_notices() {
        let comment = aggregate_notices(&package.origins, &config.comment_indent);
        block.text_block(SpdxTag::PackageComment, &comment);
    } else {
        tracing::trace!(package = %package.name, "no notices, omitting PackageComment");
    }

    tracing::debug!(
        package = %package.name,
        lines = block.line_count(),
        "rendered package block"
    );
    Ok(block.finish())
}
