//! File block generation.

use super::format::{aggregate_notices, license_ref, TagBlock};
use super::{FileTemplate, SpdxTag, NOASSERTION, NONE};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::model::FileData;
use crate::resolver::SpdxResolver;

/// Render the tag-value block for one file occurrence.
///
/// `layer_id` identifies the layer the file was found in, so identical
/// content in different layers gets distinct SPDX identifiers. Any resolver
/// error aborts the block and is returned as-is.
pub fn render_file_block<R: SpdxResolver + ?Sized>(
    file: &FileData,
    template: &FileTemplate,
    layer_id: &str,
    resolver: &R,
) -> Result<String> {
    render_file_block_with(file, template, layer_id, resolver, &RenderConfig::default())
}

/// [`render_file_block`] with explicit layout options.
pub fn render_file_block_with<R: SpdxResolver + ?Sized>(
    file: &FileData,
    template: &FileTemplate,
    layer_id: &str,
    resolver: &R,
    config: &RenderConfig,
) -> Result<String> {
    config.ensure_valid()?;
    let file_name = template.require(SpdxTag::FileName, file)?;
    let file_type = template.require(SpdxTag::FileType, file)?;

    let mut block = TagBlock::new();
    block.tag(SpdxTag::FileName, file_name);
    block.tag(SpdxTag::SpdxId, &resolver.resolve_file_ref(file, layer_id)?);
    block.tag(SpdxTag::FileType, file_type);
    block.tag(SpdxTag::FileChecksum, &resolver.compute_file_checksum(file)?);
    // License conclusion is never attempted
    block.tag(SpdxTag::LicenseConcluded, NOASSERTION);
    write_license_info(&mut block, file, resolver)?;
    block.tag(SpdxTag::FileCopyrightText, NOASSERTION);

    let comment = aggregate_notices(&file.origins, &config.file_comment_indent);
    if comment.is_empty() {
        tracing::trace!(path = %file.path, "no notices, omitting FileComment");
    } else {
        block.text_block(SpdxTag::FileComment, &comment);
    }

    let notice = resolver.primary_file_notice(file)?;
    if !notice.is_empty() {
        block.text_block(SpdxTag::FileNotice, &notice);
    }

    for author in &file.authors {
        block.tag(SpdxTag::FileContributor, author);
    }

    tracing::debug!(
        path = %file.path,
        layer = layer_id,
        lines = block.line_count(),
        "rendered file block"
    );
    Ok(block.finish())
}

/// One `LicenseInfoInFile` per collected license, or a single `NONE`.
fn write_license_info<R: SpdxResolver + ?Sized>(
    block: &mut TagBlock,
    file: &FileData,
    resolver: &R,
) -> Result<()> {
    let licenses = if file.licenses.is_empty() {
        Vec::new()
    } else {
        resolver.collect_file_licenses(file)?
    };

    if licenses.is_empty() {
        block.tag(SpdxTag::LicenseInfoInFile, NONE);
        return Ok(());
    }

    for license in &licenses {
        block.tag(SpdxTag::LicenseInfoInFile, &license_ref(resolver, license)?);
    }
    Ok(())
}
