//! Streaming block output.

use std::io::Write;

use super::{
    render_file_block_with, render_package_block_with, FileTemplate, PackageTemplate,
};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::model::{FileData, PackageData};
use crate::resolver::SpdxResolver;

/// Writes rendered blocks to a [`Write`] sink, one after another.
///
/// Each block is rendered in full before any of it is written, so a
/// rendering error never leaves half a block in the output.
///
/// ```
/// use sbom_tagvalue::model::{FileData, FileType, PackageData};
/// use sbom_tagvalue::resolver::DigestTable;
/// use sbom_tagvalue::tagvalue::TagValueWriter;
///
/// let table = DigestTable::new().with_digest("etc/hostname", "3f9a");
/// let mut writer = TagValueWriter::new(&table, Vec::new());
/// writer.write_package(&PackageData::new("alpine-baselayout"))?;
/// writer.write_file(&FileData::new("etc/hostname", FileType::Text), "layer-0")?;
///
/// let text = String::from_utf8(writer.finish()?).unwrap();
/// assert!(text.contains("FilesAnalyzed: false\n"));
/// assert!(text.contains("\n\nFileName: etc/hostname\n"));
/// # Ok::<(), sbom_tagvalue::TagValueError>(())
/// ```
pub struct TagValueWriter<'r, R: SpdxResolver + ?Sized, W: Write> {
    resolver: &'r R,
    writer: W,
    config: RenderConfig,
    blocks: usize,
}

impl<'r, R: SpdxResolver + ?Sized, W: Write> TagValueWriter<'r, R, W> {
    pub fn new(resolver: &'r R, writer: W) -> Self {
        Self {
            resolver,
            writer,
            config: RenderConfig::default(),
            blocks: 0,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Render and write a file block using the file's own projection
    pub fn write_file(&mut self, file: &FileData, layer_id: &str) -> Result<()> {
        self.write_file_with_template(file, &FileTemplate::project(file), layer_id)
    }

    pub fn write_file_with_template(
        &mut self,
        file: &FileData,
        template: &FileTemplate,
        layer_id: &str,
    ) -> Result<()> {
        let block = render_file_block_with(file, template, layer_id, self.resolver, &self.config)?;
        self.emit(&block)
    }

    /// Render and write a package block using the package's own projection
    pub fn write_package(&mut self, package: &PackageData) -> Result<()> {
        self.write_package_with_template(package, &PackageTemplate::project(package))
    }

    pub fn write_package_with_template(
        &mut self,
        package: &PackageData,
        template: &PackageTemplate,
    ) -> Result<()> {
        let block = render_package_block_with(package, template, self.resolver, &self.config)?;
        self.emit(&block)
    }

    pub fn blocks_written(&self) -> usize {
        self.blocks
    }

    /// Flush and hand back the underlying sink
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn emit(&mut self, block: &str) -> Result<()> {
        // Separator and body go out in one write
        if self.blocks > 0 && self.config.block_separator {
            let mut buf = String::with_capacity(block.len() + 1);
            buf.push('\n');
            buf.push_str(block);
            self.writer.write_all(buf.as_bytes())?;
        } else {
            self.writer.write_all(block.as_bytes())?;
        }
        self.blocks += 1;
        Ok(())
    }
}
