//! **SPDX tag-value blocks for files and packages found in container images.**
//!
//! `sbom-tagvalue` turns the entities a layer scan produces, files and
//! packages with their licenses, authors and analysis notices, into SPDX
//! tag-value text. It renders one block per entity; assembling the blocks
//! into a full document (creation info, relationships) is left to the caller.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`FileData`], [`PackageData`] and the [`NoticeOrigin`]s
//!   that carry analysis messages.
//! - **[`tagvalue`]**: the block generators, typed template projections and
//!   [`TagValueWriter`] for streaming blocks into any `Write` sink.
//! - **[`resolver`]**: the [`SpdxResolver`] seam through which identifiers,
//!   checksums and license references are obtained, plus [`DigestTable`],
//!   a resolver backed by pre-computed content digests.
//! - **[`config`]**: [`RenderConfig`] layout options and YAML loading.
//!
//! ## Rendering a File
//!
//! ```
//! use sbom_tagvalue::model::{FileData, FileType};
//! use sbom_tagvalue::resolver::DigestTable;
//! use sbom_tagvalue::tagvalue::{render_file_block, FileTemplate};
//!
//! let file = FileData::new("a.txt", FileType::Text);
//! let table = DigestTable::new().with_digest("a.txt", "e3b0c442");
//!
//! let block = render_file_block(&file, &FileTemplate::project(&file), "layer-1", &table)?;
//! let lines: Vec<&str> = block.lines().collect();
//! assert_eq!(lines[0], "FileName: a.txt");
//! assert_eq!(lines[3], "FileChecksum: SHA256: e3b0c442");
//! assert_eq!(lines[5], "LicenseInfoInFile: NONE");
//! # Ok::<(), sbom_tagvalue::TagValueError>(())
//! ```
//!
//! ## Errors
//!
//! A template missing `FileName`, `FileType` or `PackageName` yields
//! [`TagValueError::MissingField`]. Resolver errors are returned exactly as
//! the resolver raised them. `NONE` and `NOASSERTION` are only ever emitted
//! for absent data, never to paper over a failure.

#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod model;
pub mod resolver;
pub mod tagvalue;

pub use config::{RenderConfig, Validatable};
pub use error::{ErrorContext, ResolveOp, Result, TagValueError};
pub use model::{FileData, FileType, Notice, NoticeLevel, NoticeOrigin, PackageData};
pub use resolver::{DigestTable, SpdxResolver};
pub use tagvalue::{
    render_file_block, render_package_block, FileTemplate, PackageTemplate, SpdxTag,
    TagValueWriter,
};
