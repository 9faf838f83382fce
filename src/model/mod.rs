//! Input entities for SPDX rendering.
//!
//! These structures describe what a layer scan found: files, packages, and
//! the analysis notices attached to them. They are plain immutable inputs;
//! nothing here knows about tag-value syntax.

mod file;
mod notice;
mod package;

pub use file::*;
pub use notice::*;
pub use package::*;
