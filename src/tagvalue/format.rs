//! Formatting primitives shared by the block generators.
//!
//! Text placed inside `<text>` markers is inserted verbatim. Nothing here
//! escapes a literal `</text>` in a message body; keeping such sequences out
//! of notices and copyright strings is the producer's job.

use std::fmt::Write as _;

use super::SpdxTag;
use crate::error::Result;
use crate::model::NoticeOrigin;
use crate::resolver::SpdxResolver;

const TEXT_OPEN: &str = "<text>";
const TEXT_CLOSE: &str = "</text>";

/// Wrap a free-form value in `<text>` / `</text>` markers.
///
/// ```
/// use sbom_tagvalue::tagvalue::format::wrap_text;
///
/// assert_eq!(wrap_text("Copyright 2020 Foo"), "<text>Copyright 2020 Foo</text>");
/// ```
pub fn wrap_text(body: &str) -> String {
    format!("{TEXT_OPEN}{body}{TEXT_CLOSE}")
}

/// Aggregate notices into one paragraph per origin.
///
/// Each paragraph is the origin label followed by a colon, then one
/// `<level>: <message>` line per notice prefixed by `indent`. Every line is
/// newline-terminated. An empty slice yields an empty string.
///
/// ```
/// use sbom_tagvalue::model::{Notice, NoticeOrigin};
/// use sbom_tagvalue::tagvalue::format::aggregate_notices;
///
/// let origin = NoticeOrigin::new("Layer 1").with_notice(Notice::warning("m"));
/// assert_eq!(aggregate_notices(&[origin], "\t"), "Layer 1:\n\twarning: m\n");
/// ```
pub fn aggregate_notices(origins: &[NoticeOrigin], indent: &str) -> String {
    let mut out = String::new();
    for origin in origins {
        let _ = writeln!(out, "{}:", origin.origin_label);
        for notice in &origin.notices {
            let _ = writeln!(out, "{indent}{}: {}", notice.level, notice.message);
        }
    }
    out
}

/// Render a raw license token as the reference the resolver assigns to it.
pub fn license_ref<R: SpdxResolver + ?Sized>(resolver: &R, token: &str) -> Result<String> {
    resolver.canonicalize_license(token)
}

/// Line-oriented accumulator for one tag-value block.
#[derive(Debug, Default)]
pub(crate) struct TagBlock {
    buf: String,
    lines: usize,
}

impl TagBlock {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append `Tag: value`
    pub(crate) fn tag(&mut self, tag: SpdxTag, value: &str) {
        let _ = writeln!(self.buf, "{tag}: {value}");
        self.lines += 1;
    }

    /// Append `Tag: <text>value</text>` with the value kept inline
    pub(crate) fn inline_text(&mut self, tag: SpdxTag, value: &str) {
        let wrapped = wrap_text(value);
        self.tag(tag, &wrapped);
        self.lines += value.matches('\n').count();
    }

    /// Append a multi-line `<text>` block whose body starts on its own line.
    ///
    /// A body without a trailing newline gets one so the closing marker
    /// always sits on its own line.
    pub(crate) fn text_block(&mut self, tag: SpdxTag, body: &str) {
        let mut framed = String::with_capacity(body.len() + 2);
        framed.push('\n');
        framed.push_str(body);
        if !body.ends_with('\n') {
            framed.push('\n');
        }
        self.inline_text(tag, &framed);
    }

    pub(crate) fn line_count(&self) -> usize {
        self.lines
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Notice;

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate_notices(&[], ""), "");
    }

    #[test]
    fn test_aggregate_keeps_order_across_origins() {
        let origins = vec![
            NoticeOrigin::new("debian:bookworm")
                .with_notice(Notice::info("found 12 packages"))
                .with_notice(Notice::warning("no license for libc6")),
            NoticeOrigin::new("Layer 2"),
            NoticeOrigin::new("apt").with_notice(Notice::hint("pin versions")),
        ];
        assert_eq!(
            aggregate_notices(&origins, ""),
            "debian:bookworm:\ninfo: found 12 packages\nwarning: no license for libc6\n\
             Layer 2:\n\
             apt:\nhint: pin versions\n"
        );
    }

    #[test]
    fn test_aggregate_indent() {
        let origins = vec![NoticeOrigin::new("pip").with_notice(Notice::error("timeout"))];
        assert_eq!(aggregate_notices(&origins, "    "), "pip:\n    error: timeout\n");
    }

    #[test]
    fn test_wrap_text_is_verbatim() {
        assert_eq!(wrap_text("a\nb"), "<text>a\nb</text>");
        assert_eq!(wrap_text("x </text> y"), "<text>x </text> y</text>");
    }

    #[test]
    fn test_text_block_framing() {
        let mut block = TagBlock::new();
        block.text_block(SpdxTag::FileNotice, "NOTICE body");
        block.text_block(SpdxTag::FileComment, "layer:\ninfo: m\n");
        assert_eq!(
            block.finish(),
            "FileNotice: <text>\nNOTICE body\n</text>\n\
             FileComment: <text>\nlayer:\ninfo: m\n</text>\n"
        );
    }

    #[test]
    fn test_line_count_includes_text_lines() {
        let mut block = TagBlock::new();
        block.tag(SpdxTag::FileName, "a.txt");
        block.inline_text(SpdxTag::PackageCopyrightText, "one\ntwo");
        assert_eq!(block.line_count(), 3);
        assert_eq!(block.finish().lines().count(), 3);
    }
}
