//! Rendering module for converting documents to Markdown and JSON.

mod anchor;
mod code;
mod code_block;
mod images;
mod json;
mod markdown;
mod options;
mod result;
mod table;
mod toc;

pub use anchor::sanitize_anchor;
pub use code::{is_code_paragraph, is_code_run, merge_inline_code, InlineText};
pub use code_block::CodeBlock;
pub use images::ImageExtractor;
pub use json::{to_json, JsonFormat};
pub use markdown::{
    heading_level, to_markdown, to_markdown_with_stats, MarkdownRenderer, MAX_HEADING_LEVEL,
};
pub use options::{RenderOptions, DEFAULT_CODE_FONT, DEFAULT_CODE_LANGUAGE, DEFAULT_TOC_TITLE};
pub use result::{ExtractionStats, RenderResult};
pub use table::table_lines;
pub use toc::{AnchorTable, HeadingRecord, TocBuilder};

/// Hard line break marker appended to every non-blank output line.
pub const LINE_BREAK: &str = "  ";

/// Append the hard line break marker.
pub(crate) fn with_break(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + LINE_BREAK.len());
    out.push_str(line);
    out.push_str(LINE_BREAK);
    out
}
