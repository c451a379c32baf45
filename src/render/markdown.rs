//! Markdown rendering for word-processing documents.
//!
//! The renderer walks body blocks in order, producing one output line per
//! emitted element, then rescans those lines for headings to build the
//! table of contents placed in front of the body.

use crate::error::{Error, Result};
use crate::model::{Block, Document, Paragraph, Table};

use super::code::{is_code_paragraph, merge_inline_code};
use super::code_block::CodeBlock;
use super::images::ImageExtractor;
use super::table::table_lines;
use super::toc::TocBuilder;
use super::{with_break, ExtractionStats, RenderOptions, RenderResult};

const HEADING_STYLE_PREFIX: &str = "Heading";

/// Deepest heading level of the built-in heading styles.
pub const MAX_HEADING_LEVEL: usize = 9;

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = MarkdownRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// Derive the heading level from a paragraph style name.
///
/// Returns `Ok(None)` for styles that are not headings. A style starting
/// with `Heading` whose last token is not an integer in
/// `1..=MAX_HEADING_LEVEL` is rejected.
pub fn heading_level(style_name: &str) -> Result<Option<usize>> {
    if !style_name.starts_with(HEADING_STYLE_PREFIX) {
        return Ok(None);
    }

    let invalid = || Error::InvalidHeadingStyle(style_name.to_string());
    let numeral = style_name.split_whitespace().last().ok_or_else(invalid)?;
    match numeral.parse::<usize>() {
        Ok(level) if (1..=MAX_HEADING_LEVEL).contains(&level) => Ok(Some(level)),
        _ => Err(invalid()),
    }
}

/// Markdown renderer.
///
/// Owns the per-conversion state: the open code block, the image counter
/// and the output lines. One renderer converts one document.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: ExtractionStats,
    lines: Vec<String>,
    code: CodeBlock,
    images: ImageExtractor,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        let images = ImageExtractor::new(options.image_dir.clone(), options.image_dir_name.clone());
        Self {
            options,
            stats: ExtractionStats::new(),
            lines: Vec::new(),
            code: CodeBlock::new(),
            images,
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.walk(doc)?;
        Ok(self.assemble(doc))
    }

    /// Render a document to Markdown with extraction statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.collect_stats = true;
        self.walk(doc)?;
        let content = self.assemble(doc);

        self.stats.count_text(&content);

        Ok(RenderResult::new(content, doc.metadata.clone(), self.stats))
    }

    /// Render only the body lines, without table of contents or frontmatter.
    pub fn body_lines(mut self, doc: &Document) -> Result<Vec<String>> {
        self.walk(doc)?;
        Ok(self.lines)
    }

    fn walk(&mut self, doc: &Document) -> Result<()> {
        for block in &doc.body {
            match block {
                Block::Paragraph(p) => self.render_paragraph(p, doc)?,
                Block::Table(t) => self.render_table(t),
                Block::Unsupported { tag } => {
                    log::debug!("Ignoring unsupported body element <{}>", tag);
                }
            }
        }
        self.flush_code();

        if self.options.collect_stats {
            self.stats.image_count = self.images.extracted();
            self.stats.skipped_image_count = self.images.skipped();
        }
        log::info!(
            "Rendered {} lines, {} images",
            self.lines.len(),
            self.images.extracted()
        );
        Ok(())
    }

    fn render_paragraph(&mut self, para: &Paragraph, doc: &Document) -> Result<()> {
        if para.has_image() {
            let links = self.images.extract(para, &doc.images)?;
            self.lines.extend(links.iter().map(|l| with_break(l)));
            return Ok(());
        }

        if para.is_blank() {
            if self.code.is_open() {
                self.code.push("");
            } else {
                self.lines.push(String::new());
                self.count(|s| s.blank_line_count += 1);
            }
            return Ok(());
        }

        if is_code_paragraph(&para.runs, &self.options.code_font) {
            if !self.code.is_open() && !self.code.is_empty() {
                self.flush_code();
            }
            self.code.open();
            self.code.push(para.text());
            return Ok(());
        }

        self.flush_code();

        let inline = merge_inline_code(&para.runs, &self.options.code_font);
        self.count(|s| s.inline_code_count += inline.code_spans as u32);

        let line = if let Some(level) = heading_level(para.style_name())? {
            self.count(|s| s.heading_count += 1);
            format!("{} {}", "#".repeat(level), inline.text.trim())
        } else if para.is_list_item() {
            self.count(|s| s.list_item_count += 1);
            format!("- {}", inline.text.trim())
        } else {
            self.count(|s| s.paragraph_count += 1);
            inline.text.trim_end().to_string()
        };
        self.lines.push(with_break(&line));
        Ok(())
    }

    fn render_table(&mut self, table: &Table) {
        self.flush_code();
        let lines = table_lines(table);
        if !lines.is_empty() {
            self.count(|s| s.table_count += 1);
        }
        self.lines.extend(lines);
    }

    fn flush_code(&mut self) {
        if let Some(block) = self.code.flush(&self.options.code_language) {
            self.count(|s| s.code_block_count += 1);
            self.lines.push(with_break(&block));
        }
    }

    fn count(&mut self, update: impl FnOnce(&mut ExtractionStats)) {
        if self.options.collect_stats {
            update(&mut self.stats);
        }
    }

    fn assemble(&self, doc: &Document) -> String {
        let mut output: Vec<String> = Vec::with_capacity(self.lines.len() + 8);

        if self.options.include_frontmatter && !doc.metadata.is_empty() {
            output.push(doc.metadata.to_yaml_frontmatter());
            output.push(String::new());
        }

        if self.options.include_toc {
            output.extend(TocBuilder::new(&self.options.toc_title).build(&self.lines));
            output.push(String::new());
        }

        output.extend(self.lines.iter().cloned());
        output.join("\n")
    }
}
