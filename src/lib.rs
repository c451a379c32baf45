//! # docxmd
//!
//! Word-processing document (DOCX) to Markdown conversion for Rust.
//!
//! This library reads the body of a DOCX package and emits Markdown with a
//! generated table of contents, fenced code blocks for monospace paragraphs,
//! pipe tables and extracted images.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docxmd::{parse_file, render};
//!
//! fn main() -> docxmd::Result<()> {
//!     // Parse a DOCX file
//!     let doc = parse_file("report.docx")?;
//!
//!     // Convert to Markdown
//!     let options = render::RenderOptions::default();
//!     let markdown = render::to_markdown(&doc, &options)?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! To produce the `output.md` + `images/` layout on disk use
//! [`convert::convert_file`].

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{convert_bytes, convert_file, ConvertResult};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, DocxFormat};
pub use error::{Error, Result};
pub use model::{
    Block, Document, Metadata, Paragraph, Resource, ResourceType, Run, Table, TableCell, TableRow,
};
pub use parser::{DocxParser, ErrorMode, ParseOptions};
pub use render::{ExtractionStats, JsonFormat, RenderOptions, RenderResult};

use std::io::Read;
use std::path::Path;

/// Parse a DOCX file and return a structured document.
///
/// # Example
///
/// ```no_run
/// use docxmd::parse_file;
///
/// let doc = parse_file("report.docx").unwrap();
/// println!("Blocks: {}", doc.body.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a DOCX file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = DocxParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a DOCX from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a DOCX from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    let parser = DocxParser::from_bytes_with_options(data, options)?;
    parser.parse()
}

/// Parse a DOCX from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = DocxParser::from_reader(reader)?;
    parser.parse()
}

/// Extract plain text from a DOCX file.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(doc.plain_text())
}

/// Convert a DOCX to Markdown without writing images.
///
/// # Example
///
/// ```no_run
/// use docxmd::to_markdown;
///
/// let markdown = to_markdown("report.docx").unwrap();
/// std::fs::write("output.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_markdown(&doc, &RenderOptions::default())
}

/// Convert a DOCX to Markdown with custom options.
pub fn to_markdown_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_markdown(&doc, options)
}

/// Convert a DOCX to JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Builder for parsing and converting DOCX documents.
///
/// # Example
///
/// ```no_run
/// use docxmd::Docxmd;
///
/// let markdown = Docxmd::new()
///     .with_code_font("Consolas")
///     .with_code_language("rust")
///     .without_toc()
///     .lenient()
///     .parse("report.docx")?
///     .to_markdown()?;
/// # Ok::<(), docxmd::Error>(())
/// ```
pub struct Docxmd {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Docxmd {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Enable image extraction.
    pub fn with_images(mut self, extract: bool) -> Self {
        self.parse_options = self.parse_options.with_images(extract);
        self
    }

    /// Set image output directory.
    pub fn with_image_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.render_options = self.render_options.with_image_dir(dir);
        self
    }

    /// Set the font marking code runs.
    pub fn with_code_font(mut self, font: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_code_font(font);
        self
    }

    /// Set the fenced code block language tag.
    pub fn with_code_language(mut self, language: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_code_language(language);
        self
    }

    /// Set the table of contents title.
    pub fn with_toc_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_toc_title(title);
        self
    }

    /// Omit the table of contents.
    pub fn without_toc(mut self) -> Self {
        self.render_options = self.render_options.with_toc(false);
        self
    }

    /// Enable frontmatter in output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Parse a DOCX file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<DocxmdResult> {
        let parser = DocxParser::open_with_options(path, self.parse_options)?;
        let document = parser.parse()?;
        Ok(DocxmdResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a DOCX from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<DocxmdResult> {
        let parser = DocxParser::from_bytes_with_options(data, self.parse_options)?;
        let document = parser.parse()?;
        Ok(DocxmdResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a DOCX file and write `output.md` plus images into `output_dir`.
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        self,
        path: P,
        output_dir: Q,
    ) -> Result<ConvertResult> {
        let result = self.parse(path)?;
        convert::write_document(&result.document, output_dir.as_ref(), &result.render_options)
    }
}

impl Default for Docxmd {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a DOCX document.
pub struct DocxmdResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl DocxmdResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to Markdown with statistics.
    pub fn to_markdown_with_stats(&self) -> Result<RenderResult> {
        render::to_markdown_with_stats(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get plain text.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
