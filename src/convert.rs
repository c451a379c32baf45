//! Conversion of a document into an output directory.
//!
//! Produces `<output_dir>/output.md` and `<output_dir>/images/image_<n>.png`.
//! The input is parsed before anything is created on disk, so a missing or
//! malformed document leaves the output location untouched.
//!
//! # Example
//!
//! ```no_run
//! use docxmd::convert::convert_file;
//! use docxmd::RenderOptions;
//!
//! fn main() -> docxmd::Result<()> {
//!     let result = convert_file("report.docx", "MarkdownOutput", &RenderOptions::default())?;
//!     println!("Markdown saved to: {}", result.output_path.display());
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::{Document, Metadata};
use crate::parser::DocxParser;
use crate::render::{ExtractionStats, MarkdownRenderer, RenderOptions};

/// Result of converting a document to disk.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Path of the written Markdown file
    pub output_path: PathBuf,

    /// Rendered Markdown
    pub content: String,

    /// Source document metadata
    pub metadata: Metadata,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl ConvertResult {
    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Convert the document at `input` into `output_dir`.
pub fn convert_file<P, Q>(input: P, output_dir: Q, options: &RenderOptions) -> Result<ConvertResult>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    log::info!("Converting {}", input.display());
    let document = DocxParser::open(input)?.parse()?;
    write_document(&document, output_dir.as_ref(), options)
}

/// Convert an in-memory document into `output_dir`.
pub fn convert_bytes<Q: AsRef<Path>>(
    data: &[u8],
    output_dir: Q,
    options: &RenderOptions,
) -> Result<ConvertResult> {
    let document = DocxParser::from_bytes(data)?.parse()?;
    write_document(&document, output_dir.as_ref(), options)
}

/// Render an already parsed document into `output_dir`.
pub fn write_document(
    document: &Document,
    output_dir: &Path,
    options: &RenderOptions,
) -> Result<ConvertResult> {
    let image_dir = output_dir.join(&options.image_dir_name);
    fs::create_dir_all(output_dir)?;
    fs::create_dir_all(&image_dir)?;

    let mut options = options.clone();
    options.image_dir = Some(image_dir);
    let result = MarkdownRenderer::new(options.clone()).render_with_stats(document)?;

    let output_path = output_dir.join(&options.output_file_name);
    fs::write(&output_path, &result.content)?;
    log::info!(
        "Wrote {} ({} bytes, {} images)",
        output_path.display(),
        result.content_len(),
        result.stats.image_count
    );

    Ok(ConvertResult {
        output_path,
        content: result.content,
        metadata: result.metadata,
        stats: result.stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;
    use crate::Error;

    #[test]
    fn test_write_document_creates_layout() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");

        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("hello"));

        let result = write_document(&doc, &out, &RenderOptions::default()).unwrap();
        assert_eq!(result.output_path, out.join("output.md"));
        assert!(out.join("images").is_dir());
        assert_eq!(fs::read_to_string(&result.output_path).unwrap(), result.content);
    }

    #[test]
    fn test_missing_input_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");

        let err = convert_file(dir.path().join("absent.docx"), &out, &RenderOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!out.exists());
    }

    #[test]
    fn test_non_zip_bytes_touch_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");

        let err = convert_bytes(b"plain text, not a container", &out, &RenderOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownFormat));
        assert!(!out.exists());
    }
}
