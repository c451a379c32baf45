//! DOCX format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// Container format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocxFormat {
    /// Whether the archive holds the main document part
    pub has_document_part: bool,
}

impl std::fmt::Display for DocxFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_document_part {
            write!(f, "DOCX")
        } else {
            write!(f, "ZIP container")
        }
    }
}

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Main document part every word-processing package carries.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Detect the container format from a file path.
///
/// Reads the archive directory to confirm the main document part exists.
///
/// # Example
/// ```no_run
/// use docxmd::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("report.docx").unwrap();
/// assert!(format.has_document_part);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocxFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 4];
    reader
        .read_exact(&mut header)
        .map_err(|_| Error::UnknownFormat)?;
    check_magic(&header)?;
    reader.rewind()?;
    inspect_container(reader)
}

/// Check that data starts with the ZIP local file header.
pub fn check_magic(data: &[u8]) -> Result<()> {
    if data.starts_with(ZIP_MAGIC) {
        Ok(())
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Detect the container format from bytes.
///
/// Data with the ZIP magic but an unreadable archive directory is an error.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocxFormat> {
    check_magic(data)?;
    inspect_container(std::io::Cursor::new(data))
}

fn inspect_container<R: Read + Seek>(reader: R) -> Result<DocxFormat> {
    let archive = zip::ZipArchive::new(reader)?;
    let has_document_part = archive.file_names().any(|name| name == DOCUMENT_PART);
    Ok(DocxFormat { has_document_part })
}

/// Check if a file is a word-processing package.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path)
        .map(|f| f.has_document_part)
        .unwrap_or(false)
}

/// Check if bytes start with a ZIP container header.
pub fn is_zip_bytes(data: &[u8]) -> bool {
    check_magic(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_invalid_format() {
        let data = b"<!DOCTYPE html>";
        let result = detect_format_from_bytes(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_too_short() {
        let result = detect_format_from_bytes(b"PK");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_corrupt_container_is_an_error() {
        let result = detect_format_from_bytes(b"PK\x03\x04rest");
        assert!(matches!(result, Err(Error::UnknownFormat) | Err(Error::Zip(_))));
    }

    #[test]
    fn test_zip_without_document_part() {
        use std::io::{Cursor, Write};

        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file("notes.txt", zip::write::SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"hello").unwrap();
        let data = zip.finish().unwrap().into_inner();

        let format = detect_format_from_bytes(&data).unwrap();
        assert!(!format.has_document_part);
        assert_eq!(format.to_string(), "ZIP container");
    }

    #[test]
    fn test_is_zip_bytes() {
        assert!(is_zip_bytes(b"PK\x03\x04"));
        assert!(!is_zip_bytes(b"%PDF-1.7"));
        assert!(!is_zip_bytes(b""));
    }

    #[test]
    fn test_missing_file_is_not_docx() {
        assert!(!is_docx("/nonexistent/file.docx"));
    }
}
