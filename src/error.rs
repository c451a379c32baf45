//! Error types for docxmd library.

use std::io;
use thiserror::Error;

/// Result type alias for docxmd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during DOCX conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the input or writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as a DOCX container.
    #[error("Unknown file format: not a valid DOCX document")]
    UnknownFormat,

    /// The ZIP container could not be read.
    #[error("Container error: {0}")]
    Zip(String),

    /// An XML part is not well-formed.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// A required package part is missing.
    #[error("Missing required part: {0}")]
    MissingPart(String),

    /// A paragraph style looks like a heading but carries no usable level.
    #[error("Invalid heading style: {0:?}")]
    InvalidHeadingStyle(String),

    /// Error during rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::InvalidArchive(_) => Error::UnknownFormat,
            _ => Error::Zip(err.to_string()),
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
