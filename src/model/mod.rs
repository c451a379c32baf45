//! Document model types for DOCX content representation.
//!
//! This module defines the read-only view of a word-processing document that
//! sits between the container reader and the Markdown renderer: body blocks in
//! source order, runs with their explicit font, and the image relationship
//! table.

mod document;
mod paragraph;
mod resource;
mod table;

pub use document::{Block, Document, Metadata};
pub(crate) use paragraph::DEFAULT_STYLE_NAME;
pub use paragraph::{Paragraph, Run};
pub use resource::{Resource, ResourceType};
pub use table::{Table, TableCell, TableRow};
