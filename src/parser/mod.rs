//! DOCX parsing module.

mod docx_parser;
mod options;
mod relationships;
mod styles;
mod xml;

pub use docx_parser::DocxParser;
pub use options::{ErrorMode, ParseOptions};
pub use relationships::{resolve_part_name, Relationship, Relationships};
pub use styles::StyleSheet;
