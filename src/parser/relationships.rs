//! Package relationship parts (`_rels/*.rels`).

use super::xml::{attr, children, strip_bom};
use crate::error::Result;
use std::collections::HashMap;

/// One relationship entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship id referenced from the document (e.g. "rId7")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target reference as written in the part
    pub target: String,
    /// Whether the target points outside the package
    pub external: bool,
}

impl Relationship {
    /// Check whether the target reference names an image part.
    pub fn is_image(&self) -> bool {
        !self.external && self.target.contains("image")
    }
}

/// Relationships of one source part, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    entries: HashMap<String, Relationship>,
}

impl Relationships {
    /// Parse a `.rels` XML part.
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(strip_bom(xml))?;
        let mut entries = HashMap::new();
        for rel in children(&doc.root_element(), "Relationship") {
            let (Some(id), Some(target)) = (attr(&rel, "Id"), attr(&rel, "Target")) else {
                continue;
            };
            entries.insert(
                id.to_string(),
                Relationship {
                    id: id.to_string(),
                    rel_type: attr(&rel, "Type").unwrap_or_default().to_string(),
                    target: target.to_string(),
                    external: attr(&rel, "TargetMode") == Some("External"),
                },
            );
        }
        Ok(Self { entries })
    }

    /// Get a relationship by id.
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.entries.get(id)
    }

    /// Iterate over image relationships.
    pub fn images(&self) -> impl Iterator<Item = &Relationship> {
        self.entries.values().filter(|r| r.is_image())
    }

    /// Number of relationships.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no relationships.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve a relationship target against the directory of its source part.
///
/// Absolute targets (leading `/`) are package-rooted; `..` segments are
/// collapsed.
pub fn resolve_part_name(base_dir: &str, target: &str) -> String {
    let joined = match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None if base_dir.is_empty() => target.to_string(),
        None => format!("{}/{}", base_dir.trim_end_matches('/'), target),
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in joined.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
  <Relationship Id="rId4" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="media/image1.png"/>
  <Relationship Id="rId5" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://example.com/image.png" TargetMode="External"/>
</Relationships>"#;

    #[test]
    fn test_parse_relationships() {
        let rels = Relationships::parse(RELS).unwrap();
        assert_eq!(rels.len(), 3);
        assert_eq!(rels.get("rId1").unwrap().target, "styles.xml");
        assert!(rels.get("rId5").unwrap().external);
    }

    #[test]
    fn test_image_filter_skips_external() {
        let rels = Relationships::parse(RELS).unwrap();
        let ids: Vec<_> = rels.images().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["rId4"]);
    }

    #[test]
    fn test_resolve_part_name() {
        assert_eq!(resolve_part_name("word", "media/image1.png"), "word/media/image1.png");
        assert_eq!(resolve_part_name("word", "../media/a.png"), "media/a.png");
        assert_eq!(resolve_part_name("word", "/word/media/b.png"), "word/media/b.png");
        assert_eq!(resolve_part_name("", "docProps/core.xml"), "docProps/core.xml");
    }
}
