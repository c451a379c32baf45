//! Table of contents built from emitted heading lines.

use std::collections::HashMap;

use super::anchor::sanitize_anchor;
use super::with_break;

/// A heading found in the rendered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRecord {
    /// Number of leading `#`
    pub level: usize,
    /// Heading words joined by single spaces
    pub title: String,
}

impl HeadingRecord {
    /// Read a heading back from an emitted line.
    pub fn from_line(line: &str) -> Option<Self> {
        let rest = line.trim_start_matches('#');
        let level = line.len() - rest.len();
        if level == 0 {
            return None;
        }
        Some(Self {
            level,
            title: rest.split_whitespace().collect::<Vec<_>>().join(" "),
        })
    }
}

/// Slug occurrence counts; repeated slugs get `-2`, `-3`, ... suffixes.
#[derive(Debug, Clone, Default)]
pub struct AnchorTable {
    counts: HashMap<String, usize>,
}

impl AnchorTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a unique anchor for a heading title.
    pub fn assign(&mut self, title: &str) -> String {
        let slug = sanitize_anchor(title);
        match self.counts.get_mut(&slug) {
            Some(count) => {
                *count += 1;
                format!("{}-{}", slug, count)
            }
            None => {
                self.counts.insert(slug.clone(), 1);
                slug
            }
        }
    }
}

/// Builds the navigable index placed in front of the body.
#[derive(Debug, Clone)]
pub struct TocBuilder {
    header: String,
}

impl TocBuilder {
    /// Create a builder whose index is titled `title`.
    pub fn new(title: &str) -> Self {
        Self {
            header: format!("## {}", title),
        }
    }

    /// Collect heading records from body lines, in document order.
    pub fn headings(&self, lines: &[String]) -> Vec<HeadingRecord> {
        lines
            .iter()
            .filter_map(|line| HeadingRecord::from_line(line))
            .collect()
    }

    /// Build the index lines: header first, then one entry per heading.
    pub fn build(&self, lines: &[String]) -> Vec<String> {
        let mut anchors = AnchorTable::new();
        let mut toc = vec![with_break(&self.header)];

        for heading in self.headings(lines) {
            let anchor = anchors.assign(&heading.title);
            let indent = "  ".repeat(heading.level - 1);
            toc.push(with_break(&format!(
                "{}- [{}](#{})",
                indent, heading.title, anchor
            )));
        }
        toc
    }
}
