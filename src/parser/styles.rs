//! Paragraph style table from `word/styles.xml`.

use super::xml::{attr, child, children, strip_bom};
use crate::error::Result;
use crate::model::DEFAULT_STYLE_NAME;
use std::collections::HashMap;

/// Built-in styles whose stored name is lowercase but which Word displays
/// capitalised.
const BUILTIN_LOWERCASE: &[&str] = &["caption", "footer", "header", "title", "subtitle", "normal"];

/// Paragraph style display names keyed by style id.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    names: HashMap<String, String>,
    default_name: String,
}

impl StyleSheet {
    /// Parse the styles part.
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(strip_bom(xml))?;
        let mut sheet = Self::default();

        for style in children(&doc.root_element(), "style") {
            if attr(&style, "type") != Some("paragraph") {
                continue;
            }
            let Some(style_id) = attr(&style, "styleId") else {
                continue;
            };
            let name = child(&style, "name")
                .and_then(|n| attr(&n, "val"))
                .map(display_name)
                .unwrap_or_else(|| style_id.to_string());

            if matches!(attr(&style, "default"), Some("1") | Some("true")) {
                sheet.default_name = name.clone();
            }
            sheet.names.insert(style_id.to_string(), name);
        }

        Ok(sheet)
    }

    /// Resolve a `w:pStyle` id to its display name.
    ///
    /// Unknown or absent ids resolve to the default paragraph style.
    pub fn resolve(&self, style_id: Option<&str>) -> &str {
        style_id
            .and_then(|id| self.names.get(id))
            .map(String::as_str)
            .unwrap_or(&self.default_name)
    }

    /// Number of paragraph styles.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no paragraph style is declared.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            names: HashMap::new(),
            default_name: DEFAULT_STYLE_NAME.to_string(),
        }
    }
}

/// Map a stored built-in name ("heading 2") to its display form ("Heading 2").
fn display_name(stored: &str) -> String {
    let is_builtin = stored
        .strip_prefix("heading ")
        .is_some_and(|n| n.chars().all(|c| c.is_ascii_digit()))
        || BUILTIN_LOWERCASE.contains(&stored);

    if !is_builtin {
        return stored.to_string();
    }

    let mut chars = stored.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
