//! Paragraph and run types.

use serde::{Deserialize, Serialize};

/// Style reported for paragraphs that carry no explicit style.
pub(crate) const DEFAULT_STYLE_NAME: &str = "Normal";

/// A paragraph of text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    /// Runs in source order
    pub runs: Vec<Run>,

    /// Display name of the paragraph style (e.g. "Heading 2")
    pub style_name: String,

    /// Whether the paragraph carries list numbering
    pub is_list_item: bool,

    /// Whether the paragraph contains an embedded picture
    pub has_image: bool,
}

impl Paragraph {
    /// Create a new empty paragraph with the default style.
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            style_name: DEFAULT_STYLE_NAME.to_string(),
            is_list_item: false,
            has_image: false,
        }
    }

    /// Create a paragraph with a single plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::from_runs(vec![Run::new(text)])
    }

    /// Create a paragraph from runs.
    pub fn from_runs(runs: Vec<Run>) -> Self {
        Self {
            has_image: runs.iter().any(|r| r.image_ref.is_some()),
            runs,
            ..Self::new()
        }
    }

    /// Create a heading paragraph styled "Heading <level>".
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self::with_text(text).with_style(format!("Heading {}", level))
    }

    /// Set the style name.
    pub fn with_style(mut self, style_name: impl Into<String>) -> Self {
        self.style_name = style_name.into();
        self
    }

    /// Mark the paragraph as a list item.
    pub fn as_list_item(mut self) -> Self {
        self.is_list_item = true;
        self
    }

    /// Add a run.
    pub fn add_run(&mut self, run: Run) {
        if run.image_ref.is_some() {
            self.has_image = true;
        }
        self.runs.push(run);
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no non-whitespace text.
    pub fn is_blank(&self) -> bool {
        self.runs.iter().all(|r| r.text.trim().is_empty())
    }

    /// Style name of the paragraph.
    pub fn style_name(&self) -> &str {
        &self.style_name
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        self.is_list_item
    }

    /// Check if the paragraph embeds a picture.
    pub fn has_image(&self) -> bool {
        self.has_image
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// A run of text sharing one font.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,

    /// Explicitly set font name, if any
    pub font_name: Option<String>,

    /// Relationship id of an embedded picture in this run
    pub image_ref: Option<String>,
}

impl Run {
    /// Create a run without an explicit font.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a run with an explicit font.
    pub fn with_font(text: impl Into<String>, font_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_name: Some(font_name.into()),
            image_ref: None,
        }
    }

    /// Create a run holding an embedded picture.
    pub fn image(rel_id: impl Into<String>) -> Self {
        Self {
            image_ref: Some(rel_id.into()),
            ..Default::default()
        }
    }

    /// Text of the run.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Explicit font name of the run.
    pub fn font_name(&self) -> Option<&str> {
        self.font_name.as_deref()
    }

    /// Check if this run's font is exactly `marker`.
    pub fn has_font(&self, marker: &str) -> bool {
        self.font_name() == Some(marker)
    }
}
