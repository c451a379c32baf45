//! Rendering options and configuration.

use std::path::PathBuf;

/// Font whose runs are treated as code.
pub const DEFAULT_CODE_FONT: &str = "Cascadia Mono";

/// Language tag of fenced code blocks.
pub const DEFAULT_CODE_LANGUAGE: &str = "python";

/// Title of the generated table of contents.
pub const DEFAULT_TOC_TITLE: &str = "Table of Contents";

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Directory to save extracted images (links only when `None`)
    pub image_dir: Option<PathBuf>,

    /// Directory name used in image links and under the output directory
    pub image_dir_name: String,

    /// File name of the Markdown output inside the output directory
    pub output_file_name: String,

    /// Font name marking code runs
    pub code_font: String,

    /// Language tag written after the opening fence
    pub code_language: String,

    /// Generate a table of contents
    pub include_toc: bool,

    /// Table of contents title
    pub toc_title: String,

    /// Include YAML frontmatter with metadata
    pub include_frontmatter: bool,

    /// Collect extraction statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image directory.
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = Some(dir.into());
        self
    }

    /// Set the image directory name used in links.
    pub fn with_image_dir_name(mut self, name: impl Into<String>) -> Self {
        self.image_dir_name = name.into();
        self
    }

    /// Set the Markdown output file name.
    pub fn with_output_file_name(mut self, name: impl Into<String>) -> Self {
        self.output_file_name = name.into();
        self
    }

    /// Set the code font marker.
    pub fn with_code_font(mut self, font: impl Into<String>) -> Self {
        self.code_font = font.into();
        self
    }

    /// Set the fenced block language tag.
    pub fn with_code_language(mut self, language: impl Into<String>) -> Self {
        self.code_language = language.into();
        self
    }

    /// Enable or disable the table of contents.
    pub fn with_toc(mut self, include: bool) -> Self {
        self.include_toc = include;
        self
    }

    /// Set the table of contents title.
    pub fn with_toc_title(mut self, title: impl Into<String>) -> Self {
        self.toc_title = title.into();
        self
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            image_dir: None,
            image_dir_name: "images".to_string(),
            output_file_name: "output.md".to_string(),
            code_font: DEFAULT_CODE_FONT.to_string(),
            code_language: DEFAULT_CODE_LANGUAGE.to_string(),
            include_toc: true,
            toc_title: DEFAULT_TOC_TITLE.to_string(),
            include_frontmatter: false,
            collect_stats: false,
        }
    }
}
