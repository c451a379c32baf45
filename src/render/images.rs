//! Embedded image extraction.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::{Paragraph, Resource};

/// Writes images referenced by paragraphs and produces their Markdown links.
///
/// Images are numbered from 1 across the whole document in the order they
/// are met, and always saved as `image_<n>.png`.
#[derive(Debug, Clone)]
pub struct ImageExtractor {
    output_dir: Option<PathBuf>,
    link_dir: String,
    counter: u32,
    skipped: u32,
}

impl ImageExtractor {
    /// Create an extractor writing into `output_dir` and linking through
    /// `link_dir`. With no output directory only the links are produced.
    pub fn new(output_dir: Option<PathBuf>, link_dir: impl Into<String>) -> Self {
        Self {
            output_dir,
            link_dir: link_dir.into(),
            counter: 1,
            skipped: 0,
        }
    }

    /// Number of images extracted so far.
    pub fn extracted(&self) -> u32 {
        self.counter - 1
    }

    /// Number of references that did not resolve.
    pub fn skipped(&self) -> u32 {
        self.skipped
    }

    /// Directory images are written to.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// Extract every image of a paragraph, returning one link per image.
    ///
    /// References missing from `images` are skipped silently.
    pub fn extract(
        &mut self,
        paragraph: &Paragraph,
        images: &HashMap<String, Resource>,
    ) -> Result<Vec<String>> {
        let mut links = Vec::new();
        for rel_id in paragraph.runs.iter().filter_map(|r| r.image_ref.as_deref()) {
            let Some(resource) = images.get(rel_id) else {
                log::warn!("Skipping unresolved image reference {}", rel_id);
                self.skipped += 1;
                continue;
            };

            let file_name = format!("image_{}.png", self.counter);
            if let Some(ref dir) = self.output_dir {
                let path = dir.join(&file_name);
                fs::write(&path, &resource.data)?;
                log::debug!("Wrote {} ({} bytes)", path.display(), resource.size());
            }

            links.push(format!(
                "![Image {}]({}/{})",
                self.counter, self.link_dir, file_name
            ));
            self.counter += 1;
        }
        Ok(links)
    }
}
