//! Accumulator for consecutive code paragraphs.

/// Lines of an open fenced code block.
#[derive(Debug, Clone, Default)]
pub struct CodeBlock {
    lines: Vec<String>,
    open: bool,
}

impl CodeBlock {
    /// Create a closed, empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a code run is in progress.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Check if no line is buffered.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of buffered lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Mark the block open.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Append a line verbatim.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Close the block and return it as fenced text, or `None` if nothing
    /// was buffered. The buffer is cleared either way.
    pub fn flush(&mut self, language: &str) -> Option<String> {
        self.open = false;
        if self.lines.is_empty() {
            return None;
        }
        let body = std::mem::take(&mut self.lines).join("\n");
        Some(format!("```{}\n{}\n```", language, body))
    }
}
