//! Monospace run classification.
//!
//! A run is code-style when its explicit font equals the configured marker.
//! Whole paragraphs of such runs feed fenced code blocks; shorter stretches
//! inside ordinary prose become inline code spans.

use crate::model::Run;

/// Check whether a run is code-style.
pub fn is_code_run(run: &Run, code_font: &str) -> bool {
    run.has_font(code_font)
}

/// Check whether every run of a paragraph is code-style.
///
/// A paragraph without runs is vacuously code-style; callers decide blank
/// paragraphs before asking.
pub fn is_code_paragraph(runs: &[Run], code_font: &str) -> bool {
    runs.iter().all(|r| is_code_run(r, code_font))
}

/// Paragraph text with inline code spans wrapped in backticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineText {
    /// Rendered text
    pub text: String,
    /// Number of inline code spans emitted
    pub code_spans: usize,
}

/// Join runs in order, wrapping stretches of code-style runs in backticks.
///
/// A span starts at a code-style run with non-whitespace text and absorbs
/// following runs while they are code-style, or while they are a lone `" "`
/// run directly followed by another code-style run.
pub fn merge_inline_code(runs: &[Run], code_font: &str) -> InlineText {
    let mut text = String::new();
    let mut code_spans = 0;
    let mut i = 0;

    while i < runs.len() {
        let run = &runs[i];
        if !(is_code_run(run, code_font) && !run.text.trim().is_empty()) {
            text.push_str(&run.text);
            i += 1;
            continue;
        }

        let mut span = run.text.clone();
        let mut j = i + 1;
        while j < runs.len() {
            let next = &runs[j];
            let bridges_space = next.text == " "
                && runs
                    .get(j + 1)
                    .is_some_and(|after| is_code_run(after, code_font));
            if is_code_run(next, code_font) || bridges_space {
                span.push_str(&next.text);
                j += 1;
            } else {
                break;
            }
        }

        text.push('`');
        text.push_str(&span);
        text.push('`');
        code_spans += 1;
        i = j;
    }

    InlineText { text, code_spans }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONO: &str = "Cascadia Mono";

    fn code(text: &str) -> Run {
        Run::with_font(text, MONO)
    }

    #[test]
    fn test_space_run_bridges_two_code_runs() {
        let runs = vec![code("x"), Run::new(" "), code("y")];
        let merged = merge_inline_code(&runs, MONO);
        assert_eq!(merged.text, "`x y`");
        assert_eq!(merged.code_spans, 1);
    }

    #[test]
    fn test_span_inside_prose() {
        let runs = vec![Run::new("call "), code("foo()"), Run::new(" now")];
        let merged = merge_inline_code(&runs, MONO);
        assert_eq!(merged.text, "call `foo()` now");
    }

    #[test]
    fn test_trailing_space_run_is_not_absorbed() {
        let runs = vec![code("a"), Run::new(" "), Run::new("b")];
        assert_eq!(merge_inline_code(&runs, MONO).text, "`a` b");
    }

    #[test]
    fn test_whitespace_code_run_does_not_start_span() {
        let runs = vec![Run::new("a"), code(" "), Run::new("b")];
        let merged = merge_inline_code(&runs, MONO);
        assert_eq!(merged.text, "a b");
        assert_eq!(merged.code_spans, 0);
    }

    #[test]
    fn test_two_separate_spans() {
        let runs = vec![code("a"), Run::new(" and "), code("b")];
        let merged = merge_inline_code(&runs, MONO);
        assert_eq!(merged.text, "`a` and `b`");
        assert_eq!(merged.code_spans, 2);
    }

    #[test]
    fn test_other_font_is_not_code() {
        let runs = vec![Run::with_font("x", "Consolas")];
        assert_eq!(merge_inline_code(&runs, MONO).text, "x");
        assert!(!is_code_paragraph(&runs, MONO));
    }

    #[test]
    fn test_single_plain_run_disqualifies_block() {
        assert!(is_code_paragraph(&[code("x = 1"), code(" # c")], MONO));
        assert!(!is_code_paragraph(&[code("x = 1"), Run::new(" # c")], MONO));
        assert!(is_code_paragraph(&[], MONO));
    }
}
