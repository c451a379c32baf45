//! Heading anchor slugs.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
static RE_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s-]+").unwrap());

/// Map heading text to a URL-safe slug.
///
/// Lowercases, deletes everything that is not a word character, whitespace
/// or hyphen, collapses whitespace/hyphen runs to one hyphen and trims
/// hyphens from both ends. An all-punctuation title yields `""`.
pub fn sanitize_anchor(title: &str) -> String {
    let lowered = title.to_lowercase();
    let kept = RE_DISALLOWED.replace_all(&lowered, "");
    let hyphenated = RE_SEPARATORS.replace_all(&kept, "-");
    hyphenated.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slug() {
        assert_eq!(sanitize_anchor("Intro"), "intro");
        assert_eq!(sanitize_anchor("Getting Started"), "getting-started");
    }

    #[test]
    fn test_punctuation_is_deleted_not_replaced() {
        assert_eq!(sanitize_anchor("What's new?"), "whats-new");
        assert_eq!(sanitize_anchor("C++ & Rust"), "c-rust");
    }

    #[test]
    fn test_separators_collapse_and_trim() {
        assert_eq!(sanitize_anchor("  - a -- b -  "), "a-b");
        assert_eq!(sanitize_anchor("snake_case stays"), "snake_case-stays");
    }

    #[test]
    fn test_unicode_word_characters_survive() {
        assert_eq!(sanitize_anchor("Введение в Python"), "введение-в-python");
    }

    #[test]
    fn test_all_punctuation_is_empty() {
        assert_eq!(sanitize_anchor("?!..."), "");
    }
}
