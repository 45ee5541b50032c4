use regex::Regex;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s']").unwrap());
static APOSTROPHE_TRIM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^'+|'+$").unwrap());

/// Tokenize text into an ordered sequence of lowercase words.
///
/// Strips the full punctuation class before splitting, preserves apostrophes
/// within words (e.g., "don't"), and discards empty tokens from leading or
/// trailing separators. Empty input yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned = NON_WORD.replace_all(text, " ");
    cleaned
        .to_lowercase()
        .split_whitespace()
        .map(|t| APOSTROPHE_TRIM.replace_all(t, "").to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_period_strip() {
        let tokens = tokenize("A cat sat. A cat ran.");
        assert_eq!(tokens, vec!["a", "cat", "sat", "a", "cat", "ran"]);
    }

    #[test]
    fn test_mixed_punctuation_stripped() {
        let tokens = tokenize("hello! world? (foo),");
        assert_eq!(tokens, vec!["hello", "world", "foo"]);
    }

    #[test]
    fn test_apostrophe_preserved() {
        let tokens = tokenize("Don't stop!");
        assert_eq!(tokens, vec!["don't", "stop"]);
    }

    #[test]
    fn test_leading_trailing_apostrophes_stripped() {
        let tokens = tokenize("'hello' 'world'");
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        let tokens = tokenize("   \t\n  ");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_numbers_preserved() {
        let tokens = tokenize("test 123 hello");
        assert_eq!(tokens, vec!["test", "123", "hello"]);
    }

    #[test]
    fn test_order_preserved() {
        let tokens = tokenize("third SECOND first");
        assert_eq!(tokens, vec!["third", "second", "first"]);
    }
}
