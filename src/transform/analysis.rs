//! Text analysis ("nerd mode")

use serde::Serialize;
use std::collections::HashMap;

/// Word count, character count and per-character frequency for a text.
#[derive(Debug, Clone, Serialize)]
pub struct TextStats {
    pub word_count: usize,
    pub char_count: usize,
    pub char_frequency: HashMap<char, usize>,
}

/// Analyze the text.
///
/// Words are whitespace-split; the character count is the raw length
/// including spaces; the frequency map counts every character,
/// punctuation and spaces included.
pub fn analyze(text: &str) -> TextStats {
    let mut char_frequency = HashMap::new();
    for c in text.chars() {
        *char_frequency.entry(c).or_insert(0) += 1;
    }

    TextStats {
        word_count: text.split_whitespace().count(),
        char_count: text.chars().count(),
        char_frequency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_counts() {
        let stats = analyze("hello world");
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.char_count, 11);
        assert_eq!(stats.char_frequency[&'l'], 3);
        assert_eq!(stats.char_frequency[&' '], 1);
        assert_eq!(stats.char_frequency[&'o'], 2);
    }

    #[test]
    fn test_analyze_empty_text() {
        let stats = analyze("");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.char_count, 0);
        assert!(stats.char_frequency.is_empty());
    }
}
