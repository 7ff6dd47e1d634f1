//! Character-level transforms built on direct table lookups
//!
//! These are the deterministic string-to-string operations: reversal,
//! visual flips, ciphers and simple word games.

use crate::transform::tables;
use crate::utils::{AppResult, TransformError};

/// Reverse the character sequence, keeping multi-byte characters intact.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Substitute every character with its upside-down lookalike, then
/// reverse the whole sequence so the text reads flipped.
pub fn flip(text: &str) -> String {
    text.chars().rev().map(tables::flip_char).collect()
}

/// Rewrite the text in a constructed-language glyph set.
///
/// `p`, `y` and `x` (either case) become multi-glyph sequences; letters
/// outside the table pass through unchanged.
pub fn enchant(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'p' | 'P' => out.push_str("!¡"),
            'y' | 'Y' => out.push_str("||"),
            'x' | 'X' => out.push_str(" \u{307}/"),
            _ => match tables::enchant_char(c) {
                Some(glyph) => out.push(glyph),
                None => out.push(c),
            },
        }
    }
    out
}

/// Upper- or lower-case the full text. Any other mode is rejected.
pub fn case_switch(text: &str, mode: &str) -> AppResult<String> {
    match mode.to_lowercase().as_str() {
        "upper" => Ok(text.to_uppercase()),
        "lower" => Ok(text.to_lowercase()),
        other => Err(TransformError::InvalidArgument(format!(
            "Case must be 'upper' or 'lower', got '{}'",
            other
        ))),
    }
}

/// Lower-case the text and substitute a, e, l, o, t with digits.
pub fn leetspeak(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| tables::leet_char(c).unwrap_or(c))
        .collect()
}

/// Single-word pig latin.
///
/// Vowel-initial words get "way" appended; otherwise the first character
/// moves to the end followed by "ay". Empty input stays empty.
pub fn piglatin(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if "aeiouAEIOU".contains(first) {
        format!("{}way", text)
    } else {
        format!("{}{}ay", chars.as_str(), first)
    }
}

/// Caesar cipher with a signed shift.
///
/// Each alphabetic character shifts within its own case's alphabet;
/// `rem_euclid` keeps negative shifts wrapping correctly. Everything
/// else passes through.
pub fn caesar(text: &str, shift: i32) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                let offset = i32::from(c as u8 - base);
                let shifted = (offset + shift).rem_euclid(26) as u8;
                (base + shifted) as char
            } else {
                c
            }
        })
        .collect()
}

/// Replace known words with emoji, case-insensitively.
///
/// Tokens are whitespace-split and rejoined with single spaces, so the
/// original whitespace collapses. Unmatched words pass through.
pub fn emoticons(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            tables::EMOTICONS
                .get(word.to_lowercase().as_str())
                .copied()
                .unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Duplicate the text on following lines, each shadow line indented by
/// `offset` spaces. Multi-line input indents every line independently.
pub fn shadow(text: &str, offset: usize) -> String {
    let pad = " ".repeat(offset);
    let shadow_copy = text
        .split('\n')
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n{}", text, shadow_copy)
}
