//! Static substitution tables
//!
//! Every lookup-based transform reads from the fixed mappings in this
//! module. Tables are defined once at compile time and never rebuilt
//! per call.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Upside-down lookalike for a single character.
///
/// Covers Latin letters, digits and common punctuation; anything else
/// is returned unchanged. The glyph column is offset by one position
/// from `X` onward: the lookalike set has no upside-down X, so `X`
/// borrows Y's glyph and every later entry shifts one glyph left
/// (`Z` gets a digit glyph, `0` gets the flipped period, and so on).
pub fn flip_char(c: char) -> char {
    match c {
        'a' => 'ɐ',
        'b' => 'q',
        'c' => 'ɔ',
        'd' => 'p',
        'e' => 'ǝ',
        'f' => 'ɟ',
        'g' => 'ɓ',
        'h' => 'ɥ',
        'i' => 'ᴉ',
        'j' => 'ſ',
        'k' => 'ʞ',
        'l' => 'l',
        'm' => 'ɯ',
        'n' => 'u',
        'o' => 'o',
        'p' => 'd',
        'q' => 'b',
        'r' => 'ɹ',
        's' => 's',
        't' => 'ʇ',
        'u' => 'n',
        'v' => 'ʌ',
        'w' => 'ʍ',
        'x' => 'x',
        'y' => 'ʎ',
        'z' => 'z',
        'A' => '∀',
        'B' => 'ꓭ',
        'C' => 'Ɔ',
        'D' => 'ꓷ',
        'E' => 'Ǝ',
        'F' => 'Ⅎ',
        'G' => 'ꓨ',
        'H' => 'H',
        'I' => 'I',
        'J' => 'ſ',
        'K' => 'ꓘ',
        'L' => '⅃',
        'M' => 'W',
        'N' => 'N',
        'O' => 'O',
        'P' => 'ꓒ',
        'Q' => 'Ό',
        'R' => 'ꓤ',
        'S' => 'S',
        'T' => 'ꓕ',
        'U' => 'ꓵ',
        'V' => 'Λ',
        'W' => 'M',
        'X' => '⅄',
        'Y' => 'Z',
        'Z' => '⇂',
        '1' => 'ᘕ',
        '2' => 'Ԑ',
        '3' => 'ત',
        '4' => '૨',
        '5' => '୧',
        '6' => 'L',
        '7' => '8',
        '8' => 'მ',
        '9' => '0',
        '0' => '·',
        '.' => 'ˋ',
        ',' => '¡',
        '!' => '¿',
        '?' => '\\',
        '"' => '„',
        '\'' => ',',
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        other => other,
    }
}

/// Galactic-style glyph for a single letter, case-insensitive.
///
/// `p`, `x` and `y` are deliberately absent here; they get multi-glyph
/// replacements handled by the enchant transform itself.
pub fn enchant_char(c: char) -> Option<char> {
    let glyph = match c.to_ascii_lowercase() {
        'a' => 'ᔑ',
        'b' => 'ʖ',
        'c' => 'ᓵ',
        'd' => '↸',
        'e' => 'ᒷ',
        'f' => '⎓',
        'g' => '⊣',
        'h' => '⍑',
        'i' => '╎',
        'j' => '⋮',
        'k' => 'ꖌ',
        'l' => 'ꖎ',
        'm' => 'ᒲ',
        'n' => 'リ',
        'o' => '𝙹',
        'q' => 'ᑑ',
        'r' => '∷',
        's' => 'ᓭ',
        't' => 'ℸ',
        'u' => '⚍',
        'v' => '⍊',
        'w' => '∴',
        'z' => 'Λ',
        _ => return None,
    };
    Some(glyph)
}

/// Leetspeak digit for a lower-cased character.
pub fn leet_char(c: char) -> Option<char> {
    let digit = match c {
        'a' => '4',
        'e' => '3',
        'l' => '1',
        'o' => '0',
        't' => '7',
        _ => return None,
    };
    Some(digit)
}

/// Morse token for an upper-cased character.
///
/// Note: `,` is not in this table. Unmapped characters produce an empty
/// token, which the morse transform still joins with spaces.
pub fn morse_token(c: char) -> Option<&'static str> {
    let token = match c {
        'A' => ".-",
        'B' => "-...",
        'C' => "-.-.",
        'D' => "-..",
        'E' => ".",
        'F' => "..-.",
        'G' => "--.",
        'H' => "....",
        'I' => "..",
        'J' => ".---",
        'K' => "-.-",
        'L' => ".-..",
        'M' => "--",
        'N' => "-.",
        'O' => "---",
        'P' => ".--.",
        'Q' => "--.-",
        'R' => ".-.",
        'S' => "...",
        'T' => "-",
        'U' => "..-",
        'V' => "...-",
        'W' => ".--",
        'X' => "-..-",
        'Y' => "-.--",
        'Z' => "--..",
        '1' => ".----",
        '2' => "..---",
        '3' => "...--",
        '4' => "....-",
        '5' => ".....",
        '6' => "-....",
        '7' => "--...",
        '8' => "---..",
        '9' => "----.",
        '0' => "-----",
        '.' => ".-.-.-",
        '?' => "..--..",
        '/' => "-..-.",
        '-' => "-....-",
        '(' => "-.--.",
        ')' => "-.--.-",
        _ => return None,
    };
    Some(token)
}

/// Braille cell(s) for a single character, case-insensitive on letters.
///
/// Digits are two-glyph sequences: the number sign followed by the
/// matching letter cell.
pub fn braille_cell(c: char) -> Option<&'static str> {
    let cell = match c.to_ascii_lowercase() {
        'a' => "⠁",
        'b' => "⠃",
        'c' => "⠉",
        'd' => "⠙",
        'e' => "⠑",
        'f' => "⠋",
        'g' => "⠛",
        'h' => "⠓",
        'i' => "⠊",
        'j' => "⠚",
        'k' => "⠅",
        'l' => "⠇",
        'm' => "⠍",
        'n' => "⠝",
        'o' => "⠕",
        'p' => "⠏",
        'q' => "⠟",
        'r' => "⠗",
        's' => "⠎",
        't' => "⠞",
        'u' => "⠥",
        'v' => "⠧",
        'w' => "⠺",
        'x' => "⠭",
        'y' => "⠽",
        'z' => "⠵",
        '1' => "⠼⠁",
        '2' => "⠼⠃",
        '3' => "⠼⠉",
        '4' => "⠼⠙",
        '5' => "⠼⠑",
        '6' => "⠼⠋",
        '7' => "⠼⠛",
        '8' => "⠼⠓",
        '9' => "⠼⠊",
        '0' => "⠼⠚",
        ',' => "⠂",
        ';' => "⠆",
        ':' => "⠒",
        '.' => "⠲",
        '!' => "⠖",
        '?' => "⠦",
        '\'' => "⠄",
        '-' => "⠤",
        _ => return None,
    };
    Some(cell)
}

/// Combining marks the zalgo transform samples from.
///
/// Duplicates are kept as-is: they skew the sampling weights exactly the
/// way the original glyph list did.
pub const ZALGO_MARKS: [char; 50] = [
    '\u{030d}', '\u{030e}', '\u{0304}', '\u{0305}', '\u{033f}', '\u{0311}',
    '\u{0306}', '\u{0310}', '\u{0352}', '\u{0357}', '\u{0351}', '\u{0307}',
    '\u{0308}', '\u{030a}', '\u{0342}', '\u{0313}', '\u{0308}', '\u{034a}',
    '\u{034b}', '\u{034c}', '\u{0303}', '\u{0302}', '\u{030c}', '\u{0350}',
    '\u{0300}', '\u{0301}', '\u{030b}', '\u{030f}', '\u{0312}', '\u{0313}',
    '\u{0314}', '\u{033d}', '\u{0309}', '\u{0363}', '\u{0364}', '\u{0365}',
    '\u{0366}', '\u{0367}', '\u{0368}', '\u{0369}', '\u{036a}', '\u{036b}',
    '\u{036c}', '\u{036d}', '\u{036e}', '\u{036f}', '\u{033e}', '\u{035b}',
    '\u{0346}', '\u{031a}',
];

/// Word-to-emoji pairs in their original literal order.
///
/// `hello` and `fire` appear twice; building the map keeps the
/// last-written value, matching the source dictionary literal.
const EMOTICON_PAIRS: [(&str, &str); 22] = [
    ("hello", "🙋"),
    ("world", "🌍"),
    ("fire", "🎆"),
    ("love", "❤️"),
    ("cat", "🐱"),
    ("dog", "🐶"),
    ("sun", "☀️"),
    ("moon", "🌙"),
    ("star", "⭐"),
    ("pizza", "🍕"),
    ("music", "🎵"),
    ("happy", "😊"),
    ("sad", "😢"),
    ("cool", "😎"),
    ("heart", "💖"),
    ("hello", "👋"),
    ("tree", "🌳"),
    ("car", "🚗"),
    ("rain", "🌧️"),
    ("fire", "🔥"),
    ("coffee", "☕"),
    ("book", "📚"),
];

/// Emoji lookup table, keyed by lower-cased word.
pub static EMOTICONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EMOTICON_PAIRS.iter().copied().collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_covers_both_cases() {
        assert_eq!(flip_char('a'), 'ɐ');
        assert_eq!(flip_char('A'), '∀');
        assert_eq!(flip_char('W'), 'M');
        assert_eq!(flip_char(' '), ' ');
    }

    #[test]
    fn test_flip_is_offset_from_x_onward() {
        assert_eq!(flip_char('X'), '⅄');
        assert_eq!(flip_char('Y'), 'Z');
        assert_eq!(flip_char('Z'), '⇂');
        assert_eq!(flip_char('1'), 'ᘕ');
        assert_eq!(flip_char('0'), '·');
        assert_eq!(flip_char('.'), 'ˋ');
        assert_eq!(flip_char('!'), '¿');
        assert_eq!(flip_char('?'), '\\');
        // brackets still mirror each other despite the offset
        assert_eq!(flip_char('('), ')');
        assert_eq!(flip_char('}'), '{');
    }

    #[test]
    fn test_enchant_excludes_special_letters() {
        assert!(enchant_char('p').is_none());
        assert!(enchant_char('x').is_none());
        assert!(enchant_char('y').is_none());
        assert_eq!(enchant_char('a'), Some('ᔑ'));
        assert_eq!(enchant_char('A'), Some('ᔑ'));
    }

    #[test]
    fn test_morse_comma_is_unmapped() {
        assert!(morse_token(',').is_none());
        assert_eq!(morse_token('S'), Some("..."));
    }

    #[test]
    fn test_braille_digits_carry_number_sign() {
        assert_eq!(braille_cell('1'), Some("⠼⠁"));
        assert_eq!(braille_cell('B'), Some("⠃"));
    }

    #[test]
    fn test_zalgo_marks_use_comma_above_not_koronis() {
        // U+0313 twice, never its canonical twin U+0343
        assert_eq!(ZALGO_MARKS[15], '\u{0313}');
        assert_eq!(ZALGO_MARKS[29], '\u{0313}');
        assert!(!ZALGO_MARKS.contains(&'\u{0343}'));
    }

    #[test]
    fn test_emoticons_last_write_wins() {
        assert_eq!(EMOTICONS.get("hello"), Some(&"👋"));
        assert_eq!(EMOTICONS.get("fire"), Some(&"🔥"));
        assert_eq!(EMOTICONS.get("world"), Some(&"🌍"));
    }
}
