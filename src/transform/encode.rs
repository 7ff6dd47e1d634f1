//! Encoding transforms: morse, binary and braille

use crate::transform::tables;

/// Encode each character as a morse token, joined by single spaces.
///
/// Characters missing from the table contribute an empty token but
/// still get a separating space; that collapse is part of the
/// documented behavior and must not be "fixed".
pub fn morse(text: &str) -> String {
    text.chars()
        .map(|c| tables::morse_token(c.to_ascii_uppercase()).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render each character's code point as zero-padded binary.
///
/// The field is 8 bits wide; code points above 255 overflow into a
/// wider field rather than being clamped.
pub fn binary(text: &str) -> String {
    text.chars()
        .map(|c| format!("{:08b}", u32::from(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Translate to braille cells, case-insensitive on letters.
///
/// Unmapped characters (including spaces) pass through unchanged.
pub fn braille(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match tables::braille_cell(c) {
            Some(cell) => out.push_str(cell),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morse_sos() {
        assert_eq!(morse("SOS"), "... --- ...");
        assert_eq!(morse("sos"), "... --- ...");
    }

    #[test]
    fn test_morse_unmapped_chars_collapse_to_empty_tokens() {
        // space is unmapped: "a b" => ".-" + "" + "-..." joined by spaces
        assert_eq!(morse("a b"), ".-  -...");
        // comma is absent from the table
        assert_eq!(morse("e,e"), ".  .");
    }

    #[test]
    fn test_binary_token_count_matches_char_count() {
        for text in ["hello", "a b c", "", "héllo", "🦀"] {
            let encoded = binary(text);
            let tokens = if encoded.is_empty() {
                0
            } else {
                encoded.split(' ').count()
            };
            assert_eq!(tokens, text.chars().count());
        }
    }

    #[test]
    fn test_binary_ascii() {
        assert_eq!(binary("AB"), "01000001 01000010");
    }

    #[test]
    fn test_binary_overflows_beyond_eight_bits() {
        // é is U+00E9 => exactly 8 bits; 中 is U+4E2D => wider field
        assert_eq!(binary("é"), "11101001");
        assert_eq!(binary("中"), "100111000101101");
    }

    #[test]
    fn test_braille() {
        assert_eq!(braille("ab"), "⠁⠃");
        assert_eq!(braille("AB"), "⠁⠃");
        assert_eq!(braille("a1"), "⠁⠼⠁");
        assert_eq!(braille("a b"), "⠁ ⠃");
        assert_eq!(braille("a@"), "⠁@");
    }
}
