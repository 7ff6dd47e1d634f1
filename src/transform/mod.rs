//! Transform registry
//!
//! A fixed mapping from operation names to the functions implementing
//! them. Every operation is pure and deterministic except `scramble`
//! and `zalgo`, which draw from an injected random source.

pub mod analysis;
pub mod art;
pub mod basic;
pub mod encode;
pub mod random;
pub mod tables;

use rand::Rng;

use crate::utils::{AppResult, TransformError};
use analysis::TextStats;

/// The closed set of named text operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Reverse,
    Flip,
    Enchant,
    Case,
    Leetspeak,
    Scramble,
    Piglatin,
    Caesar,
    Morse,
    Binary,
    Braille,
    Shadow,
    Zalgo,
    Emoticons,
    Ascii,
    Border,
    NerdMode,
}

/// All operations, in registry order.
pub const ALL_OPERATIONS: [Operation; 17] = [
    Operation::Reverse,
    Operation::Flip,
    Operation::Enchant,
    Operation::Case,
    Operation::Leetspeak,
    Operation::Scramble,
    Operation::Piglatin,
    Operation::Caesar,
    Operation::Morse,
    Operation::Binary,
    Operation::Braille,
    Operation::Shadow,
    Operation::Zalgo,
    Operation::Emoticons,
    Operation::Ascii,
    Operation::Border,
    Operation::NerdMode,
];

/// Operation-specific parameters, with the same defaults the CLI uses.
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Case target for `case`: "upper" or "lower".
    pub case_mode: String,
    /// Signed shift for `caesar`; negative values wrap.
    pub shift: i32,
    /// Indent width for `shadow`.
    pub shadow_offset: usize,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            case_mode: "upper".to_string(),
            shift: 3,
            shadow_offset: 1,
        }
    }
}

/// Outcome of a transform: plain text or structured analysis.
///
/// Image-producing operations live outside the registry and yield file
/// paths instead (see the `codes` module).
#[derive(Debug, Clone)]
pub enum TransformOutcome {
    Text(String),
    Analysis(TextStats),
}

impl TransformOutcome {
    /// The text payload, if this outcome carries one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TransformOutcome::Text(text) => Some(text),
            TransformOutcome::Analysis(_) => None,
        }
    }
}

impl Operation {
    /// Registry name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Reverse => "reverse",
            Operation::Flip => "flip",
            Operation::Enchant => "enchant",
            Operation::Case => "case",
            Operation::Leetspeak => "leetspeak",
            Operation::Scramble => "scramble",
            Operation::Piglatin => "piglatin",
            Operation::Caesar => "caesar",
            Operation::Morse => "morse",
            Operation::Binary => "binary",
            Operation::Braille => "braille",
            Operation::Shadow => "shadow",
            Operation::Zalgo => "zalgo",
            Operation::Emoticons => "emoticons",
            Operation::Ascii => "ascii",
            Operation::Border => "border",
            Operation::NerdMode => "nerd_mode",
        }
    }

    /// Look an operation up by its registry name.
    pub fn from_name(name: &str) -> AppResult<Self> {
        ALL_OPERATIONS
            .iter()
            .find(|op| op.name() == name)
            .copied()
            .ok_or_else(|| TransformError::UnknownOperation(name.to_string()))
    }

    /// Apply this operation to `text`.
    ///
    /// The random source is only consumed by `scramble` and `zalgo`;
    /// tests pass a seeded generator.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        text: &str,
        options: &TransformOptions,
        rng: &mut R,
    ) -> AppResult<TransformOutcome> {
        let result = match self {
            Operation::Reverse => basic::reverse(text),
            Operation::Flip => basic::flip(text),
            Operation::Enchant => basic::enchant(text),
            Operation::Case => basic::case_switch(text, &options.case_mode)?,
            Operation::Leetspeak => basic::leetspeak(text),
            Operation::Scramble => random::scramble(text, rng),
            Operation::Piglatin => basic::piglatin(text),
            Operation::Caesar => basic::caesar(text, options.shift),
            Operation::Morse => encode::morse(text),
            Operation::Binary => encode::binary(text),
            Operation::Braille => encode::braille(text),
            Operation::Shadow => basic::shadow(text, options.shadow_offset),
            Operation::Zalgo => random::zalgo(text, rng),
            Operation::Emoticons => basic::emoticons(text),
            Operation::Ascii => art::ascii_art(text)?,
            Operation::Border => art::bordered_art(text)?,
            Operation::NerdMode => {
                return Ok(TransformOutcome::Analysis(analysis::analyze(text)));
            }
        };
        Ok(TransformOutcome::Text(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_from_name_round_trips() {
        for op in ALL_OPERATIONS {
            assert_eq!(Operation::from_name(op.name()).unwrap(), op);
        }
    }

    #[test]
    fn test_from_name_rejects_unknown_operation() {
        assert!(matches!(
            Operation::from_name("sideways"),
            Err(TransformError::UnknownOperation(_))
        ));
    }

    #[test]
    fn test_apply_dispatches_by_operation() {
        let mut rng = StdRng::seed_from_u64(1);
        let options = TransformOptions::default();

        let out = Operation::Reverse
            .apply("abc", &options, &mut rng)
            .unwrap();
        assert_eq!(out.as_text(), Some("cba"));

        let out = Operation::Case.apply("abc", &options, &mut rng).unwrap();
        assert_eq!(out.as_text(), Some("ABC"));

        let out = Operation::NerdMode
            .apply("a b", &options, &mut rng)
            .unwrap();
        match out {
            TransformOutcome::Analysis(stats) => assert_eq!(stats.word_count, 2),
            TransformOutcome::Text(_) => panic!("expected analysis outcome"),
        }
    }

    #[test]
    fn test_apply_propagates_invalid_case_mode() {
        let mut rng = StdRng::seed_from_u64(1);
        let options = TransformOptions {
            case_mode: "sideways".to_string(),
            ..TransformOptions::default()
        };
        assert!(matches!(
            Operation::Case.apply("x", &options, &mut rng),
            Err(TransformError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_input_never_errors() {
        let mut rng = StdRng::seed_from_u64(1);
        let options = TransformOptions::default();
        for op in ALL_OPERATIONS {
            assert!(op.apply("", &options, &mut rng).is_ok(), "{:?}", op);
        }
    }
}
