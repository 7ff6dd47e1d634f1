//! Randomized transforms
//!
//! Both operations take the random source as an argument so callers can
//! inject a seeded generator; production code passes `rand::rng()`.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::transform::tables::ZALGO_MARKS;

/// Uniformly random permutation of the input's characters.
pub fn scramble<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    chars.shuffle(rng);
    chars.into_iter().collect()
}

/// Insert a random combining mark before every character.
pub fn zalgo<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        if let Some(mark) = ZALGO_MARKS.choose(rng) {
            out.push(*mark);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scramble_is_a_permutation() {
        let text = "the quick brown fox";
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let scrambled = scramble(text, &mut rng);
            assert_eq!(scrambled.chars().count(), text.chars().count());

            let mut expected: Vec<char> = text.chars().collect();
            let mut actual: Vec<char> = scrambled.chars().collect();
            expected.sort_unstable();
            actual.sort_unstable();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_scramble_empty_input() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(scramble("", &mut rng), "");
    }

    #[test]
    fn test_zalgo_pairs_every_char_with_a_mark() {
        let text = "héllo";
        let mut rng = StdRng::seed_from_u64(7);
        let cursed = zalgo(text, &mut rng);
        assert_eq!(cursed.chars().count(), text.chars().count() * 2);

        // every even-indexed char is a combining mark, odd-indexed the base
        let chars: Vec<char> = cursed.chars().collect();
        for (i, pair) in chars.chunks(2).enumerate() {
            assert!(ZALGO_MARKS.contains(&pair[0]));
            assert_eq!(pair[1], text.chars().nth(i).unwrap());
        }
    }

    #[test]
    fn test_zalgo_is_seed_deterministic() {
        let a = zalgo("abc", &mut StdRng::seed_from_u64(42));
        let b = zalgo("abc", &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
