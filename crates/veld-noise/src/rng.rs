//! Deterministic seeded random sequence and seed derivation.
//!
//! The generator is a small linear congruential generator chosen for exact
//! reproducibility: the same i32 seed yields the same infinite sequence on
//! every platform, which in turn fixes the permutation tables and therefore
//! the entire world.

const LCG_MULTIPLIER: i64 = 9301;
const LCG_INCREMENT: i64 = 49297;
const LCG_MODULUS: i64 = 233280;

/// Deterministic pseudo-random sequence from an i32 seed.
///
/// `next()` returns values in `[0, 1)`. State advances as
/// `state = (state * 9301 + 49297) mod 233280`; the modulus is Euclidean so
/// the output range holds for negative seeds as well.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    state: i64,
}

impl SeededRandom {
    /// Create a generator with the given seed.
    pub fn new(seed: i32) -> Self {
        Self {
            state: i64::from(seed),
        }
    }

    /// Advance the state and return the next value in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT).rem_euclid(LCG_MODULUS);
        self.state as f64 / LCG_MODULUS as f64
    }
}

/// Reduce arbitrary seed text to an i32 via a rolling hash over UTF-16 code
/// units: `hash = hash * 31 + code_unit`, with wrapping arithmetic.
///
/// The empty string hashes to 0, but callers treat empty text as "no seed"
/// before ever reaching this function, so an explicit `"0"` (which hashes to
/// 48) can never collide with the unseeded case.
pub fn seed_from_text(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sequence_from_seed_42() {
        let mut rng = SeededRandom::new(42);
        // state: 42 -> 206659 -> 206659*9301+49297 mod 233280
        assert_eq!(rng.next(), 206659.0 / 233280.0);
        let second = rng.next();
        assert!((0.0..1.0).contains(&second));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRandom::new(1234);
        let mut b = SeededRandom::new(1234);
        for _ in 0..1000 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededRandom::new(1);
        let mut b = SeededRandom::new(2);
        let diverged = (0..16).any(|_| a.next() != b.next());
        assert!(diverged, "seeds 1 and 2 should produce different sequences");
    }

    #[test]
    fn output_stays_in_unit_interval() {
        for seed in [0, 1, -1, 42, i32::MAX, i32::MIN] {
            let mut rng = SeededRandom::new(seed);
            for _ in 0..10_000 {
                let v = rng.next();
                assert!((0.0..1.0).contains(&v), "seed {seed} produced {v}");
            }
        }
    }

    #[test]
    fn text_hash_known_values() {
        assert_eq!(seed_from_text("a"), 97);
        assert_eq!(seed_from_text("ab"), 97 * 31 + 98);
        assert_eq!(seed_from_text("42"), 52 * 31 + 50);
        assert_eq!(seed_from_text("0"), 48);
        assert_eq!(seed_from_text(""), 0);
    }

    #[test]
    fn text_hash_wraps_instead_of_overflowing() {
        let long = "the quick brown fox jumps over the lazy dog".repeat(8);
        assert_eq!(seed_from_text(&long), seed_from_text(&long));
    }
}
