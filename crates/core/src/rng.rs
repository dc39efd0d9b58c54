//! RNG module - seeded pseudo-random source for dealing
//!
//! Every game owns its own [`SimpleRng`], seeded from the game number, so the
//! same number always reproduces the same backdrop and the same shuffle. There
//! is no process-wide generator.

use tui_mahjong_types::GAME_NUMBER_MODULUS;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    ///
    /// Zero is a valid seed: the increment keeps the sequence moving.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create the RNG for a game number
    ///
    /// Numbers are reduced to six digits first, so `1_000_123` and `123` deal alike.
    pub fn for_game(game_number: u32) -> Self {
        Self::new(game_number % GAME_NUMBER_MODULUS)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// `max` of zero yields zero instead of panicking.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Shuffle a slice in place using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_has_its_own_sequence() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), 1013904223);
        assert_eq!(one.next_u32(), 1015568748);
    }

    #[test]
    fn test_for_game_reduces_to_six_digits() {
        let mut a = SimpleRng::for_game(123);
        let mut b = SimpleRng::for_game(1_000_123);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_next_range_zero_max() {
        let mut rng = SimpleRng::new(7);
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = SimpleRng::new(99);
        let mut values: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut values);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
        assert_ne!(values, sorted, "50 elements should not survive a shuffle in order");
    }
}
