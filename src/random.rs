//! # Random System
//!
//! Every random decision in generation flows through the [`RandomSource`]
//! trait: a uniform integer in a half-open range. The concrete source is
//! injected at construction, never reached for globally, so swapping OS
//! entropy for a seeded or fixed stream reproduces an entire dungeon
//! bit-for-bit.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A uniform integer source over half-open ranges.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `[lower, upper)`.
    fn next_in(&mut self, lower: usize, upper: usize) -> usize;
}

/// A source backed by OS entropy; every dungeon comes out different.
#[derive(Debug)]
pub struct EntropyRandom {
    rng: StdRng,
}

impl EntropyRandom {
    /// Creates a source seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn next_in(&mut self, lower: usize, upper: usize) -> usize {
        self.rng.gen_range(lower..upper)
    }
}

/// A source with a fixed seed; the same seed replays the same dungeon.
#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Creates a source that replays the sequence for `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in(&mut self, lower: usize, upper: usize) -> usize {
        self.rng.gen_range(lower..upper)
    }
}

/// A source that always answers with the lower bound.
///
/// Useful for fixture layouts: generation consumes candidates in their
/// enumeration order, which the golden regression tests rely on.
#[derive(Debug, Default)]
pub struct MinRandom;

impl RandomSource for MinRandom {
    fn next_in(&mut self, lower: usize, _upper: usize) -> usize {
        lower
    }
}

/// Picks a source for the driver: a fixed layout, a replayable seed, or OS
/// entropy, in that order of preference.
pub fn source_for(predictable: bool, seed: Option<u64>) -> Box<dyn RandomSource> {
    if predictable {
        Box::new(MinRandom)
    } else if let Some(seed) = seed {
        Box::new(SeededRandom::new(seed))
    } else {
        Box::new(EntropyRandom::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_source_respects_bounds() {
        let mut rng = EntropyRandom::new();
        for _ in 0..100 {
            let value = rng.next_in(3, 10);
            assert!((3..10).contains(&value));
        }
    }

    #[test]
    fn test_single_value_range() {
        let mut rng = EntropyRandom::new();
        assert_eq!(rng.next_in(5, 6), 5);
    }

    #[test]
    fn test_seeded_source_replays() {
        let mut first = SeededRandom::new(77);
        let mut second = SeededRandom::new(77);
        for _ in 0..50 {
            assert_eq!(first.next_in(0, 1000), second.next_in(0, 1000));
        }
    }

    #[test]
    fn test_seeds_diverge() {
        let mut first = SeededRandom::new(1);
        let mut second = SeededRandom::new(2);
        let same = (0..50).filter(|_| first.next_in(0, 1000) == second.next_in(0, 1000));
        assert!(same.count() < 50);
    }

    #[test]
    fn test_min_source_returns_lower_bound() {
        let mut rng = MinRandom;
        assert_eq!(rng.next_in(0, 4), 0);
        assert_eq!(rng.next_in(1, 4), 1);
        assert_eq!(rng.next_in(9, 100), 9);
    }
}
