//! Shuffle selection
//!
//! Shuffle does not permute the queue. Each "next" draws a uniformly random
//! index instead, so the current track may be drawn again.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Random source used for shuffle selection
pub type ShuffleRng = Box<dyn RngCore + Send>;

/// Build the shuffle random source
///
/// A fixed seed makes shuffle sequences reproducible (tests, demos).
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Pick an index uniformly from `[0, len)`
///
/// Returns `None` for an empty range.
pub fn pick_index(rng: &mut dyn RngCore, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rng.gen_range(0..len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn empty_range_has_no_pick() {
        let mut rng = rng_from_seed(Some(1));
        assert_eq!(pick_index(&mut rng, 0), None);
    }

    #[test]
    fn single_element_always_zero() {
        let mut rng = rng_from_seed(Some(7));
        for _ in 0..20 {
            assert_eq!(pick_index(&mut rng, 1), Some(0));
        }
    }

    #[test]
    fn picks_stay_in_range_and_cover_it() {
        let mut rng = rng_from_seed(Some(42));
        let mut seen = HashSet::new();

        for _ in 0..500 {
            let index = pick_index(&mut rng, 5).unwrap();
            assert!(index < 5);
            seen.insert(index);
        }

        // 500 uniform draws over 5 slots hit every slot
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = rng_from_seed(Some(99));
        let mut b = rng_from_seed(Some(99));

        let seq_a: Vec<_> = (0..20).map(|_| pick_index(&mut a, 10)).collect();
        let seq_b: Vec<_> = (0..20).map(|_| pick_index(&mut b, 10)).collect();

        assert_eq!(seq_a, seq_b);
    }
}
