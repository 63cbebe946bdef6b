//! RNG module - injectable randomness for spawning
//!
//! Every random decision of a session (palette draw, ball colors, target cells,
//! fallback cells) goes through [`RandomSource`], so a seeded generator replays
//! a session exactly. [`SimpleRng`] is the default source.

/// Source of uniformly distributed `u32` values.
///
/// Only `next_u32` is required; the sampling helpers are built on top of it.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Random value in range `[0, max)`. `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Pick one element uniformly. `None` for an empty slice.
    fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let i = self.next_range(items.len() as u32) as usize;
        Some(items[i])
    }

    /// Draw `n` distinct elements uniformly without replacement, in draw order.
    ///
    /// Returns `None` when `items` holds fewer than `n` elements.
    fn sample<T: Copy>(&mut self, items: &[T], n: usize) -> Option<Vec<T>>
    where
        Self: Sized,
    {
        if items.len() < n {
            return None;
        }
        // Partial Fisher-Yates over a scratch copy.
        let mut pool = items.to_vec();
        for i in 0..n {
            let j = i + self.next_range((pool.len() - i) as u32) as usize;
            pool.swap(i, j);
        }
        pool.truncate(n);
        Some(pool)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state (usable as a seed to replay from here).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG cycle quickly; hand out the high half.
        self.state.rotate_left(16)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of values, then repeats the last one. Handy for tests
/// that need to force a particular draw.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let Some(&last) = self.values.last() else {
            return 0;
        };
        let v = self.values.get(self.cursor).copied().unwrap_or(last);
        self.cursor += 1;
        v
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
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(3) < 3);
        }
    }

    #[test]
    fn test_sample_is_distinct() {
        let mut rng = SimpleRng::new(99);
        let items: Vec<u32> = (0..20).collect();
        let picked = rng.sample(&items, 20).unwrap();

        let mut sorted = picked.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, items);
    }

    #[test]
    fn test_sample_too_few_items() {
        let mut rng = SimpleRng::new(99);
        assert_eq!(rng.sample(&[1u8, 2], 3), None);
        assert_eq!(rng.sample(&[1u8, 2], 0), Some(Vec::new()));
    }

    #[test]
    fn test_pick_empty() {
        let mut rng = SimpleRng::new(5);
        let empty: [u8; 0] = [];
        assert_eq!(rng.pick(&empty), None);
        assert_eq!(rng.pick(&[42u8]), Some(42));
    }

    #[test]
    fn test_scripted_rng_repeats_last() {
        let mut rng = ScriptedRng::new(vec![4, 9]);
        assert_eq!(rng.next_u32(), 4);
        assert_eq!(rng.next_u32(), 9);
        assert_eq!(rng.next_u32(), 9);
        assert_eq!(rng.next_range(5), 4);
    }
}
