//! Deterministic random number generation for card drawing.
//!
//! The engine never touches a global RNG. Callers hand [`generate_card`] a
//! [`CardRng`], so the same seed always yields the same card - which is what
//! makes generation testable.
//!
//! [`generate_card`]: crate::engine::CardEngine::generate_card
//!
//! ```
//! use bingo_card_engine::CardRng;
//!
//! let mut rng = CardRng::new(42);
//! let draw = rng.sample_distinct(1..=15, 5);
//! assert_eq!(draw.len(), 5);
//!
//! // Same seed, same draw
//! let mut rng2 = CardRng::new(42);
//! assert_eq!(draw, rng2.sample_distinct(1..=15, 5));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG used for drawing card numbers.
///
/// Backed by ChaCha8 for speed with high-quality randomness. Not intended to
/// be cryptographically secure in this role; uniformity is the only
/// requirement.
#[derive(Clone, Debug)]
pub struct CardRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl CardRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// For callers that just want a fresh card and don't care about
    /// reproducibility.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence, so one
    /// session RNG can hand every card its own stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Draw `count` distinct values uniformly from an inclusive range.
    ///
    /// Uniform sampling without replacement via a partial Fisher-Yates
    /// shuffle over the materialized range: only the first `count` positions
    /// are shuffled, and the draw order is the returned order.
    ///
    /// # Panics
    ///
    /// Panics if the range holds fewer than `count` values. Engine column
    /// ranges always hold at least 10, so generation never hits this.
    #[must_use]
    pub fn sample_distinct(&mut self, range: std::ops::RangeInclusive<u32>, count: usize) -> Vec<u32> {
        let mut pool: Vec<u32> = range.collect();
        assert!(
            count <= pool.len(),
            "cannot draw {count} distinct values from a pool of {}",
            pool.len()
        );

        for i in 0..count {
            let j = self.inner.gen_range(i..pool.len());
            pool.swap(i, j);
        }
        pool.truncate(count);
        pool
    }
}
