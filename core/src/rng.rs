//! Deterministic random number generation for the synthetic feed.
//!
//! RULE: Nothing in the core calls a platform RNG. The feed draws from
//! a single Pcg64Mcg stream derived from one master seed, so a run is
//! fully reproducible from (seed, tick count).

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub struct FeedRng {
    inner: Pcg64Mcg,
}

impl FeedRng {
    pub fn new(master_seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(master_seed),
        }
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Uniform signed delta in [-magnitude, magnitude], inclusive.
    pub fn signed_delta(&mut self, magnitude: i64) -> i64 {
        assert!(magnitude >= 0, "magnitude must be >= 0");
        let span = (2 * magnitude + 1) as u64;
        self.next_u64_below(span) as i64 - magnitude
    }
}
