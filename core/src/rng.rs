//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through a `RandomSource` handed in by the caller.
//!
//! Production runs derive one stream per concern from a single master seed
//! (master_seed XOR slot multiplier), so that:
//!   - Changing how many draws one concern makes never shifts another's stream.
//!   - Identical seeds reproduce identical output.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Source of randomness for every draw the generator makes.
///
/// Only `next_u64` is required; tests implement it with a scripted sequence.
pub trait RandomSource {
    /// Draw a raw u64 (full range).
    fn next_u64(&mut self) -> u64;

    /// Roll a float in [0.0, 1.0).
    fn next_f64(&mut self) -> f64 {
        let bits = self.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    fn next_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Roll a u32 in [lo, hi].
    fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        assert!(lo <= hi, "lo must be <= hi");
        let span = u64::from(hi - lo) + 1;
        lo + self.next_below(span) as u32
    }
}

/// A named PCG stream.
pub struct SeededRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl RandomSource for SeededRng {
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }
}

/// Derives the per-concern streams for a single run.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_slot(&self, slot: StreamSlot) -> SeededRng {
        let derived_seed = self.master_seed ^ (slot as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        SeededRng::new(derived_seed).with_name(slot.name())
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries, only append.
/// Reordering changes every stream's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Availability = 0,
    Identity = 1,
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Availability => "availability",
            Self::Identity => "identity",
        }
    }
}
