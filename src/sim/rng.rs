//! Seeded linear-congruential random number generator
//!
//! A pure value: drawing derives a new generator instead of mutating in
//! place, so the same seed always reproduces the same sequence. The alien
//! fire rule builds a fresh generator from the current simulation time each
//! time it needs a draw, which makes "which alien shoots" a deterministic
//! function of time rather than of call order.

/// LCG using GCC's constants
const M: u64 = 1 << 31;
const A: u64 = 1103515245;
const C: u64 = 12345;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed % M }
    }

    /// Next integer in [0, 2^31)
    pub fn int(&self) -> u64 {
        (A * self.state + C) % M
    }

    /// Next value mapped into [0, 1]
    pub fn float(&self) -> f64 {
        self.int() as f64 / (M - 1) as f64
    }

    /// Derive the generator for the draw after this one
    #[must_use]
    pub fn next(&self) -> Self {
        Self { state: self.int() }
    }
}
