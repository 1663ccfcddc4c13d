//! RNG module - deterministic random source for food placement
//!
//! A small LCG keeps the core free of I/O and makes every game reproducible
//! from its seed, which the tests and benches rely on.

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Multiply-shift instead of `%`: the low bits of a power-of-two LCG
    /// cycle with short periods, the high bits do not.
    pub fn next_range(&mut self, max: u32) -> u32 {
        assert!(max > 0, "next_range called with an empty range");
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (seed for a follow-up game)
    pub fn state(&self) -> u32 {
        self.state
    }
}
