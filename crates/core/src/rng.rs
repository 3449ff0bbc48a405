//! RNG module - deterministic color picks for the control layer.
//!
//! A small LCG keeps "random" background colors reproducible in tests.

use crate::types::Rgb;

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

    /// Generate a color from the high bytes of the next value.
    ///
    /// The low byte of an LCG cycles quickly, so it is skipped.
    pub fn next_rgb(&mut self) -> Rgb {
        let v = self.next_u32();
        Rgb::new((v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8)
    }
}
