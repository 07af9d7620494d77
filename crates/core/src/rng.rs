//! RNG module - seedable tile generation
//!
//! Refill draws come from a [`TileSource`]. The default source is a small LCG so
//! a whole game is reproducible from its seed; tests plug in scripted sources.

use crate::types::Tile;

/// Supplier of fresh tiles for the initial fill and for refills.
pub trait TileSource {
    /// Draw a uniformly random animal among the first `kinds` animal kinds.
    ///
    /// `kinds` is always in `1..=ANIMAL_TYPES`.
    fn next_tile(&mut self, kinds: u8) -> Tile;
}

impl<S: TileSource + ?Sized> TileSource for &mut S {
    fn next_tile(&mut self, kinds: u8) -> Tile {
        (**self).next_tile(kinds)
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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of a power-of-two LCG cycle with a short period.
        (self.next_u32() >> 16) % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TileSource for SimpleRng {
    fn next_tile(&mut self, kinds: u8) -> Tile {
        let kinds = kinds.clamp(1, Tile::ANIMALS.len() as u8);
        Tile::ANIMALS[self.next_range(kinds as u32) as usize]
    }
}
