//! Fast seedable pseudo random number generator.
//!
//! Each voice owns its own generator so a render is bit-for-bit reproducible
//! for a given seed, independent of how many voices are processed.

// Based on MIT-licensed code (c) 2012 by Olivier Gillet (ol.gillet@gmail.com)

#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(0x21)
    }
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn seed(&mut self, seed: u32) {
        self.state = seed;
    }

    #[inline]
    pub fn get_word(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform float in `[0, 1)`.
    #[inline]
    pub fn get_float(&mut self) -> f32 {
        self.get_word() as f32 / 4294967296.0
    }

    /// Uniform float in `[-1, 1)`.
    #[inline]
    pub fn get_bipolar(&mut self) -> f32 {
        2.0 * self.get_float() - 1.0
    }
}
