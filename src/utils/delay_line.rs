//! Heap-backed delay line with fractional read.
//!
//! The buffer is sized once at init time for the longest delay the owner can
//! ever request (lowest supported fundamental) and never reallocated while
//! audio is running.

use alloc::vec;
use alloc::vec::Vec;

#[derive(Debug, Default, Clone)]
pub struct DelayLine {
    line: Vec<f32>,
    write_ptr: usize,
}

impl DelayLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the buffer. Configuration time only.
    pub fn init(&mut self, max_delay: usize) {
        self.line = vec![0.0; max_delay.max(2)];
        self.write_ptr = 0;
    }

    pub fn reset(&mut self) {
        self.line.fill(0.0);
        self.write_ptr = 0;
    }

    pub fn max_delay(&self) -> usize {
        self.line.len()
    }

    #[inline]
    pub fn write(&mut self, sample: f32) {
        let len = self.line.len();
        self.line[self.write_ptr] = sample;
        self.write_ptr = (self.write_ptr + len - 1) % len;
    }

    #[inline]
    pub fn read(&self, delay: usize) -> f32 {
        self.line[(self.write_ptr + delay) % self.line.len()]
    }

    /// Read with linear interpolation between the two neighbouring taps.
    #[inline]
    pub fn read_frac(&self, delay: f32) -> f32 {
        let delay_integral = delay as usize;
        let delay_fractional = delay - (delay_integral as f32);
        let len = self.line.len();
        let a = self.line[(self.write_ptr + delay_integral) % len];
        let b = self.line[(self.write_ptr + delay_integral + 1) % len];

        a + (b - a) * delay_fractional
    }
}
