//! Zero-delay-feedback state-variable filter and DC blocker.

// Based on MIT-licensed code (c) 2014 by Olivier Gillet (ol.gillet@gmail.com)

#[allow(unused_imports)]
use num_traits::float::Float;

use core::f32::consts::PI;

#[derive(Debug, Clone, Copy)]
pub enum FilterMode {
    LowPass,
    BandPass,
    HighPass,
}

#[derive(Debug, Default, Clone)]
pub struct DcBlocker {
    pole: f32,
    x: f32,
    y: f32,
}

impl DcBlocker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, pole: f32) {
        self.x = 0.0;
        self.y = 0.0;
        self.pole = pole;
    }

    #[inline]
    pub fn process(&mut self, in_: f32) -> f32 {
        let old_x = self.x;
        self.x = in_;
        self.y = self.y * self.pole + self.x - old_x;
        self.y
    }
}

/// State-variable filter running at a normalized frequency `f = f_hz / sr`.
#[derive(Debug, Default, Clone)]
pub struct Svf {
    g: f32,
    r: f32,
    h: f32,
    state_1: f32,
    state_2: f32,
}

impl Svf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.set_f_q(0.01, 100.0);
        self.reset();
    }

    pub fn reset(&mut self) {
        self.state_1 = 0.0;
        self.state_2 = 0.0;
    }

    /// Set normalized frequency and resonance. The frequency warp is exact
    /// (`tan`), clipped just below Nyquist to keep the coefficient finite.
    #[inline]
    pub fn set_f_q(&mut self, f: f32, resonance: f32) {
        let f = f.min(0.497);
        self.g = (PI * f).tan();
        self.r = 1.0 / resonance;
        self.h = 1.0 / (1.0 + self.r * self.g + self.g * self.g);
    }

    #[inline]
    pub fn process(&mut self, in_: f32, mode: FilterMode) -> f32 {
        let hp = (in_ - self.r * self.state_1 - self.g * self.state_1 - self.state_2) * self.h;
        let bp = self.g * hp + self.state_1;
        self.state_1 = self.g * hp + bp;
        let lp = self.g * bp + self.state_2;
        self.state_2 = self.g * bp + lp;

        match mode {
            FilterMode::LowPass => lp,
            FilterMode::BandPass => bp,
            FilterMode::HighPass => hp,
        }
    }
}
