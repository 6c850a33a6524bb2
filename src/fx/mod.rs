//! Output conditioning: optional peak limiting followed by an optional
//! resonant low-pass, applied to the mono mix bus before stereo duplication.
//! Disabled stages pass the signal through unchanged.

pub mod limiter;

use self::limiter::Limiter;

use crate::utils::filter::{FilterMode, Svf};

const DEFAULT_CUTOFF_HZ: f32 = 10_000.0;
const LOW_PASS_RESONANCE: f32 = 0.7;

#[derive(Debug, Default, Clone)]
pub struct OutputConditioner {
    limiter: Limiter,
    low_pass: Svf,
    sample_rate: f32,
    limiter_enabled: bool,
    low_pass_enabled: bool,
}

impl OutputConditioner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.limiter.init();
        self.low_pass.init();
        self.limiter_enabled = false;
        self.low_pass_enabled = true;
        self.set_low_pass_cutoff(DEFAULT_CUTOFF_HZ);
    }

    pub fn set_limiter_enabled(&mut self, enabled: bool) {
        self.limiter_enabled = enabled;
    }

    pub fn set_low_pass_enabled(&mut self, enabled: bool) {
        self.low_pass_enabled = enabled;
    }

    pub fn set_low_pass_cutoff(&mut self, cutoff_hz: f32) {
        self.low_pass
            .set_f_q(cutoff_hz / self.sample_rate, LOW_PASS_RESONANCE);
    }

    #[inline]
    pub fn process(&mut self, in_: f32) -> f32 {
        let mut s = in_;
        if self.limiter_enabled {
            s = self.limiter.process(1.0, s);
        }
        if self.low_pass_enabled {
            s = self.low_pass.process(s, FilterMode::LowPass);
        }

        s
    }
}
