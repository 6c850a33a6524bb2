//! Resonant comb filter tuned to the string fundamental.
//!
//! Recirculates the plucked-string output through a fractional delay line,
//! adding the buzzing sympathetic-string color of the bridge. The loop gain
//! is derived from a decay time so resonance strength is pitch-independent.

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::utils::delay_line::DelayLine;
use crate::MIN_FREQUENCY;

const DEFAULT_REV_TIME: f32 = 3.5;

#[derive(Debug, Default, Clone)]
pub struct CombResonator {
    line: DelayLine,
    sample_rate: f32,
    frequency_hz: f32,
    rev_time: f32,
    feedback: f32,
}

impl CombResonator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the delay line. Configuration time only.
    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.line.init((sample_rate / MIN_FREQUENCY) as usize + 4);
        self.rev_time = DEFAULT_REV_TIME;
        self.set_freq(110.0);
    }

    pub fn reset(&mut self) {
        self.line.reset();
    }

    #[inline]
    pub fn set_freq(&mut self, frequency_hz: f32) {
        self.frequency_hz = frequency_hz.max(MIN_FREQUENCY);
        let loop_time = 1.0 / self.frequency_hz;
        self.feedback = 0.001_f32.powf(loop_time / self.rev_time);
    }

    /// Decay time of the resonance tail, in seconds.
    pub fn set_rev_time(&mut self, rev_time: f32) {
        self.rev_time = rev_time.max(0.01);
        self.set_freq(self.frequency_hz);
    }

    #[inline]
    pub fn process(&mut self, in_: f32) -> f32 {
        let delay =
            (self.sample_rate / self.frequency_hz).clamp(2.0, (self.line.max_delay() - 4) as f32);
        let s = self.line.read_frac(delay);
        let v = in_ + s * self.feedback;
        self.line.write(v);

        v
    }
}
