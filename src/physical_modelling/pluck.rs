//! Karplus-Strong plucked string.
//!
//! A noise burst excites a recirculating delay line whose loop applies a
//! one-pole damping low-pass and a decay gain. The excitation lasts one
//! fundamental period, so output is audible from the very first sample after
//! a trigger; a never-triggered string outputs exact silence.

// Based on MIT-licensed code (c) 2016 by Emilie Gillet (emilie.o.gillet@gmail.com)

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::utils::delay_line::DelayLine;
use crate::utils::filter::DcBlocker;
use crate::utils::one_pole;
use crate::utils::random::Lcg;
use crate::MIN_FREQUENCY;

#[derive(Debug, Default, Clone)]
pub struct PluckedString {
    line: DelayLine,
    dc_blocker: DcBlocker,
    rng: Lcg,

    sample_rate: f32,
    frequency_hz: f32,
    amp: f32,
    decay: f32,
    damp: f32,

    damping_state: f32,
    remaining_excitation: usize,
}

impl PluckedString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the delay line for the lowest supported fundamental.
    /// Configuration time only.
    pub fn init(&mut self, sample_rate: f32, seed: u32) {
        self.sample_rate = sample_rate;
        self.line.init((sample_rate / MIN_FREQUENCY) as usize + 4);
        self.dc_blocker.init(1.0 - 20.0 / sample_rate);
        self.rng.seed(seed);
        self.frequency_hz = 110.0;
        self.amp = 1.0;
        self.decay = 1.0;
        self.damp = 1.0;
        self.damping_state = 0.0;
        self.remaining_excitation = 0;
    }

    pub fn reset(&mut self) {
        self.line.reset();
        self.damping_state = 0.0;
        self.remaining_excitation = 0;
    }

    /// Takes effect on the next processed sample, without retriggering.
    #[inline]
    pub fn set_freq(&mut self, frequency_hz: f32) {
        self.frequency_hz = frequency_hz.max(MIN_FREQUENCY);
    }

    pub fn set_amp(&mut self, amp: f32) {
        self.amp = amp.clamp(0.0, 1.0);
    }

    pub fn set_decay(&mut self, decay: f32) {
        self.decay = decay.clamp(0.0, 1.0);
    }

    pub fn set_damp(&mut self, damp: f32) {
        self.damp = damp.clamp(0.0, 1.0);
    }

    /// Render one sample. `trigger` is an edge, already one-shot by the time
    /// it arrives here; a new burst restarts the excitation without clearing
    /// the still-ringing delay line.
    #[inline]
    pub fn process(&mut self, trigger: bool) -> f32 {
        let delay =
            (self.sample_rate / self.frequency_hz).clamp(2.0, (self.line.max_delay() - 4) as f32);

        if trigger {
            self.remaining_excitation = delay as usize;
        }

        let excitation = if self.remaining_excitation > 0 {
            self.remaining_excitation -= 1;
            self.rng.get_bipolar() * self.amp
        } else {
            0.0
        };

        let s = self.line.read_frac(delay);
        one_pole(&mut self.damping_state, s, 0.2 + 0.5 * self.damp);
        let loop_gain = 0.9 + 0.097 * self.decay;
        let v = self.dc_blocker.process(self.damping_state * loop_gain + excitation);
        self.line.write(v);

        v
    }
}
