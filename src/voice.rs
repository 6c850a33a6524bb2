//! One drone string: plucked-string model, comb resonator and formant filter
//! sharing a single fundamental frequency.

use crate::formant::vowels::Vowel;
use crate::formant::FormantFilter;
use crate::physical_modelling::comb::CombResonator;
use crate::physical_modelling::pluck::PluckedString;

/// The three per-string signals of one output sample, before mix weighting.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoiceFrame {
    pub string: f32,
    pub comb: f32,
    pub formant: f32,
}

#[derive(Debug, Default, Clone)]
pub struct DroneVoice {
    pluck: PluckedString,
    comb: CombResonator,
    formant: FormantFilter,
    frequency_hz: f32,
    trigger: bool,
}

impl DroneVoice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration time only: allocates delay lines and the formant glide
    /// table. `seed` makes the excitation noise of this string reproducible.
    pub fn init(&mut self, sample_rate: f32, seed: u32, start: Vowel, end: Vowel) {
        self.pluck.init(sample_rate, seed);
        self.comb.init(sample_rate);
        self.formant.init(sample_rate, start, end);
        self.set_freq(110.0);
        self.trigger = false;
    }

    /// Retune the string. Takes effect on the next processed sample without
    /// retriggering.
    pub fn set_freq(&mut self, frequency_hz: f32) {
        self.frequency_hz = frequency_hz;
        self.pluck.set_freq(frequency_hz);
        self.comb.set_freq(frequency_hz);
    }

    pub fn frequency(&self) -> f32 {
        self.frequency_hz
    }

    /// Latch a one-shot pluck. The latch is consumed by the next processed
    /// sample; submitting again before then is idempotent. Restarts the
    /// formant glide from the start vowel.
    pub fn trigger(&mut self) {
        self.trigger = true;
        self.formant.reset();
    }

    pub fn trigger_pending(&self) -> bool {
        self.trigger
    }

    pub fn formant(&self) -> &FormantFilter {
        &self.formant
    }

    pub fn formant_mut(&mut self) -> &mut FormantFilter {
        &mut self.formant
    }

    /// Render one sample of all three signals. The trigger latch is consumed
    /// here, exactly once; the caller never clears it. When the formant
    /// branch is disabled it is not processed at all and contributes an
    /// exact zero.
    #[inline]
    pub fn process(&mut self, formant_enabled: bool) -> VoiceFrame {
        let trigger = core::mem::take(&mut self.trigger);
        let string = self.pluck.process(trigger);
        let comb = self.comb.process(string);
        let formant = if formant_enabled {
            self.formant.process(string)
        } else {
            0.0
        };

        VoiceFrame {
            string,
            comb,
            formant,
        }
    }
}
