//! The drone engine: owns the four string voices, the mix weights and the
//! output conditioner, and renders the stereo-duplicated mono bus.
//!
//! The engine is a single-owner object: the host calls [`DroneEngine::render`]
//! from its audio context and [`DroneEngine::apply_controls`] from its control
//! cadence on the same `&mut` owner, so a formant-table rebuild can never race
//! a table read. No process-wide state exists.

use crate::formant::vowels::Vowel;
use crate::fx::OutputConditioner;
use crate::note::{Note, NoteName};
use crate::voice::DroneVoice;
use crate::NUM_STRINGS;

/// Empirical loudness-balance boost applied to the formant branch, whose raw
/// output is much quieter than the string and comb branches.
pub const FORMANT_BOOST: f32 = 20.0;

/// MIDI offset of the drone root: pitch-control semitones count up from C1.
pub const BASE_SEMITONE_OFFSET: i32 = 24;

/// Per-branch mix gains. `string_weight` scales every branch of every string
/// so that the full ensemble plus headroom sums to unity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixWeights {
    pub string_weight: f32,
    pub string_mix: f32,
    pub comb_mix: f32,
    pub formant_mix: f32,
}

impl Default for MixWeights {
    fn default() -> Self {
        Self {
            string_weight: 1.0 / (NUM_STRINGS + 1) as f32,
            string_mix: 0.3,
            comb_mix: 0.2,
            formant_mix: 0.3,
        }
    }
}

impl MixWeights {
    /// Map the single "character" control to the three branch gains: more
    /// character trades string level for comb and formant color.
    pub fn from_character(character: f32) -> Self {
        let character = character.clamp(0.0, 1.0);
        let comb_mix = character * 0.4;
        Self {
            string_weight: 1.0 / (NUM_STRINGS + 1) as f32,
            string_mix: 1.0 - comb_mix,
            comb_mix,
            formant_mix: character * 0.4,
        }
    }
}

/// Scalar parameters produced by the host's control loop, applied between
/// render blocks. A latched `trigger_pulse` is observed by the next block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSnapshot {
    /// Semitone offset of each string above [`BASE_SEMITONE_OFFSET`].
    pub pitch_semitone_offset: [i32; NUM_STRINGS],
    /// Fine-tuning frequency multiplier, `2^tuning_factor`.
    pub tuning_multiplier: f32,
    pub string_mix: f32,
    pub comb_mix: f32,
    pub formant_mix: f32,
    /// Continuous formant intensity on top of the enable gate.
    pub formant_amount: f32,
    pub formant_enabled: bool,
    /// Formant glide duration. Only a changed value triggers the expensive
    /// table rebuild, and only from this call, never from `render`.
    pub formant_duration_seconds: f32,
    pub lowpass_cutoff_hz: f32,
    pub lowpass_enabled: bool,
    pub limiter_enabled: bool,
    /// Strum the next string in round-robin order.
    pub trigger_pulse: bool,
}

impl Default for ControlSnapshot {
    fn default() -> Self {
        Self {
            pitch_semitone_offset: [7, 12, 12, 0],
            tuning_multiplier: 1.0,
            string_mix: 0.3,
            comb_mix: 0.2,
            formant_mix: 0.3,
            formant_amount: 1.0,
            formant_enabled: true,
            formant_duration_seconds: 2.0,
            lowpass_cutoff_hz: 10_000.0,
            lowpass_enabled: true,
            limiter_enabled: false,
            trigger_pulse: false,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct DroneEngine {
    voices: [DroneVoice; NUM_STRINGS],
    weights: MixWeights,
    conditioner: OutputConditioner,
    sample_rate: f32,
    formant_enabled: bool,
    formant_amount: f32,
    formant_duration: f32,
    current_string: usize,
}

impl DroneEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the whole instrument. Configuration time only: allocates every
    /// delay line and formant glide table. Each string gets a fixed noise
    /// seed, so a render is reproducible across identically-configured
    /// engines.
    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        for (i, voice) in self.voices.iter_mut().enumerate() {
            voice.init(
                sample_rate,
                0x21_u32.wrapping_mul(i as u32 + 1),
                Vowel::I,
                Vowel::O,
            );
        }
        self.formant_duration = 2.0;
        for voice in self.voices.iter_mut() {
            voice.formant_mut().set_duration(self.formant_duration);
        }

        // Traditional tanpura tuning: pa - sa' - sa' - sa.
        self.set_string_note(0, Note::new(NoteName::G, 2));
        self.set_string_note(1, Note::new(NoteName::C, 3));
        self.set_string_note(2, Note::new(NoteName::C, 3));
        self.set_string_note(3, Note::new(NoteName::C, 2));

        self.conditioner.init(sample_rate);
        self.weights = MixWeights::default();
        self.formant_enabled = true;
        self.formant_amount = 1.0;
        self.current_string = NUM_STRINGS - 1;

        log::info!(
            "drone engine initialized: {} strings at {} Hz",
            NUM_STRINGS,
            sample_rate
        );
    }

    pub fn set_string_note(&mut self, index: usize, note: Note) {
        self.voices[index].set_freq(note.frequency());
    }

    pub fn set_string_freq(&mut self, index: usize, frequency_hz: f32) {
        self.voices[index].set_freq(frequency_hz);
    }

    pub fn set_weights(&mut self, weights: MixWeights) {
        self.weights = weights;
    }

    pub fn weights(&self) -> MixWeights {
        self.weights
    }

    pub fn set_formant_enabled(&mut self, enabled: bool) {
        self.formant_enabled = enabled;
    }

    pub fn set_formant_amount(&mut self, amount: f32) {
        self.formant_amount = amount.clamp(0.0, 1.0);
    }

    /// Rebuild every string's formant glide table for a new duration.
    /// O(sample_rate × seconds) per string: configuration time only, never
    /// from the render path.
    pub fn set_formant_duration(&mut self, seconds: f32) {
        self.formant_duration = seconds.max(0.0);
        for voice in self.voices.iter_mut() {
            voice.formant_mut().set_duration(self.formant_duration);
        }
    }

    /// Select the vowel pair of the glide. Configuration time only.
    pub fn set_formant_vowels(&mut self, start: Vowel, end: Vowel) {
        for voice in self.voices.iter_mut() {
            voice.formant_mut().set_start_end_vowels(start, end);
        }
    }

    pub fn set_formant_refresh_period(&mut self, period: u32) {
        for voice in self.voices.iter_mut() {
            voice.formant_mut().set_refresh_period(period);
        }
    }

    /// Pluck one string directly.
    pub fn trigger(&mut self, index: usize) {
        self.voices[index].trigger();
    }

    /// Strum: advance to the next string in round-robin order and pluck it.
    pub fn pluck_next(&mut self) {
        self.current_string = (self.current_string + 1) % NUM_STRINGS;
        self.voices[self.current_string].trigger();
    }

    pub fn voice(&self, index: usize) -> &DroneVoice {
        &self.voices[index]
    }

    /// Apply one control-loop tick worth of parameters. Cheap scalar copies,
    /// except that a changed glide duration rebuilds the formant tables; the
    /// `&mut` receiver guarantees no render is reading them meanwhile.
    pub fn apply_controls(&mut self, controls: &ControlSnapshot) {
        for (voice, offset) in self
            .voices
            .iter_mut()
            .zip(controls.pitch_semitone_offset.iter())
        {
            let note = Note::from_midi(BASE_SEMITONE_OFFSET + offset);
            voice.set_freq(note.frequency() * controls.tuning_multiplier);
        }

        self.weights.string_mix = controls.string_mix;
        self.weights.comb_mix = controls.comb_mix;
        self.weights.formant_mix = controls.formant_mix;
        self.formant_enabled = controls.formant_enabled;
        self.formant_amount = controls.formant_amount.clamp(0.0, 1.0);

        if controls.formant_duration_seconds != self.formant_duration {
            self.set_formant_duration(controls.formant_duration_seconds);
        }

        self.conditioner.set_limiter_enabled(controls.limiter_enabled);
        self.conditioner.set_low_pass_enabled(controls.lowpass_enabled);
        self.conditioner.set_low_pass_cutoff(controls.lowpass_cutoff_hz);

        if controls.trigger_pulse {
            self.pluck_next();
        }
    }

    /// Render one block. Mono mix, conditioned, duplicated to both outputs.
    /// Allocation-free and bounded per sample.
    pub fn render(&mut self, out_l: &mut [f32], out_r: &mut [f32]) {
        for (l, r) in out_l.iter_mut().zip(out_r.iter_mut()) {
            let mix = self.mix_sample();
            let s = self.conditioner.process(mix);
            *l = s;
            *r = s;
        }
    }

    #[inline]
    fn mix_sample(&mut self) -> f32 {
        let weights = self.weights;
        let mut mix = 0.0;
        for voice in self.voices.iter_mut() {
            let frame = voice.process(self.formant_enabled);
            let string_weighted = frame.string * weights.string_weight;
            let comb_weighted = frame.comb * weights.string_weight;
            let formant_weighted = frame.formant * weights.string_weight;

            mix += string_weighted * weights.string_mix
                + comb_weighted * weights.comb_mix
                + formant_weighted * weights.formant_mix * self.formant_amount * FORMANT_BOOST;
        }

        mix
    }
}
