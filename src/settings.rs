//! Persisted tuning record and the values the engine derives from it.
//!
//! Loading and saving the record is the host's concern; the engine only
//! consumes the derived tuning multiplier. The record's shape is its wire
//! format: changing the struct silently invalidates previously stored data.

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::note::SEMITONES_PER_OCTAVE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TuningSettings {
    /// Frequency multiplier last applied to all strings.
    pub tuning_offset: f32,
    /// Semitone offset of the first string relative to the drone root.
    pub first_string_offset: i32,
    /// Exponent of the fine-tuning control; the multiplier is `2^factor`.
    pub tuning_factor: f32,
    /// Pitch-control calibration: reading at 0 V.
    pub calibration_offset: f32,
    /// Pitch-control calibration: reading units per volt.
    pub calibration_coefficient: f32,
}

impl Default for TuningSettings {
    fn default() -> Self {
        Self {
            tuning_offset: 1.0,
            first_string_offset: 7,
            tuning_factor: 0.0,
            calibration_offset: 0.331,
            calibration_coefficient: 0.12573,
        }
    }
}

impl TuningSettings {
    /// Frequency multiplier applied on top of the tempered string pitches.
    pub fn tuning_multiplier(&self) -> f32 {
        2.0_f32.powf(self.tuning_factor)
    }

    /// Convert a raw pitch-control reading to a rounded semitone offset,
    /// using the stored calibration.
    pub fn semitones_from_control(&self, value: f32) -> i32 {
        let volts = (value - self.calibration_offset) / self.calibration_coefficient;
        (volts * SEMITONES_PER_OCTAVE as f32).round() as i32
    }
}
