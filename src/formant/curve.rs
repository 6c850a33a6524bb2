//! Precomputed formant glide table.
//!
//! One entry per output sample of the glide, holding the interpolated center
//! frequency, bandwidth and gain of all four bands. The table is rebuilt
//! synchronously whenever the duration or the vowel pair changes and is
//! read-only during playback. Rebuilding is O(len × bands) and must stay off
//! the render path.

use alloc::vec::Vec;

use crate::utils::lerp;

/// Number of parallel band-pass filters in the bank.
pub const NUM_BANDS: usize = 4;

/// Interpolated filter parameters of a single band at a single glide step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BandPoint {
    pub center_freq: f32,
    pub bandwidth: f32,
    pub gain_db: f32,
}

/// Ease-in curve used for the glide: fast at first, settling into the target.
#[inline]
pub fn ease_in(t: f32) -> f32 {
    let flipped = 1.0 - t;
    1.0 - flipped * flipped
}

#[derive(Debug, Default, Clone)]
pub struct FormantCurve {
    points: Vec<[BandPoint; NUM_BANDS]>,
}

impl FormantCurve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of glide steps; at least 1 once built.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Entry at `index`, clamped to the final step so a finished glide holds
    /// its terminal timbre.
    #[inline]
    pub fn at(&self, index: usize) -> &[BandPoint; NUM_BANDS] {
        &self.points[index.min(self.points.len() - 1)]
    }

    /// Rebuild the table for a glide of `total_samples` steps between two
    /// preset band sets. `total_samples == 0` means the glide is already
    /// complete: the table collapses to a single entry holding the end
    /// preset exactly.
    pub fn rebuild(
        &mut self,
        start: &[BandPoint; NUM_BANDS],
        end: &[BandPoint; NUM_BANDS],
        total_samples: usize,
    ) {
        self.points.clear();

        if total_samples == 0 {
            self.points.push(*end);
            return;
        }

        self.points.reserve(total_samples);
        let scale = 1.0 / total_samples as f32;
        for i in 0..total_samples {
            let f = ease_in(i as f32 * scale);
            let mut entry = [BandPoint::default(); NUM_BANDS];
            for (point, (a, b)) in entry.iter_mut().zip(start.iter().zip(end.iter())) {
                point.center_freq = lerp(a.center_freq, b.center_freq, f);
                point.bandwidth = lerp(a.bandwidth, b.bandwidth, f);
                point.gain_db = lerp(a.gain_db, b.gain_db, f);
            }
            self.points.push(entry);
        }
    }
}
