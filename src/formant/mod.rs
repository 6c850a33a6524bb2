//! Time-varying 4-band formant filter.
//!
//! Four parallel band-pass filters glide from a start vowel to an end vowel
//! along a precomputed ease-in curve. Coefficients are refreshed from the
//! curve only every few samples to bound per-sample cost; between refreshes
//! each band keeps its last-loaded parameters. Once the glide completes, the
//! bank holds the end timbre until the next [`FormantFilter::reset`].

pub mod curve;
pub mod vowels;

#[allow(unused_imports)]
use num_traits::float::Float;

use self::curve::{BandPoint, FormantCurve, NUM_BANDS};
use self::vowels::Vowel;

use crate::utils::filter::{FilterMode, Svf};

/// Default coefficient refresh period: the original hardware refreshed every
/// sixth processed sample.
pub const DEFAULT_REFRESH_PERIOD: u32 = 6;

/// Fires on the first call after reset and every `period`-th call thereafter.
#[derive(Debug, Clone)]
pub struct RefreshCadence {
    period: u32,
    counter: u32,
}

impl Default for RefreshCadence {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_PERIOD)
    }
}

impl RefreshCadence {
    pub fn new(period: u32) -> Self {
        Self {
            period: period.max(1),
            counter: 0,
        }
    }

    pub fn set_period(&mut self, period: u32) {
        self.period = period.max(1);
        self.counter = 0;
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }

    #[inline]
    pub fn tick(&mut self) -> bool {
        let fire = self.counter == 0;
        self.counter += 1;
        if self.counter >= self.period {
            self.counter = 0;
        }
        fire
    }
}

#[derive(Debug, Default, Clone)]
pub struct FormantFilter {
    filters: [Svf; NUM_BANDS],
    current: [BandPoint; NUM_BANDS],
    curve: FormantCurve,
    cadence: RefreshCadence,

    sample_rate: f32,
    duration: f32,
    start_vowel: Vowel,
    end_vowel: Vowel,
    elapsed_samples: usize,
}

impl FormantFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the bank gliding from `start` to `end` over one second.
    /// Configuration time only: allocates and fills the glide table.
    pub fn init(&mut self, sample_rate: f32, start: Vowel, end: Vowel) {
        self.sample_rate = sample_rate;
        self.start_vowel = start;
        self.end_vowel = end;
        self.duration = 1.0;
        self.elapsed_samples = 0;
        self.cadence.reset();
        for filter in self.filters.iter_mut() {
            filter.init();
        }
        self.rebuild_curve();
        self.load(0);
    }

    /// Restart the glide from the start vowel.
    pub fn reset(&mut self) {
        self.elapsed_samples = 0;
        self.cadence.reset();
        self.load(0);
    }

    /// Change the glide duration, in seconds. Rebuilds the whole curve:
    /// O(sample_rate × seconds), never call this from the render path.
    pub fn set_duration(&mut self, seconds: f32) {
        self.duration = seconds.max(0.0);
        self.rebuild_curve();
    }

    /// Select the vowel pair the glide travels between and rebuild the curve
    /// for the current duration. Configuration time only.
    pub fn set_start_end_vowels(&mut self, start: Vowel, end: Vowel) {
        self.start_vowel = start;
        self.end_vowel = end;
        self.rebuild_curve();
    }

    pub fn set_refresh_period(&mut self, period: u32) {
        self.cadence.set_period(period);
    }

    pub fn elapsed_samples(&self) -> usize {
        self.elapsed_samples
    }

    /// A finished glide holds the end timbre until the next reset.
    pub fn is_gliding(&self) -> bool {
        self.elapsed_samples < self.curve.len()
    }

    /// Last parameters loaded into a band's filter.
    pub fn band_point(&self, band: usize) -> BandPoint {
        self.current[band]
    }

    pub fn start_vowel(&self) -> Vowel {
        self.start_vowel
    }

    pub fn end_vowel(&self) -> Vowel {
        self.end_vowel
    }

    fn rebuild_curve(&mut self) {
        let total_samples = (self.sample_rate * self.duration) as usize;
        self.curve.rebuild(
            self.start_vowel.bands(),
            self.end_vowel.bands(),
            total_samples,
        );
        log::debug!(
            "formant curve rebuilt: {} -> {}, {} steps",
            self.start_vowel.as_str(),
            self.end_vowel.as_str(),
            self.curve.len()
        );
    }

    /// Load band coefficients from the curve at `index`.
    fn load(&mut self, index: usize) {
        let entry = self.curve.at(index);
        let inv_sr = 1.0 / self.sample_rate;
        for ((filter, current), point) in self
            .filters
            .iter_mut()
            .zip(self.current.iter_mut())
            .zip(entry.iter())
        {
            filter.set_f_q(point.center_freq * inv_sr, point.center_freq / point.bandwidth);
            *current = *point;
        }
    }

    /// Render one sample: band-pass each band with its last-loaded
    /// coefficients, weight by the exponentially-mapped band gain, sum.
    #[inline]
    pub fn process(&mut self, in_: f32) -> f32 {
        if self.cadence.tick() {
            self.load(self.elapsed_samples);
        }

        let mut output = 0.0;
        for (filter, current) in self.filters.iter_mut().zip(self.current.iter()) {
            let gain = (current.gain_db / 10.0).exp();
            output += filter.process(in_, FilterMode::BandPass) * gain;
        }

        self.elapsed_samples = self.elapsed_samples.saturating_add(1);

        output
    }
}
