//! Static vowel preset table.
//!
//! Center frequencies, bandwidths and relative band gains for the first four
//! formants of five sung vowels (tenor range, from the classic CSound formant
//! tables). Presets are selected by enum, so an out-of-range index is
//! unrepresentable.

use super::curve::{BandPoint, NUM_BANDS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Vowel {
    #[default]
    A,
    E,
    I,
    O,
    U,
}

impl Vowel {
    pub const COUNT: usize = 5;

    pub fn as_str(&self) -> &'static str {
        match self {
            Vowel::A => "a",
            Vowel::E => "e",
            Vowel::I => "i",
            Vowel::O => "o",
            Vowel::U => "u",
        }
    }

    /// The four formant bands of this vowel.
    pub fn bands(&self) -> &'static [BandPoint; NUM_BANDS] {
        &VOWEL_TABLE[*self as usize]
    }
}

const fn band(center_freq: f32, bandwidth: f32, gain_db: f32) -> BandPoint {
    BandPoint {
        center_freq,
        bandwidth,
        gain_db,
    }
}

static VOWEL_TABLE: [[BandPoint; NUM_BANDS]; Vowel::COUNT] = [
    // a
    [
        band(650.0, 80.0, 0.0),
        band(1080.0, 90.0, -6.0),
        band(2650.0, 120.0, -7.0),
        band(2900.0, 130.0, -8.0),
    ],
    // e
    [
        band(400.0, 70.0, 0.0),
        band(1700.0, 80.0, -14.0),
        band(2600.0, 100.0, -12.0),
        band(3200.0, 120.0, -14.0),
    ],
    // i
    [
        band(290.0, 40.0, 0.0),
        band(1870.0, 90.0, -15.0),
        band(2800.0, 100.0, -18.0),
        band(3250.0, 120.0, -20.0),
    ],
    // o
    [
        band(400.0, 40.0, 0.0),
        band(800.0, 80.0, -10.0),
        band(2600.0, 100.0, -12.0),
        band(2800.0, 120.0, -12.0),
    ],
    // u
    [
        band(350.0, 40.0, 0.0),
        band(600.0, 60.0, -20.0),
        band(2700.0, 100.0, -17.0),
        band(2900.0, 120.0, -14.0),
    ],
];
