//! Note value object: name <-> MIDI number <-> control voltage <-> frequency.

#[allow(unused_imports)]
use num_traits::float::Float;

pub const SEMITONES_PER_OCTAVE: i32 = 12;
pub const VOLTS_PER_SEMITONE: f32 = 1.0 / 12.0;
pub const BASE_OCTAVE: i32 = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoteName {
    #[default]
    C,
    Cs,
    D,
    Eb,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    Bb,
    B,
}

impl NoteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::Cs => "C#",
            NoteName::D => "D",
            NoteName::Eb => "Eb",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::Fs => "F#",
            NoteName::G => "G",
            NoteName::Gs => "G#",
            NoteName::A => "A",
            NoteName::Bb => "Bb",
            NoteName::B => "B",
        }
    }

    /// Pitch class in `[0, 11]`, counted from C.
    pub fn semitone(&self) -> i32 {
        *self as i32
    }

    pub fn from_semitone(semitone: i32) -> Self {
        const NAMES: [NoteName; 12] = [
            NoteName::C,
            NoteName::Cs,
            NoteName::D,
            NoteName::Eb,
            NoteName::E,
            NoteName::F,
            NoteName::Fs,
            NoteName::G,
            NoteName::Gs,
            NoteName::A,
            NoteName::Bb,
            NoteName::B,
        ];
        NAMES[semitone.rem_euclid(SEMITONES_PER_OCTAVE) as usize]
    }
}

/// A tempered note. MIDI 69 = A4 = 440 Hz; C4 = 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub name: NoteName,
    pub octave: i32,
    pub midi: i32,
}

impl Default for Note {
    fn default() -> Self {
        Self::new(NoteName::C, 4)
    }
}

impl Note {
    pub fn new(name: NoteName, octave: i32) -> Self {
        Self {
            name,
            octave,
            midi: SEMITONES_PER_OCTAVE * (octave + 1) + name.semitone(),
        }
    }

    pub fn from_midi(midi: i32) -> Self {
        Self {
            name: NoteName::from_semitone(midi),
            octave: midi / SEMITONES_PER_OCTAVE - 1,
            midi,
        }
    }

    /// Equal-tempered frequency in Hz.
    pub fn frequency(&self) -> f32 {
        440.0 * 2.0_f32.powf((self.midi - 69) as f32 / 12.0)
    }

    /// 1 V/octave control voltage, zero-centered on octave 4.
    pub fn voltage(&self) -> f32 {
        self.name.semitone() as f32 * VOLTS_PER_SEMITONE + (self.octave - BASE_OCTAVE) as f32
    }
}
