#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod engine;
pub mod formant;
pub mod fx;
pub mod note;
pub mod physical_modelling;
pub mod settings;
pub mod utils;
pub mod voice;

/// Number of strings in the ensemble.
pub const NUM_STRINGS: usize = 4;

/// Lowest fundamental the delay-line based voices are sized for, in Hz.
pub const MIN_FREQUENCY: f32 = 20.0;
