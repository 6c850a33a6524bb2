//! Physically-modeled string voices: the plucked string itself and the
//! comb resonator that gives it sympathetic-string character.

pub mod comb;
pub mod pluck;
