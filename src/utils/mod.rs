//! Small DSP helpers shared across the voice components.

pub mod delay_line;
pub mod filter;
pub mod random;

/// Linear interpolation between `a` and `b` by `f` in `[0, 1]`.
#[inline]
pub fn lerp(a: f32, b: f32, f: f32) -> f32 {
    a + (b - a) * f
}

#[inline]
pub fn one_pole(out: &mut f32, in_: f32, coefficient: f32) {
    *out += coefficient * (in_ - *out);
}

#[inline]
pub fn slope(out: &mut f32, in_: f32, positive: f32, negative: f32) {
    let error = in_ - *out;
    *out += if error > 0.0 {
        positive * error
    } else {
        negative * error
    };
}
