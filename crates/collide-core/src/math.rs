//! Small numeric helpers shared by the DSP primitives.
//!
//! All functions are allocation-free and `no_std` friendly.

/// Flush subnormal (denormalized) floats to zero.
///
/// Subnormal floats cause severe CPU slowdowns on most architectures. Values
/// below 1e-20 are replaced with zero, well before the subnormal range of
/// either float width. Used in the smoother's `f64` feedback path, where a
/// release tail can decay toward zero indefinitely.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn flush_denormal(x: f64) -> f64 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}

/// Convert seconds to a (fractional) sample count.
#[inline]
pub fn seconds_to_samples(seconds: f32, sample_rate: f32) -> f32 {
    seconds * sample_rate
}

/// Convert a sample count to seconds.
#[inline]
pub fn samples_to_seconds(samples: f32, sample_rate: f32) -> f32 {
    samples / sample_rate
}
