//! Control-voltage conventions.
//!
//! Signals cross module boundaries in volts: unipolar outputs span
//! 0..[`FULL_SCALE`], modulation inputs are read as ±[`CV_RANGE`] and
//! normalized to ±1 before an attenuverter scales them onto a knob.

/// Nominal full-scale output voltage.
pub const FULL_SCALE: f32 = 10.0;

/// Modulation input range (±volts) that maps onto ±1.
pub const CV_RANGE: f32 = 5.0;

/// Normalize a modulation voltage to [-1, 1], clamping anything beyond ±5 V.
///
/// ```rust
/// use collide_core::normalize_cv;
///
/// assert_eq!(normalize_cv(2.5), 0.5);
/// assert_eq!(normalize_cv(-12.0), -1.0);
/// ```
#[inline]
pub fn normalize_cv(volts: f32) -> f32 {
    (volts / CV_RANGE).clamp(-1.0, 1.0)
}

/// Offset `base` by `cv * atv` and clamp the result to `[lo, hi]`.
///
/// `cv` is a normalized modulation value and `atv` a bipolar attenuverter
/// setting; a fully negative attenuverter inverts the modulation.
#[inline]
pub fn attenuvert(base: f32, cv: f32, atv: f32, lo: f32, hi: f32) -> f32 {
    (base + cv * atv).clamp(lo, hi)
}

/// Convenience for the common unipolar case: `attenuvert(base, cv, atv, 0, 1)`.
#[inline]
pub fn modulate_unipolar(base: f32, cv: f32, atv: f32) -> f32 {
    attenuvert(base, cv, atv, 0.0, 1.0)
}
