//! Equal-power (square-root law) mono-to-stereo panning.
//!
//! With pan position `x` in [0, 1] (0 = hard left), the channel gains are
//! `sqrt(1 - x)` and `sqrt(x)`. Their squares always sum to one, so the
//! total power stays constant as a source moves across the field and the
//! center sits at -3 dB per side.

use crate::{attenuvert, normalize_cv};
use libm::sqrtf;

/// Channel gains `(left, right)` for a bipolar pan position in [-1, 1].
///
/// ```rust
/// use collide_core::pan_gains;
///
/// let (l, r) = pan_gains(0.0);
/// assert!((l - r).abs() < 1e-6);
/// assert!((l * l + r * r - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn pan_gains(pan: f32) -> (f32, f32) {
    let x = (pan.clamp(-1.0, 1.0) + 1.0) * 0.5;
    (sqrtf(1.0 - x), sqrtf(x))
}

/// Pan knob with attenuverted CV modulation.
///
/// Stateless apart from its settings; a single instance can pan any number of
/// samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct Panner {
    /// Pan knob in [-1, 1]; -1 is hard left.
    pub pan: f32,
    /// Attenuverter applied to the pan CV, in [-1, 1].
    pub atv: f32,
}

impl Panner {
    /// Create a panner at the given position with no modulation.
    pub fn new(pan: f32) -> Self {
        Self {
            pan: pan.clamp(-1.0, 1.0),
            atv: 0.0,
        }
    }

    /// Effective bipolar position for a pan CV in volts (`None` when unpatched).
    #[inline]
    pub fn position(&self, cv_volts: Option<f32>) -> f32 {
        let cv = cv_volts.map_or(0.0, normalize_cv);
        attenuvert(self.pan, cv, self.atv, -1.0, 1.0)
    }

    /// Pan one sample, returning `(left, right)`.
    #[inline]
    pub fn process(&self, input: f32, cv_volts: Option<f32>) -> (f32, f32) {
        let (gl, gr) = pan_gains(self.position(cv_volts));
        (input * gl, input * gr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_left_and_right() {
        assert_eq!(pan_gains(-1.0), (1.0, 0.0));
        assert_eq!(pan_gains(1.0), (0.0, 1.0));
    }

    #[test]
    fn constant_power_across_field() {
        for i in -10..=10 {
            let (l, r) = pan_gains(i as f32 / 10.0);
            assert!((l * l + r * r - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn cv_moves_position() {
        let panner = Panner { pan: 0.0, atv: 1.0 };
        assert_eq!(panner.position(Some(5.0)), 1.0);
        assert_eq!(panner.position(Some(-2.5)), -0.5);
        assert_eq!(panner.position(None), 0.0);
    }

    #[test]
    fn modulated_position_is_clamped() {
        let panner = Panner { pan: 0.8, atv: 1.0 };
        assert_eq!(panner.position(Some(10.0)), 1.0);
        let (l, r) = panner.process(2.0, Some(10.0));
        assert_eq!((l, r), (0.0, 2.0));
    }
}
