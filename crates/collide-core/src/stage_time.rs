//! Knob-to-time-constant mapping for envelope stages.
//!
//! A stage knob in [0, 1] maps exponentially onto [`MIN_STAGE_TIME`,
//! `MAX_STAGE_TIME`]:
//!
//! ```text
//! tau = MIN_STAGE_TIME * (MAX_STAGE_TIME / MIN_STAGE_TIME) ^ knob
//! ```
//!
//! Equal knob rotation multiplies the duration by an equal ratio, so the
//! control reads as logarithmic: 0.0 → 1 ms, 0.25 → 10 ms, 0.5 → 100 ms,
//! 0.75 → 1 s, 1.0 → 10 s.

use libm::powf;

/// Fastest stage time constant in seconds.
pub const MIN_STAGE_TIME: f32 = 1e-3;

/// Slowest stage time constant in seconds.
pub const MAX_STAGE_TIME: f32 = 10.0;

/// Ratio between the slowest and fastest stage time.
pub const STAGE_TIME_RATIO: f32 = MAX_STAGE_TIME / MIN_STAGE_TIME;

/// Map a normalized knob value onto a stage time constant in seconds.
///
/// Input is clamped to [0, 1]; out-of-range values are never rejected.
///
/// # Example
///
/// ```rust
/// use collide_core::{map_stage_time, MIN_STAGE_TIME, MAX_STAGE_TIME};
///
/// assert_eq!(map_stage_time(0.0), MIN_STAGE_TIME);
/// assert!((map_stage_time(1.0) - MAX_STAGE_TIME).abs() < 1e-3);
/// assert!((map_stage_time(0.5) - 0.1).abs() < 1e-4);
/// ```
#[inline]
pub fn map_stage_time(knob: f32) -> f32 {
    MIN_STAGE_TIME * powf(STAGE_TIME_RATIO, knob.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(map_stage_time(0.0), MIN_STAGE_TIME);
        assert!((map_stage_time(1.0) - MAX_STAGE_TIME).abs() < 1e-3);
    }

    #[test]
    fn decades_per_quarter_turn() {
        assert!((map_stage_time(0.25) - 0.01).abs() < 1e-5);
        assert!((map_stage_time(0.75) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(map_stage_time(-3.0), MIN_STAGE_TIME);
        assert_eq!(map_stage_time(7.0), map_stage_time(1.0));
    }

    #[test]
    fn monotonic_in_knob() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let tau = map_stage_time(i as f32 / 100.0);
            assert!(tau > prev);
            prev = tau;
        }
    }
}
