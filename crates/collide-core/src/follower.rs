//! Diode envelope follower for tracking signal amplitude.
//!
//! Models a rectifier feeding an RC network through a diode: when the
//! rectified input rises above the held level the capacitor charges
//! instantly, otherwise it discharges through the resistor with a time
//! constant set by a sensitivity knob. The result is a zero-attack peak
//! tracker with an adjustable exponential release.

use crate::RcFilter;

/// Slowest release time constant in seconds (sensitivity 0).
pub const MAX_FOLLOW_TAU: f32 = 5.0;

/// Fastest release time constant in seconds.
pub const MIN_FOLLOW_TAU: f32 = 0.01;

/// Map a sensitivity knob in [0, 1] onto a release time constant.
///
/// `tau = clamp((1 - sensitivity) * 5, 0.01, 5.0)`: higher sensitivity
/// releases faster and follows the input more closely.
#[inline]
pub fn sensitivity_to_tau(sensitivity: f32) -> f32 {
    ((1.0 - sensitivity) * MAX_FOLLOW_TAU).clamp(MIN_FOLLOW_TAU, MAX_FOLLOW_TAU)
}

/// Envelope follower with instant attack and RC release.
///
/// Output stays in the input's units: feed volts, read volts.
///
/// # Example
///
/// ```rust
/// use collide_core::EnvelopeFollower;
///
/// let mut follow = EnvelopeFollower::new(48000.0);
/// follow.set_sensitivity(0.8);
///
/// assert_eq!(follow.process(-3.0), 3.0); // rectified, charged instantly
/// assert!(follow.process(0.0) < 3.0);    // then released
/// ```
#[derive(Debug, Clone)]
pub struct EnvelopeFollower {
    rc: RcFilter,
    sensitivity: f32,
}

impl EnvelopeFollower {
    /// Create a follower at rest with sensitivity 0.5 (2.5 s release).
    pub fn new(sample_rate: f32) -> Self {
        Self::with_sensitivity(sample_rate, 0.5)
    }

    /// Create a follower with the given sensitivity.
    pub fn with_sensitivity(sample_rate: f32, sensitivity: f32) -> Self {
        let mut follower = Self {
            rc: RcFilter::new(sample_rate, sensitivity_to_tau(sensitivity)),
            sensitivity,
        };
        follower.set_sensitivity(sensitivity);
        follower
    }

    /// Set the sensitivity knob (clamped to [0, 1]).
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity.clamp(0.0, 1.0);
        self.rc.set_tau(sensitivity_to_tau(self.sensitivity));
    }

    /// Current sensitivity.
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Release time constant in seconds derived from the sensitivity.
    pub fn release_tau(&self) -> f32 {
        sensitivity_to_tau(self.sensitivity)
    }

    /// Update sample rate and recalculate the release coefficient.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.rc.set_sample_rate(sample_rate);
        self.rc.set_tau(sensitivity_to_tau(self.sensitivity));
    }

    /// Process a sample and return the current envelope level.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let rectified = input.abs();
        if rectified > self.rc.value() {
            self.rc.charge(rectified)
        } else {
            self.rc.process(rectified)
        }
    }

    /// Current envelope level without processing new input.
    pub fn level(&self) -> f32 {
        self.rc.value()
    }

    /// Discharge to zero.
    pub fn reset(&mut self) {
        self.rc.reset(0.0);
    }
}

impl Default for EnvelopeFollower {
    fn default() -> Self {
        Self::new(48000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensitivity_mapping() {
        assert_eq!(sensitivity_to_tau(0.0), MAX_FOLLOW_TAU);
        assert_eq!(sensitivity_to_tau(1.0), MIN_FOLLOW_TAU);
        assert!((sensitivity_to_tau(0.5) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn attack_is_instant() {
        let mut env = EnvelopeFollower::new(48000.0);
        assert_eq!(env.process(0.8), 0.8);
        assert_eq!(env.process(-0.9), 0.9);
    }

    #[test]
    fn release_is_exponential() {
        let sr = 1000.0;
        let mut env = EnvelopeFollower::with_sensitivity(sr, 0.98); // 0.1 s
        env.process(1.0);
        for _ in 0..100 {
            env.process(0.0);
        }
        // ~e^-1 after one time constant
        assert!((env.level() - 0.368).abs() < 0.02, "got {}", env.level());
    }

    #[test]
    fn holds_peak_of_lower_input() {
        let mut env = EnvelopeFollower::with_sensitivity(48000.0, 0.0);
        env.process(5.0);
        let level = env.process(1.0);
        assert!(level > 4.99 && level < 5.0);
    }

    #[test]
    fn reset_discharges() {
        let mut env = EnvelopeFollower::default();
        env.process(2.0);
        env.reset();
        assert_eq!(env.level(), 0.0);
    }
}
