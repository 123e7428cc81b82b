//! Exponential (RC) smoother: the one-pole integrator every contour is built on.
//!
//! A single-pole IIR lowpass parameterized by a time constant instead of a
//! cutoff frequency:
//!
//! ```text
//! y[n] = a * y[n-1] + (1 - a) * x[n]
//! a    = tau / (tau + dt)
//! ```
//!
//! where `dt = 1 / sample_rate`. This is the backward-Euler discretization of
//! an RC charge/discharge: for a constant target the distance to the target
//! shrinks by `a` every sample, so roughly 63% of the gap closes per `tau`
//! elapsed.
//!
//! The same type doubles as an "RC diode": [`RcFilter::charge`] forces the
//! capacitor voltage instantly, which the envelope follower uses for its
//! zero-attack peak capture.
//!
//! # Usage
//!
//! ```rust
//! use collide_core::RcFilter;
//!
//! let mut rc = RcFilter::new(48000.0, 0.01);
//! let first = rc.process(1.0);
//! assert!(first > 0.0 && first < 1.0);
//! ```

use crate::flush_denormal;

/// One-pole exponential smoother with time-constant semantics.
///
/// # Invariants
///
/// - `coeff` is in [0, 1) for any `tau >= 0` and positive sample rate
/// - `state` is flushed to zero when below 1e-20 (denormal protection)
///
/// State and coefficient are held in `f64`. At a 10 s time constant and
/// 48 kHz the per-sample step drops below one `f32` ulp while the output is
/// still about 1% from its target, which would stall convergence.
#[derive(Debug, Clone)]
pub struct RcFilter {
    /// Last output sample (the capacitor voltage).
    state: f64,
    /// Feedback coefficient `a`.
    coeff: f64,
    sample_rate: f32,
}

impl RcFilter {
    /// Create a smoother at rest (state 0) with the given time constant in seconds.
    pub fn new(sample_rate: f32, tau: f32) -> Self {
        let mut rc = Self {
            state: 0.0,
            coeff: 0.0,
            sample_rate,
        };
        rc.set_tau(tau);
        rc
    }

    /// Set the time constant in seconds used by the next [`process`](Self::process) call.
    ///
    /// `a = tau / (tau + dt)`. Negative values are treated as zero (no smoothing).
    #[inline]
    pub fn set_tau(&mut self, tau: f32) {
        let tau = f64::from(tau.max(0.0));
        let dt = 1.0 / f64::from(self.sample_rate);
        self.coeff = tau / (tau + dt);
    }

    /// Set the coefficient from a corner frequency instead: `a = 1 - fc / sample_rate`.
    pub fn set_cutoff(&mut self, freq_hz: f32) {
        self.coeff = (1.0 - f64::from(freq_hz) / f64::from(self.sample_rate)).clamp(0.0, 1.0);
    }

    /// Current feedback coefficient.
    pub fn coeff(&self) -> f32 {
        self.coeff as f32
    }

    /// Advance one sample toward `target` and return the new value.
    #[inline]
    pub fn process(&mut self, target: f32) -> f32 {
        let target = f64::from(target);
        self.state = flush_denormal(self.coeff * self.state + (1.0 - self.coeff) * target);
        self.state as f32
    }

    /// Force the persisted value and return it (instantaneous charge).
    #[inline]
    pub fn charge(&mut self, value: f32) -> f32 {
        self.state = f64::from(value);
        value
    }

    /// Force the persisted value without producing an output.
    pub fn reset(&mut self, value: f32) {
        self.state = f64::from(value);
    }

    /// Last output value, without advancing.
    #[inline]
    pub fn value(&self) -> f32 {
        self.state as f32
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Update the sample rate. The next [`set_tau`](Self::set_tau) picks it up.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
    }
}

impl Default for RcFilter {
    fn default() -> Self {
        Self::new(48000.0, 0.01)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libm::expf;

    #[test]
    fn slowest_stage_still_converges() {
        let sr = 48000.0;
        let mut rc = RcFilter::new(sr, 10.0);
        let mut out = 0.0;
        for _ in 0..(10.0 * sr * 8.0) as usize {
            out = rc.process(1.0);
        }
        assert!((out - 1.0).abs() < 1e-3, "stalled at {out}");
    }

    #[test]
    fn converges_to_dc() {
        let mut rc = RcFilter::new(48000.0, 0.01);
        let mut out = 0.0;
        for _ in 0..48000 {
            out = rc.process(1.0);
        }
        assert!((out - 1.0).abs() < 1e-4, "should settle on target, got {out}");
    }

    #[test]
    fn one_time_constant_closes_63_percent() {
        let sr = 48000.0;
        let tau = 0.01;
        let mut rc = RcFilter::new(sr, tau);
        for _ in 0..(tau * sr) as usize {
            rc.process(1.0);
        }
        let expected = 1.0 - expf(-1.0);
        assert!(
            (rc.value() - expected).abs() < 0.01,
            "expected ~{expected}, got {}",
            rc.value()
        );
    }

    #[test]
    fn coefficient_matches_formula() {
        let rc = RcFilter::new(1000.0, 0.001);
        // tau == dt -> a = 0.5
        assert!((rc.coeff() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn charge_is_instant() {
        let mut rc = RcFilter::new(48000.0, 1.0);
        assert_eq!(rc.charge(0.75), 0.75);
        assert_eq!(rc.value(), 0.75);
    }

    #[test]
    fn reset_sets_state() {
        let mut rc = RcFilter::new(48000.0, 0.01);
        rc.process(1.0);
        rc.reset(0.0);
        assert_eq!(rc.value(), 0.0);
        assert_eq!(rc.process(0.0), 0.0);
    }

    #[test]
    fn zero_tau_passes_target_through() {
        let mut rc = RcFilter::new(48000.0, 0.0);
        assert_eq!(rc.process(0.3), 0.3);
    }

    #[test]
    fn cutoff_parameterization() {
        let mut rc = RcFilter::new(48000.0, 0.01);
        rc.set_cutoff(4800.0);
        assert!((rc.coeff() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn tau_follows_sample_rate_change() {
        let mut rc = RcFilter::new(1000.0, 0.001);
        rc.set_sample_rate(3000.0);
        rc.set_tau(0.001);
        assert!((rc.coeff() - 0.75).abs() < 1e-6);
    }
}
