//! Edge detection and fixed-width pulses for control signals.
//!
//! - [`SchmittTrigger`] turns a continuous, normalized control signal into
//!   rising-edge events, with hysteresis so a noisy signal hovering near a
//!   single threshold does not chatter.
//! - [`PulseGenerator`] turns a one-sample event back into a pulse of fixed
//!   duration, so downstream consumers sampling at a lower rate still see it.

/// Default end-of-cycle pulse width in seconds.
pub const DEFAULT_PULSE_WIDTH: f32 = 1e-3;

/// Rising-edge detector with hysteresis.
///
/// The trigger goes high when the input reaches `high` (1.0) and goes low
/// again only once the input falls to `low` (0.0) or below.
/// [`process`](Self::process) reports `true` on the low→high sample only.
///
/// # Example
///
/// ```rust
/// use collide_core::SchmittTrigger;
///
/// let mut trig = SchmittTrigger::new();
/// assert!(!trig.process(0.5));
/// assert!(trig.process(1.0));
/// assert!(!trig.process(1.0)); // still high, no new edge
/// assert!(!trig.process(0.0));
/// assert!(trig.process(1.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchmittTrigger {
    high: bool,
}

impl SchmittTrigger {
    /// Threshold at or below which the trigger re-arms.
    pub const LOW: f32 = 0.0;
    /// Threshold at or above which the trigger fires.
    pub const HIGH: f32 = 1.0;

    /// Create a trigger in the low state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one sample; returns `true` on a rising edge.
    #[inline]
    pub fn process(&mut self, input: f32) -> bool {
        if self.high {
            if input <= Self::LOW {
                self.high = false;
            }
            false
        } else if input >= Self::HIGH {
            self.high = true;
            true
        } else {
            false
        }
    }

    /// Whether the trigger is currently latched high.
    pub fn is_high(&self) -> bool {
        self.high
    }

    /// Return to the low state.
    pub fn reset(&mut self) {
        self.high = false;
    }
}

/// One-shot pulse of fixed width.
///
/// Re-triggering while a pulse is in flight restarts it at full width; it
/// never stacks.
#[derive(Debug, Clone)]
pub struct PulseGenerator {
    width: f32,
    remaining: f32,
}

impl PulseGenerator {
    /// Create an idle generator emitting pulses of `width` seconds.
    pub fn new(width: f32) -> Self {
        Self {
            width: width.max(0.0),
            remaining: 0.0,
        }
    }

    /// Arm a pulse at full width.
    #[inline]
    pub fn trigger(&mut self) {
        self.remaining = self.width;
    }

    /// Advance by `dt` seconds and return the pulse level (1.0 or 0.0).
    #[inline]
    pub fn process(&mut self, dt: f32) -> f32 {
        if self.remaining > 0.0 {
            self.remaining -= dt;
            1.0
        } else {
            0.0
        }
    }

    /// Whether a pulse is still in flight.
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Configured width in seconds.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Cancel any in-flight pulse.
    pub fn reset(&mut self) {
        self.remaining = 0.0;
    }
}

impl Default for PulseGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PULSE_WIDTH)
    }
}
