//! Collide Core - control-rate and audio-rate DSP primitives
//!
//! This crate provides the building blocks shared by the collide modules:
//! an exponential (RC) smoother and the small utilities that surround it.
//! Everything is allocation-free and safe to call once per sample.
//!
//! # Core Abstractions
//!
//! ## Exponential Smoothing
//!
//! - [`RcFilter`] - One-pole smoother with time-constant semantics and an
//!   instantaneous [`charge`](RcFilter::charge) for diode behavior
//! - [`map_stage_time`] - Knob-to-time-constant mapping (1 ms to 10 s)
//!
//! ## Control Signals
//!
//! - [`SchmittTrigger`] - Rising-edge detector with hysteresis
//! - [`PulseGenerator`] - Fixed-width one-shot pulse
//! - [`normalize_cv`] / [`attenuvert`] - Modulation voltage conventions
//!
//! ## Utilities
//!
//! - [`EnvelopeFollower`] - Instant-attack, RC-release amplitude follower
//! - [`Panner`] / [`pan_gains`] - Equal-power panning
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! collide-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use collide_core::{RcFilter, map_stage_time};
//!
//! let mut rc = RcFilter::new(48000.0, map_stage_time(0.25)); // 10 ms
//! let mut level = 0.0;
//! for _ in 0..4800 {
//!     level = rc.process(1.0);
//! }
//! assert!((level - 1.0).abs() < 1e-3);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod cv;
pub mod follower;
pub mod math;
pub mod pan;
pub mod smoother;
pub mod stage_time;
pub mod trigger;

// Re-export main types at crate root
pub use cv::{CV_RANGE, FULL_SCALE, attenuvert, modulate_unipolar, normalize_cv};
pub use follower::{EnvelopeFollower, MAX_FOLLOW_TAU, MIN_FOLLOW_TAU, sensitivity_to_tau};
pub use math::{flush_denormal, samples_to_seconds, seconds_to_samples};
pub use pan::{Panner, pan_gains};
pub use smoother::RcFilter;
pub use stage_time::{MAX_STAGE_TIME, MIN_STAGE_TIME, STAGE_TIME_RATIO, map_stage_time};
pub use trigger::{DEFAULT_PULSE_WIDTH, PulseGenerator, SchmittTrigger};
