//! Collide Env - exponential ADSR envelope engine
//!
//! This crate turns a gate signal into an Attack/Decay/Sustain/Release
//! contour, one sample at a time. Each stage is an RC charge toward a target
//! and advances when the output arrives within a fixed distance of it.
//!
//! # Core Components
//!
//! ## State Machine
//!
//! - [`EnvelopeState`] - Stage tracking plus the integrator all stages share
//! - [`StageParams`] - Time constants and sustain level for one sample
//! - [`SampleInputs`] / [`GateDetector`] - Edge and level read from one gate sample
//! - [`EnvFrame`] - Value, producing stage, and end-of-cycle flag
//!
//! ```rust
//! use collide_env::{EnvelopeMode, EnvelopeState, GateDetector, StageParams};
//!
//! let mut env = EnvelopeState::new(48000.0);
//! let mut gate = GateDetector::new();
//! let params = StageParams::from_knobs(0.2, 0.4, 0.7, 0.5);
//!
//! let frame = env.process(gate.process(1.0), EnvelopeMode::Gate, &params);
//! assert!(frame.value > 0.0);
//! ```
//!
//! ## Module Front End
//!
//! - [`EnvModule`] - Knobs, attenuverters and CV in; 10 V envelope, stage
//!   gates, VCA and end pulse out
//! - [`EnvPanel`] / [`EnvJacks`] / [`EnvOutputs`] - Per-sample I/O
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! collide-env = { version = "0.1", default-features = false }
//! ```
//!
//! # Logging
//!
//! With the `tracing` feature, stage transitions are emitted at `trace` level
//! and completed cycles at `debug`.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod envelope;
pub mod module;

pub use envelope::{
    CONVERGENCE_EPSILON, EnvFrame, EnvelopeMode, EnvelopeState, GATE_THRESHOLD, GateDetector,
    SampleInputs, Stage, StageParams,
};
pub use module::{EnvJacks, EnvModule, EnvOutputs, EnvPanel, StageControls, gate_level};

// Re-export the primitives callers need to drive the engine directly.
pub use collide_core::{DEFAULT_PULSE_WIDTH, PulseGenerator, map_stage_time};
