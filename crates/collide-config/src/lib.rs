//! Configuration and preset management for the collide envelope.
//!
//! Envelope panel settings (mode, four knobs, four attenuverters) are stored
//! as TOML presets. This crate loads, validates, and saves them, and ships a
//! small set of factory presets.
//!
//! # Example
//!
//! ```rust,no_run
//! use collide_config::{EnvPreset, get_factory_preset};
//! use collide_env::EnvelopeMode;
//!
//! // Start from a factory preset and tweak it
//! let mut preset = get_factory_preset("pluck").unwrap();
//! preset.name = "Long Pluck".to_string();
//! preset.release = 0.7;
//!
//! // Or build one programmatically
//! let hit = EnvPreset::new("Hit")
//!     .with_mode(EnvelopeMode::Trigger)
//!     .with_knobs(0.0, 0.3, 0.0, 0.35);
//!
//! preset.save("presets/long_pluck.toml").unwrap();
//! let panel = hit.panel().unwrap();
//! ```

mod error;
mod preset;

/// Preset validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset,
};
pub use preset::{Attenuverters, EnvPreset};
pub use validation::{
    MAX_SAMPLE_RATE, ValidationError, ValidationResult, mode_name, parse_mode, validate_preset,
    validate_range, validate_sample_rate,
};
