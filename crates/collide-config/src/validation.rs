//! Preset validation.
//!
//! Knob values must sit in [0, 1], attenuverters in [-1, 1], the sample rate
//! in 1..=[`MAX_SAMPLE_RATE`] Hz, and the mode must name one of the envelope
//! modes. Every problem in a preset is reported, not just the first.
//!
//! # Example
//!
//! ```rust
//! use collide_config::{EnvPreset, validate_preset};
//!
//! let mut preset = EnvPreset::new("Broken");
//! preset.attack = 1.5;
//! assert!(validate_preset(&preset).is_err());
//! ```

use collide_env::EnvelopeMode;
use thiserror::Error;

use crate::EnvPreset;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the parameter.
        param: String,
        /// The value that was out of range.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// Sample rate is zero or above [`MAX_SAMPLE_RATE`].
    #[error("sample rate {0} Hz out of range [1, {MAX_SAMPLE_RATE}]")]
    SampleRate(u32),

    /// Mode string is neither `gate` nor `trigger`.
    #[error("unknown envelope mode '{0}' (expected 'gate' or 'trigger')")]
    UnknownMode(String),

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Highest sample rate a preset may request.
pub const MAX_SAMPLE_RATE: u32 = 768_000;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parse an envelope mode name (case-insensitive).
pub fn parse_mode(name: &str) -> ValidationResult<EnvelopeMode> {
    match name.trim().to_ascii_lowercase().as_str() {
        "gate" => Ok(EnvelopeMode::Gate),
        "trigger" | "trig" => Ok(EnvelopeMode::Trigger),
        _ => Err(ValidationError::UnknownMode(name.to_string())),
    }
}

/// Canonical name of an envelope mode, as written to preset files.
pub fn mode_name(mode: EnvelopeMode) -> &'static str {
    match mode {
        EnvelopeMode::Gate => "gate",
        EnvelopeMode::Trigger => "trigger",
    }
}

/// Check that `value` lies in `[min, max]`.
pub fn validate_range(param: &str, value: f32, min: f32, max: f32) -> ValidationResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            param: param.to_string(),
            value,
            min,
            max,
        })
    }
}

/// Check that a sample rate is usable for rendering.
pub fn validate_sample_rate(sample_rate: u32) -> ValidationResult<()> {
    if (1..=MAX_SAMPLE_RATE).contains(&sample_rate) {
        Ok(())
    } else {
        Err(ValidationError::SampleRate(sample_rate))
    }
}

/// Validate every field of a preset.
pub fn validate_preset(preset: &EnvPreset) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if let Err(e) = parse_mode(&preset.mode) {
        errors.push(e);
    }
    if let Err(e) = validate_sample_rate(preset.sample_rate) {
        errors.push(e);
    }

    let knobs = [
        ("attack", preset.attack),
        ("decay", preset.decay),
        ("sustain", preset.sustain),
        ("release", preset.release),
    ];
    for (name, value) in knobs {
        if let Err(e) = validate_range(name, value, 0.0, 1.0) {
            errors.push(e);
        }
    }

    let atv = &preset.attenuverters;
    let attenuverters = [
        ("attenuverters.attack", atv.attack),
        ("attenuverters.decay", atv.decay),
        ("attenuverters.sustain", atv.sustain),
        ("attenuverters.release", atv.release),
    ];
    for (name, value) in attenuverters {
        if let Err(e) = validate_range(name, value, -1.0, 1.0) {
            errors.push(e);
        }
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
