//! Preset file format and operations.

use collide_env::{EnvPanel, EnvelopeMode, StageControls};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::factory_presets::get_factory_preset;
use crate::validation::{mode_name, parse_mode, validate_preset};

/// Attenuverter settings, one per stage CV input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Attenuverters {
    /// Attack CV amount in [-1, 1].
    pub attack: f32,
    /// Decay CV amount in [-1, 1].
    pub decay: f32,
    /// Sustain CV amount in [-1, 1].
    pub sustain: f32,
    /// Release CV amount in [-1, 1].
    pub release: f32,
}

/// Saved envelope panel settings.
///
/// Knob values are normalized: the time knobs map onto 1 ms..10 s
/// exponentially, the sustain knob is the level itself.
///
/// # TOML Format
///
/// ```toml
/// name = "Pluck"
/// description = "Snappy attack, short decay to a low sustain"
/// sample_rate = 48000
/// mode = "gate"
/// attack = 0.0
/// decay = 0.35
/// sustain = 0.2
/// release = 0.4
///
/// [attenuverters]
/// decay = 0.5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvPreset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Render rate in Hz when nothing else fixes it (defaults to 48000).
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Envelope mode name: `gate` or `trigger`.
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Attack knob in [0, 1].
    #[serde(default = "default_knob")]
    pub attack: f32,

    /// Decay knob in [0, 1].
    #[serde(default = "default_knob")]
    pub decay: f32,

    /// Sustain level in [0, 1].
    #[serde(default = "default_knob")]
    pub sustain: f32,

    /// Release knob in [0, 1].
    #[serde(default = "default_knob")]
    pub release: f32,

    /// CV attenuverters.
    #[serde(default)]
    pub attenuverters: Attenuverters,
}

fn default_sample_rate() -> u32 {
    48000
}

fn default_mode() -> String {
    mode_name(EnvelopeMode::Gate).to_string()
}

fn default_knob() -> f32 {
    0.5
}

impl EnvPreset {
    /// Create a preset with every knob centered, in gate mode.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: default_sample_rate(),
            mode: default_mode(),
            attack: default_knob(),
            decay: default_knob(),
            sustain: default_knob(),
            release: default_knob(),
            attenuverters: Attenuverters::default(),
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the default render rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the envelope mode.
    pub fn with_mode(mut self, mode: EnvelopeMode) -> Self {
        self.mode = mode_name(mode).to_string();
        self
    }

    /// Set all four knobs.
    pub fn with_knobs(mut self, attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        self.attack = attack;
        self.decay = decay;
        self.sustain = sustain;
        self.release = release;
        self
    }

    /// Set the attenuverters.
    pub fn with_attenuverters(mut self, attenuverters: Attenuverters) -> Self {
        self.attenuverters = attenuverters;
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_preset(path, e))?;
        let preset: EnvPreset = toml::from_str(&content)?;
        Ok(preset)
    }

    /// Resolve a preset by factory name, falling back to a file path.
    ///
    /// Factory names match case-insensitively and win over a file of the same
    /// name in the working directory.
    pub fn resolve(name: &str) -> Result<Self, ConfigError> {
        if let Some(preset) = get_factory_preset(name) {
            return Ok(preset);
        }
        let path = Path::new(name);
        if path.is_file() {
            return Self::load(path);
        }
        Err(ConfigError::PresetNotFound(name.to_string()))
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_preset(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Ok(validate_preset(self)?)
    }

    /// Parsed envelope mode.
    pub fn envelope_mode(&self) -> Result<EnvelopeMode, ConfigError> {
        Ok(parse_mode(&self.mode)?)
    }

    /// Knob values in stage order.
    pub fn knobs(&self) -> StageControls {
        StageControls {
            attack: self.attack,
            decay: self.decay,
            sustain: self.sustain,
            release: self.release,
        }
    }

    /// Validate and convert to panel settings (button released).
    pub fn panel(&self) -> Result<EnvPanel, ConfigError> {
        self.validate()?;
        let atv = &self.attenuverters;
        Ok(EnvPanel {
            mode: self.envelope_mode()?,
            knobs: self.knobs(),
            attenuverters: StageControls {
                attack: atv.attack,
                decay: atv.decay,
                sustain: atv.sustain,
                release: atv.release,
            },
            button: false,
        })
    }
}

impl Default for EnvPreset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_new() {
        let preset = EnvPreset::new("Test Preset");
        assert_eq!(preset.name, "Test Preset");
        assert!(preset.description.is_none());
        assert_eq!(preset.sample_rate, 48000);
        assert_eq!(preset.mode, "gate");
        assert_eq!(preset.knobs(), StageControls::splat(0.5));
    }

    #[test]
    fn test_preset_builder() {
        let preset = EnvPreset::new("My Preset")
            .with_description("A test preset")
            .with_sample_rate(44100)
            .with_mode(EnvelopeMode::Trigger)
            .with_knobs(0.1, 0.2, 0.3, 0.4);

        assert_eq!(preset.description, Some("A test preset".to_string()));
        assert_eq!(preset.sample_rate, 44100);
        assert_eq!(preset.mode, "trigger");
        assert_eq!(preset.release, 0.4);
    }

    #[test]
    fn test_preset_from_toml() {
        let toml = r#"
name = "Test"
description = "A test preset"
sample_rate = 44100
mode = "trigger"
attack = 0.1
decay = 0.2
sustain = 0.3
release = 0.4

[attenuverters]
sustain = -0.5
"#;

        let preset = EnvPreset::from_toml(toml).unwrap();
        assert_eq!(preset.name, "Test");
        assert_eq!(preset.sample_rate, 44100);
        assert_eq!(preset.envelope_mode().unwrap(), EnvelopeMode::Trigger);
        assert_eq!(preset.sustain, 0.3);
        assert_eq!(preset.attenuverters.sustain, -0.5);
        assert_eq!(preset.attenuverters.attack, 0.0);
    }

    #[test]
    fn test_minimal_toml() {
        let preset = EnvPreset::from_toml("name = \"Minimal\"").unwrap();
        assert_eq!(preset.name, "Minimal");
        assert!(preset.description.is_none());
        assert_eq!(preset.sample_rate, 48000);
        assert_eq!(preset.mode, "gate");
        assert_eq!(preset.attack, 0.5);
        assert_eq!(preset.attenuverters, Attenuverters::default());
    }

    #[test]
    fn test_preset_to_toml() {
        let preset = EnvPreset::new("Test")
            .with_description("Test description")
            .with_mode(EnvelopeMode::Trigger);

        let toml = preset.to_toml().unwrap();
        assert!(toml.contains("name = \"Test\""));
        assert!(toml.contains("description = \"Test description\""));
        assert!(toml.contains("mode = \"trigger\""));
        assert!(toml.contains("[attenuverters]"));
    }

    #[test]
    fn test_panel_conversion() {
        let preset = EnvPreset::new("Panel")
            .with_knobs(0.0, 0.25, 0.75, 1.0)
            .with_attenuverters(Attenuverters {
                decay: -1.0,
                ..Attenuverters::default()
            });
        let panel = preset.panel().unwrap();
        assert_eq!(panel.mode, EnvelopeMode::Gate);
        assert_eq!(panel.knobs.sustain, 0.75);
        assert_eq!(panel.attenuverters.decay, -1.0);
        assert!(!panel.button);
    }

    #[test]
    fn test_panel_rejects_bad_mode() {
        let mut preset = EnvPreset::default();
        preset.mode = "cycle".to_string();
        assert!(matches!(preset.panel(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_resolve_factory_then_missing() {
        assert_eq!(EnvPreset::resolve("Pluck").unwrap().name, "Pluck");
        let err = EnvPreset::resolve("no/such/preset.toml").unwrap_err();
        assert!(matches!(err, ConfigError::PresetNotFound(ref n) if n == "no/such/preset.toml"));
    }

    #[test]
    fn test_panel_rejects_zero_sample_rate() {
        let preset = EnvPreset::new("Silent").with_sample_rate(0);
        assert!(matches!(
            preset.panel(),
            Err(ConfigError::Validation(crate::ValidationError::SampleRate(0)))
        ));
    }

    #[test]
    fn test_unparseable_toml() {
        let err = EnvPreset::from_toml("name = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
