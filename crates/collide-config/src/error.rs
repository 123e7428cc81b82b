//! Errors raised while loading, saving, or resolving envelope presets.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

/// Everything that can go wrong between a preset name and an [`EnvPanel`].
///
/// File errors keep the offending path; TOML and validation errors wrap the
/// underlying cause so `source()` chains stay intact.
///
/// [`EnvPanel`]: collide_env::EnvPanel
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Preset file exists but could not be read.
    #[error("cannot read preset '{path}': {source}")]
    ReadPreset {
        /// Preset file path.
        path: PathBuf,
        /// I/O cause.
        #[source]
        source: std::io::Error,
    },

    /// Preset file could not be written.
    #[error("cannot write preset '{path}': {source}")]
    WritePreset {
        /// Preset file path.
        path: PathBuf,
        /// I/O cause.
        #[source]
        source: std::io::Error,
    },

    /// Directory for a new preset file could not be created.
    #[error("cannot create preset directory '{path}': {source}")]
    CreateDir {
        /// Directory path.
        path: PathBuf,
        /// I/O cause.
        #[source]
        source: std::io::Error,
    },

    /// Preset text is not valid TOML for the envelope panel.
    #[error("malformed preset TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Preset could not be encoded as TOML.
    #[error("cannot encode preset as TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Name matches neither a factory preset nor an existing file.
    #[error("preset '{0}' not found (not a factory preset or an existing file)")]
    PresetNotFound(String),

    /// Preset parsed but holds out-of-range settings.
    #[error("invalid envelope settings: {0}")]
    Validation(#[from] ValidationError),
}

impl ConfigError {
    pub(crate) fn read_preset(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadPreset {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write_preset(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WritePreset {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::ErrorKind;

    fn denied() -> std::io::Error {
        std::io::Error::new(ErrorKind::PermissionDenied, "denied")
    }

    #[test]
    fn file_errors_name_the_preset_path() {
        let msg = ConfigError::write_preset("/presets/pad.toml", denied()).to_string();
        assert!(msg.starts_with("cannot write preset"), "got: {msg}");
        assert!(msg.contains("/presets/pad.toml"), "got: {msg}");

        let err = ConfigError::read_preset("/presets/pad.toml", denied());
        assert!(matches!(err, ConfigError::ReadPreset { ref path, .. } if path.ends_with("pad.toml")));
        assert!(err.source().is_some());
    }

    #[test]
    fn not_found_has_no_cause() {
        let err = ConfigError::PresetNotFound("plonk".to_string());
        assert!(err.to_string().contains("'plonk'"));
        assert!(err.source().is_none());
    }

    #[test]
    fn validation_message_carries_the_field() {
        let err: ConfigError = ValidationError::UnknownMode("hold".to_string()).into();
        let msg = err.to_string();
        assert!(msg.starts_with("invalid envelope settings:"), "got: {msg}");
        assert!(msg.contains("hold"), "got: {msg}");
    }
}
