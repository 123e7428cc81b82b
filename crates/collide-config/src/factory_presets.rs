//! Factory presets bundled with the collide library.
//!
//! These presets are always available without external files and cover the
//! usual envelope shapes: a neutral starting point, plucks, pads, swells, and
//! a trigger-mode percussive hit.

use crate::EnvPreset;

/// Array of factory preset names for external access.
pub static FACTORY_PRESET_NAMES: &[&str] = &["init", "pluck", "pad", "swell", "percussive"];

/// TOML content for factory presets, embedded at compile time.
static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("init", INIT_PRESET),
    ("pluck", PLUCK_PRESET),
    ("pad", PAD_PRESET),
    ("swell", SWELL_PRESET),
    ("percussive", PERCUSSIVE_PRESET),
];

/// Initialization preset - every knob centered.
const INIT_PRESET: &str = r#"
name = "Init"
description = "Centered knobs: 100 ms stages, half-level sustain"
sample_rate = 48000
mode = "gate"
attack = 0.5
decay = 0.5
sustain = 0.5
release = 0.5
"#;

const PLUCK_PRESET: &str = r#"
name = "Pluck"
description = "Instant attack, short decay to a low sustain"
sample_rate = 48000
mode = "gate"
attack = 0.0
decay = 0.35
sustain = 0.2
release = 0.4

[attenuverters]
decay = 0.5
"#;

const PAD_PRESET: &str = r#"
name = "Pad"
description = "Slow attack and release around a high sustain"
sample_rate = 48000
mode = "gate"
attack = 0.7
decay = 0.6
sustain = 0.8
release = 0.75
"#;

const SWELL_PRESET: &str = r#"
name = "Swell"
description = "Very slow rise to full level, held while gated"
sample_rate = 48000
mode = "gate"
attack = 0.85
decay = 0.5
sustain = 1.0
release = 0.6

[attenuverters]
attack = -0.5
"#;

const PERCUSSIVE_PRESET: &str = r#"
name = "Percussive"
description = "Trigger mode: fast attack straight into a short release"
sample_rate = 48000
mode = "trigger"
attack = 0.05
decay = 0.3
sustain = 0.0
release = 0.45
"#;

/// Get all factory presets.
///
/// # Example
///
/// ```rust
/// use collide_config::factory_presets;
///
/// for preset in factory_presets() {
///     println!("  - {}: {}", preset.name, preset.description.as_deref().unwrap_or(""));
/// }
/// ```
pub fn factory_presets() -> Vec<EnvPreset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| EnvPreset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by identifier or display name (case-insensitive).
///
/// # Example
///
/// ```rust
/// use collide_config::get_factory_preset;
///
/// let pluck = get_factory_preset("pluck").unwrap();
/// assert_eq!(pluck.name, "Pluck");
/// ```
pub fn get_factory_preset(name: &str) -> Option<EnvPreset> {
    let name_lower = name.to_lowercase();

    for (preset_name, toml) in FACTORY_PRESETS_TOML {
        if preset_name.to_lowercase() == name_lower {
            return EnvPreset::from_toml(toml).ok();
        }
    }

    factory_presets()
        .into_iter()
        .find(|preset| preset.name.to_lowercase() == name_lower)
}

/// Get the identifiers of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESETS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Check if a name refers to a factory preset (case-insensitive).
///
/// ```rust
/// use collide_config::is_factory_preset;
///
/// assert!(is_factory_preset("Pad"));
/// assert!(!is_factory_preset("my_custom_preset"));
/// ```
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}
