//! Shared CLI helpers used across multiple commands.

use clap::{Args, ValueEnum};
use collide_config::{ConfigError, EnvPreset, mode_name};
use collide_env::{EnvJacks, EnvModule, EnvOutputs, EnvPanel, EnvelopeMode};

/// Gate voltage for a held gate.
pub const GATE_HIGH_VOLTS: f32 = 10.0;

/// Envelope mode for CLI
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliMode {
    /// Hold decay/sustain while the gate is high
    Gate,
    /// Attack then release on every rising edge
    Trigger,
}

impl From<CliMode> for EnvelopeMode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Gate => EnvelopeMode::Gate,
            CliMode::Trigger => EnvelopeMode::Trigger,
        }
    }
}

/// Mode and knob overrides applied on top of a preset.
#[derive(Args, Debug, Clone, Default)]
pub struct KnobArgs {
    /// Envelope mode
    #[arg(long, value_enum)]
    pub mode: Option<CliMode>,

    /// Attack knob (0-1, maps to 1 ms..10 s)
    #[arg(long)]
    pub attack: Option<f32>,

    /// Decay knob (0-1, maps to 1 ms..10 s)
    #[arg(long)]
    pub decay: Option<f32>,

    /// Sustain level (0-1)
    #[arg(long)]
    pub sustain: Option<f32>,

    /// Release knob (0-1, maps to 1 ms..10 s)
    #[arg(long)]
    pub release: Option<f32>,
}

impl KnobArgs {
    /// Apply the overrides that were given.
    pub fn apply(&self, preset: &mut EnvPreset) {
        if let Some(mode) = self.mode {
            preset.mode = mode_name(mode.into()).to_string();
        }
        let overrides = [
            (&mut preset.attack, self.attack),
            (&mut preset.decay, self.decay),
            (&mut preset.sustain, self.sustain),
            (&mut preset.release, self.release),
        ];
        for (field, value) in overrides {
            if let Some(v) = value {
                *field = v;
            }
        }
    }
}

/// Envelope settings shared by `render` and `vca`.
#[derive(Args, Debug, Clone)]
pub struct EnvelopeArgs {
    /// Start from a preset (factory name or .toml path)
    #[arg(short, long)]
    pub preset: Option<String>,

    #[command(flatten)]
    pub knobs: KnobArgs,

    /// Gate span in seconds, START:END (repeatable; default: first half)
    #[arg(long = "gate", value_name = "START:END", value_parser = parse_gate_span)]
    pub gates: Vec<GateSpan>,
}

impl EnvelopeArgs {
    /// Resolve the preset and apply the knob overrides, validated.
    pub fn preset(&self) -> anyhow::Result<EnvPreset> {
        let mut preset = match &self.preset {
            Some(name) => load_preset(name)?,
            None => EnvPreset::default(),
        };
        self.knobs.apply(&mut preset);
        preset.validate()?;
        Ok(preset)
    }

    /// Resolve the preset and overrides into validated panel settings.
    pub fn panel(&self) -> anyhow::Result<EnvPanel> {
        Ok(self.preset()?.panel()?)
    }

    /// Gate voltages for `num_samples` samples.
    ///
    /// Without explicit spans the gate is held for the first half.
    pub fn gate_volts(&self, num_samples: usize, sample_rate: f32) -> Vec<f32> {
        if self.gates.is_empty() {
            let half = num_samples as f32 / sample_rate * 0.5;
            return gate_volts(&[GateSpan { start: 0.0, end: half }], num_samples, sample_rate);
        }
        gate_volts(&self.gates, num_samples, sample_rate)
    }
}

/// A span of time, in seconds, during which the gate is held high.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GateSpan {
    /// Start time in seconds.
    pub start: f32,
    /// End time in seconds (exclusive).
    pub end: f32,
}

impl GateSpan {
    fn contains(&self, t: f32) -> bool {
        t >= self.start && t < self.end
    }
}

/// Parse a `START:END` gate span for clap's `value_parser`.
pub fn parse_gate_span(s: &str) -> Result<GateSpan, String> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| format!("Invalid gate span: '{s}' (expected START:END in seconds)"))?;
    let start: f32 = start
        .trim()
        .parse()
        .map_err(|_| format!("Invalid gate start: '{start}'"))?;
    let end: f32 = end
        .trim()
        .parse()
        .map_err(|_| format!("Invalid gate end: '{end}'"))?;
    if start < 0.0 || end <= start {
        return Err(format!("Invalid gate span: '{s}' (need 0 <= START < END)"));
    }
    Ok(GateSpan { start, end })
}

/// Sample a set of gate spans into a voltage stream (10 V high, 0 V low).
pub fn gate_volts(spans: &[GateSpan], num_samples: usize, sample_rate: f32) -> Vec<f32> {
    (0..num_samples)
        .map(|n| {
            let t = n as f32 / sample_rate;
            if spans.iter().any(|span| span.contains(t)) {
                GATE_HIGH_VOLTS
            } else {
                0.0
            }
        })
        .collect()
}

/// Run the envelope module over a gate stream, optionally through the VCA.
pub fn run_module(
    panel: &EnvPanel,
    sample_rate: f32,
    gate: &[f32],
    signal: Option<&[f32]>,
) -> Vec<EnvOutputs> {
    let mut module = EnvModule::new(sample_rate);
    gate.iter()
        .enumerate()
        .map(|(n, &volts)| {
            let jacks = EnvJacks {
                gate: Some(volts),
                signal: signal.and_then(|s| s.get(n).copied()).unwrap_or(0.0),
                ..EnvJacks::default()
            };
            module.process(panel, &jacks)
        })
        .collect()
}

/// Load a preset by factory name, falling back to a `.toml` path.
pub fn load_preset(name: &str) -> anyhow::Result<EnvPreset> {
    EnvPreset::resolve(name).map_err(|e| {
        if matches!(e, ConfigError::PresetNotFound(_)) {
            anyhow::anyhow!("{e}. Use 'collide presets list' to see available presets.")
        } else {
            e.into()
        }
    })
}

/// Human-readable duration: milliseconds below one second.
pub fn format_time(seconds: f32) -> String {
    if seconds < 1.0 {
        format!("{:.1} ms", seconds * 1000.0)
    } else {
        format!("{seconds:.2} s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_span_parsing() {
        assert_eq!(
            parse_gate_span("0.5:1.25"),
            Ok(GateSpan {
                start: 0.5,
                end: 1.25
            })
        );
        assert!(parse_gate_span("1.0").is_err());
        assert!(parse_gate_span("2:1").is_err());
        assert!(parse_gate_span("-1:1").is_err());
        assert!(parse_gate_span("a:b").is_err());
    }

    #[test]
    fn spans_sample_to_volts() {
        let spans = [
            GateSpan { start: 0.0, end: 0.002 },
            GateSpan { start: 0.004, end: 0.005 },
        ];
        let volts = gate_volts(&spans, 6, 1000.0);
        assert_eq!(volts, vec![10.0, 10.0, 0.0, 0.0, 10.0, 0.0]);
    }

    #[test]
    fn knob_overrides_only_touch_given_fields() {
        let mut preset = EnvPreset::new("x").with_knobs(0.1, 0.2, 0.3, 0.4);
        let knobs = KnobArgs {
            mode: Some(CliMode::Trigger),
            sustain: Some(0.9),
            ..KnobArgs::default()
        };
        knobs.apply(&mut preset);
        assert_eq!(preset.mode, "trigger");
        assert_eq!(preset.attack, 0.1);
        assert_eq!(preset.sustain, 0.9);
    }

    #[test]
    fn factory_preset_resolves_by_name() {
        assert_eq!(load_preset("pad").unwrap().name, "Pad");
        let err = load_preset("definitely-not-a-preset").unwrap_err().to_string();
        assert!(err.contains("not found"), "got: {err}");
    }

    #[test]
    fn time_formatting() {
        assert_eq!(format_time(0.001), "1.0 ms");
        assert_eq!(format_time(2.5), "2.50 s");
    }
}
