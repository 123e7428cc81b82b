//! Voltage-level front end for the envelope.
//!
//! [`EnvModule`] wraps an [`EnvelopeState`] with everything between it and
//! the patch: knob plus attenuverted CV per stage, a gate that can come from a
//! cable or a manual button, 10 V output scaling, a VCA, and a 1 ms
//! end-of-cycle pulse.

use collide_core::{FULL_SCALE, PulseGenerator, modulate_unipolar, normalize_cv};

use crate::envelope::{EnvFrame, EnvelopeMode, EnvelopeState, GateDetector, Stage, StageParams};

/// One value per envelope control, in stage order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StageControls {
    /// Attack control.
    pub attack: f32,
    /// Decay control.
    pub decay: f32,
    /// Sustain control.
    pub sustain: f32,
    /// Release control.
    pub release: f32,
}

impl StageControls {
    /// All four controls at the same value.
    pub const fn splat(value: f32) -> Self {
        Self {
            attack: value,
            decay: value,
            sustain: value,
            release: value,
        }
    }
}

/// Front-panel settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvPanel {
    /// Gate or trigger mode.
    pub mode: EnvelopeMode,
    /// Knob positions in [0, 1].
    pub knobs: StageControls,
    /// Attenuverters in [-1, 1] applied to each CV input.
    pub attenuverters: StageControls,
    /// Manual gate button.
    pub button: bool,
}

impl Default for EnvPanel {
    fn default() -> Self {
        Self {
            mode: EnvelopeMode::Gate,
            knobs: StageControls::splat(0.5),
            attenuverters: StageControls::splat(0.0),
            button: false,
        }
    }
}

impl EnvPanel {
    /// Effective stage parameters for the given CV voltages.
    pub fn params(&self, cv: &StageControls) -> StageParams {
        let k = &self.knobs;
        let atv = &self.attenuverters;
        StageParams::from_knobs(
            modulate_unipolar(k.attack, normalize_cv(cv.attack), atv.attack),
            modulate_unipolar(k.decay, normalize_cv(cv.decay), atv.decay),
            modulate_unipolar(k.sustain, normalize_cv(cv.sustain), atv.sustain),
            modulate_unipolar(k.release, normalize_cv(cv.release), atv.release),
        )
    }
}

/// Input jacks for one sample, in volts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EnvJacks {
    /// Audio or CV routed through the VCA.
    pub signal: f32,
    /// Gate input; `None` when no cable is patched.
    pub gate: Option<f32>,
    /// Per-stage modulation, 0 V when unpatched.
    pub cv: StageControls,
}

/// Output jacks and panel lights for one sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EnvOutputs {
    /// Envelope in volts (0..10).
    pub env: f32,
    /// Stage gates in volts, 10 V for the stage that produced this sample.
    pub stage_gates: [f32; 4],
    /// Stage light brightness in [0, 1].
    pub lights: [f32; 4],
    /// Signal input scaled by the envelope.
    pub signal: f32,
    /// End-of-cycle pulse in volts.
    pub end: f32,
    /// Underlying normalized frame.
    pub frame: EnvFrame,
}

/// Normalized gate level seen by the edge detector.
///
/// A held button overrides the cable. A patched cable is read as volts / 10,
/// so a 10 V gate fires the trigger and anything from 1 V up holds the gate.
#[inline]
pub fn gate_level(button: bool, gate_volts: Option<f32>) -> f32 {
    match (button, gate_volts) {
        (true, _) => 1.0,
        (false, Some(volts)) => volts / FULL_SCALE,
        (false, None) => 0.0,
    }
}

/// Envelope module: state machine plus patch-level I/O.
///
/// # Example
///
/// ```rust
/// use collide_env::{EnvJacks, EnvModule, EnvPanel};
///
/// let mut module = EnvModule::new(48000.0);
/// let panel = EnvPanel::default();
/// let jacks = EnvJacks { gate: Some(10.0), signal: 5.0, ..Default::default() };
///
/// let out = module.process(&panel, &jacks);
/// assert!(out.env > 0.0 && out.env < 10.0);
/// assert_eq!(out.stage_gates, [10.0, 0.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct EnvModule {
    envelope: EnvelopeState,
    detector: GateDetector,
    end_pulse: PulseGenerator,
    sample_time: f32,
}

impl Default for EnvModule {
    fn default() -> Self {
        Self::new(48000.0)
    }
}

impl EnvModule {
    /// Create an idle module.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            envelope: EnvelopeState::new(sample_rate),
            detector: GateDetector::new(),
            end_pulse: PulseGenerator::default(),
            sample_time: 1.0 / sample_rate,
        }
    }

    /// Change the sample rate.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.envelope.set_sample_rate(sample_rate);
        self.sample_time = 1.0 / sample_rate;
    }

    /// The wrapped state machine.
    pub fn envelope(&self) -> &EnvelopeState {
        &self.envelope
    }

    /// Current stage.
    pub fn stage(&self) -> Stage {
        self.envelope.stage()
    }

    /// Return to idle, dropping any in-flight end pulse.
    pub fn reset(&mut self) {
        self.envelope.reset();
        self.detector.reset();
        self.end_pulse.reset();
    }

    /// Process one sample.
    pub fn process(&mut self, panel: &EnvPanel, jacks: &EnvJacks) -> EnvOutputs {
        let inputs = self.detector.process(gate_level(panel.button, jacks.gate));
        let params = panel.params(&jacks.cv);
        let frame = self.envelope.process(inputs, panel.mode, &params);

        if frame.end {
            self.end_pulse.trigger();
        }
        let end = self.end_pulse.process(self.sample_time);

        let lights = frame.stage_gates().map(|on| if on { 1.0 } else { 0.0 });
        EnvOutputs {
            env: frame.value * FULL_SCALE,
            stage_gates: lights.map(|l| l * FULL_SCALE),
            lights,
            signal: jacks.signal * frame.value,
            end: end * FULL_SCALE,
            frame,
        }
    }

    /// Render envelope voltages for a stream of gate voltages.
    ///
    /// CV and signal inputs are held at 0 V. Returns how many cycles
    /// completed.
    pub fn render(&mut self, panel: &EnvPanel, gate: &[f32], output: &mut [f32]) -> usize {
        let mut ends = 0;
        for (out, &volts) in output.iter_mut().zip(gate) {
            let jacks = EnvJacks {
                gate: Some(volts),
                ..EnvJacks::default()
            };
            let frame = self.process(panel, &jacks);
            *out = frame.env;
            ends += usize::from(frame.frame.end);
        }
        ends
    }
}
