//! Exponential ADSR contour generator.
//!
//! Attack, Decay and Release share one RC integrator ([`RcFilter`])
//! retargeted each sample: Attack charges toward 1.0, Decay toward the
//! sustain level, Release toward 0.0. Sustain is a flat hold that leaves the
//! integrator untouched. A stage ends when its output lands within
//! [`CONVERGENCE_EPSILON`] of the target, not after a fixed time, so the
//! contour stays glitch-free however its time constants are modulated.
//!
//! ```text
//!              rising edge
//!   ┌──────┐ ─────────────→ ┌────────┐  |env-1|≤ε   ┌───────┐  |env-S|≤ε  ┌─────────┐
//!   │ Idle │                │ Attack │ ───────────→ │ Decay │ ──────────→ │ Sustain │
//!   └──────┘ ←──┐           └────────┘   (gate)     └───────┘             └─────────┘
//!               │ env≤ε         │ (trigger)             │ gate low            │ gate low
//!               │           ┌─────────┐ ←───────────────┴─────────────────────┘
//!               └────────── │ Release │
//!                           └─────────┘
//! ```
//!
//! A rising edge restarts Attack from any stage without resetting the
//! integrator, so a retrigger re-attacks on a curve from the current level.

use collide_core::{RcFilter, SchmittTrigger, map_stage_time};

/// Distance from a stage target at which the stage counts as arrived.
pub const CONVERGENCE_EPSILON: f32 = 1e-3;

/// Normalized gate level at or above which a gate reads as high (1 V of 10 V).
pub const GATE_THRESHOLD: f32 = 0.1;

/// Envelope stages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Inactive, output is zero.
    #[default]
    Idle,
    /// Charging toward 1.0.
    Attack,
    /// Falling from the peak toward the sustain level.
    Decay,
    /// Flat hold at the sustain level while the gate stays high.
    Sustain,
    /// Discharging toward 0.0.
    Release,
}

impl Stage {
    /// The four active stages, in contour order.
    pub const ACTIVE: [Stage; 4] = [Stage::Attack, Stage::Decay, Stage::Sustain, Stage::Release];

    /// Position among [`Stage::ACTIVE`], or `None` for `Idle`.
    pub fn index(self) -> Option<usize> {
        match self {
            Stage::Idle => None,
            Stage::Attack => Some(0),
            Stage::Decay => Some(1),
            Stage::Sustain => Some(2),
            Stage::Release => Some(3),
        }
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Idle => "idle",
            Stage::Attack => "attack",
            Stage::Decay => "decay",
            Stage::Sustain => "sustain",
            Stage::Release => "release",
        }
    }
}

/// How the gate input is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EnvelopeMode {
    /// Hold Decay/Sustain while the gate is high; release when it drops.
    #[default]
    Gate,
    /// Edge only: every rising edge plays Attack then Release.
    Trigger,
}

/// Effective parameters for one sample: three time constants and a level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageParams {
    /// Attack time constant in seconds.
    pub attack: f32,
    /// Decay time constant in seconds.
    pub decay: f32,
    /// Sustain level in [0, 1].
    pub sustain: f32,
    /// Release time constant in seconds.
    pub release: f32,
}

impl StageParams {
    /// Derive parameters from normalized knob positions.
    ///
    /// Time knobs go through [`map_stage_time`]; the sustain knob is the level
    /// itself. All four are clamped to [0, 1] first.
    pub fn from_knobs(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self {
            attack: map_stage_time(attack),
            decay: map_stage_time(decay),
            sustain: sustain.clamp(0.0, 1.0),
            release: map_stage_time(release),
        }
    }
}

impl Default for StageParams {
    fn default() -> Self {
        Self::from_knobs(0.5, 0.5, 0.5, 0.5)
    }
}

/// What the gate input looked like on one sample.
///
/// The rising edge and the level are read from the same input sample, once,
/// before any transition rule runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SampleInputs {
    /// A rising edge was detected on this sample.
    pub rising: bool,
    /// The gate level is currently high.
    pub gate: bool,
}

impl SampleInputs {
    /// Gate held high, no new edge.
    pub const HIGH: Self = Self {
        rising: false,
        gate: true,
    };
    /// Gate low, no edge.
    pub const LOW: Self = Self {
        rising: false,
        gate: false,
    };
    /// Rising edge with the gate high.
    pub const EDGE: Self = Self {
        rising: true,
        gate: true,
    };
}

/// Derives [`SampleInputs`] from a normalized gate signal.
///
/// Edges come from a [`SchmittTrigger`] (fires at 1.0, re-arms at 0.0); the
/// level test is `level >= GATE_THRESHOLD`.
#[derive(Debug, Clone, Default)]
pub struct GateDetector {
    trigger: SchmittTrigger,
}

impl GateDetector {
    /// Create a detector in the low state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one normalized gate sample.
    #[inline]
    pub fn process(&mut self, level: f32) -> SampleInputs {
        SampleInputs {
            rising: self.trigger.process(level),
            gate: level >= GATE_THRESHOLD,
        }
    }

    /// Read one boolean gate sample.
    #[inline]
    pub fn process_gate(&mut self, high: bool) -> SampleInputs {
        self.process(if high { 1.0 } else { 0.0 })
    }

    /// Return to the low state.
    pub fn reset(&mut self) {
        self.trigger.reset();
    }
}

/// One sample of envelope output.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EnvFrame {
    /// Envelope value in [0, 1].
    pub value: f32,
    /// Stage that produced `value` (`Idle` when inactive).
    pub stage: Stage,
    /// The cycle completed on this sample.
    pub end: bool,
}

impl EnvFrame {
    /// Per-stage indicators in [`Stage::ACTIVE`] order; at most one is set.
    pub fn stage_gates(&self) -> [bool; 4] {
        let mut gates = [false; 4];
        if let Some(i) = self.stage.index() {
            gates[i] = true;
        }
        gates
    }
}

/// Envelope state machine owning its integrator.
///
/// # Example
///
/// ```rust
/// use collide_env::{EnvelopeMode, EnvelopeState, SampleInputs, Stage, StageParams};
///
/// let mut env = EnvelopeState::new(48000.0);
/// let params = StageParams::from_knobs(0.1, 0.3, 0.6, 0.4);
///
/// let frame = env.process(SampleInputs::EDGE, EnvelopeMode::Gate, &params);
/// assert_eq!(frame.stage, Stage::Attack);
///
/// for _ in 0..48000 {
///     env.process(SampleInputs::HIGH, EnvelopeMode::Gate, &params);
/// }
/// assert_eq!(env.stage(), Stage::Sustain);
/// ```
#[derive(Debug, Clone)]
pub struct EnvelopeState {
    stage: Stage,
    smoother: RcFilter,
}

impl Default for EnvelopeState {
    fn default() -> Self {
        Self::new(48000.0)
    }
}

impl EnvelopeState {
    /// Create an idle envelope.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            stage: Stage::Idle,
            smoother: RcFilter::new(sample_rate, map_stage_time(0.5)),
        }
    }

    /// Set sample rate. Takes effect on the next processed sample.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.smoother.set_sample_rate(sample_rate);
    }

    /// Current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// True from a rising edge until the cycle returns to `Idle`.
    pub fn is_active(&self) -> bool {
        self.stage != Stage::Idle
    }

    /// Persisted integrator value.
    pub fn level(&self) -> f32 {
        self.smoother.value()
    }

    /// Force the envelope idle and discharge the integrator.
    pub fn reset(&mut self) {
        self.stage = Stage::Idle;
        self.smoother.reset(0.0);
    }

    /// Advance one sample.
    ///
    /// Rules run in a fixed order: a rising edge restarts Attack; otherwise a
    /// low gate in Gate mode forces Release; then the active stage integrates
    /// and checks for convergence.
    pub fn process(
        &mut self,
        inputs: SampleInputs,
        mode: EnvelopeMode,
        params: &StageParams,
    ) -> EnvFrame {
        let was_active = self.is_active();

        if inputs.rising {
            self.enter(Stage::Attack);
        } else if mode == EnvelopeMode::Gate && !inputs.gate && self.is_active() {
            self.enter(Stage::Release);
        }

        let stage = self.stage;
        let value = match stage {
            Stage::Idle => 0.0,
            Stage::Attack => {
                self.smoother.set_tau(params.attack);
                let env = self.smoother.process(1.0);
                if (env - 1.0).abs() <= CONVERGENCE_EPSILON {
                    self.enter(match mode {
                        EnvelopeMode::Gate => Stage::Decay,
                        EnvelopeMode::Trigger => Stage::Release,
                    });
                }
                env
            }
            Stage::Decay => {
                self.smoother.set_tau(params.decay);
                let env = self.smoother.process(params.sustain);
                if (env - params.sustain).abs() <= CONVERGENCE_EPSILON {
                    self.enter(Stage::Sustain);
                }
                env
            }
            // Flat hold. The integrator keeps the level Decay converged to,
            // so Release departs from there whatever sustain does meanwhile.
            Stage::Sustain => params.sustain,
            Stage::Release => {
                self.smoother.set_tau(params.release);
                let env = self.smoother.process(0.0);
                if env <= CONVERGENCE_EPSILON {
                    self.enter(Stage::Idle);
                    self.smoother.reset(0.0);
                }
                env
            }
        };

        let end = was_active && self.stage == Stage::Idle;
        #[cfg(feature = "tracing")]
        if end {
            tracing::debug!("envelope cycle complete");
        }

        EnvFrame { value, stage, end }
    }

    /// Render a block from a stream of gate samples.
    ///
    /// Writes one value per input into `output` (the shorter of the two
    /// bounds the block) and returns how many cycles completed.
    pub fn render(
        &mut self,
        inputs: &[SampleInputs],
        mode: EnvelopeMode,
        params: &StageParams,
        output: &mut [f32],
    ) -> usize {
        let mut ends = 0;
        for (out, &input) in output.iter_mut().zip(inputs) {
            let frame = self.process(input, mode, params);
            *out = frame.value;
            ends += usize::from(frame.end);
        }
        ends
    }

    fn enter(&mut self, next: Stage) {
        if next != self.stage {
            #[cfg(feature = "tracing")]
            tracing::trace!(from = self.stage.name(), to = next.name(), "stage transition");
            self.stage = next;
        }
    }
}
