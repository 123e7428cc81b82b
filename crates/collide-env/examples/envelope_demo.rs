//! Envelope demo: print the stage timeline of a gated and a triggered note.
//!
//! Run with: cargo run -p collide-env --example envelope_demo

use collide_env::{EnvelopeMode, EnvelopeState, GateDetector, Stage, StageParams};

fn timeline(mode: EnvelopeMode, gate_seconds: f32) {
    let sample_rate = 48000.0;
    let params = StageParams::from_knobs(0.3, 0.4, 0.6, 0.45);
    let mut env = EnvelopeState::new(sample_rate);
    let mut detector = GateDetector::new();

    let gate_samples = (gate_seconds * sample_rate) as usize;
    let mut prev = Stage::Idle;
    for n in 0..(sample_rate as usize * 4) {
        let frame = env.process(detector.process_gate(n < gate_samples), mode, &params);
        if frame.stage != prev {
            println!(
                "  {:>8.3} s  {:<8} env = {:.4}",
                n as f32 / sample_rate,
                frame.stage.name(),
                frame.value
            );
            prev = frame.stage;
        }
        if frame.end {
            println!("  {:>8.3} s  end of cycle", n as f32 / sample_rate);
        }
    }
    if prev != Stage::Idle {
        println!("  (still {} after 4 s)", prev.name());
    }
}

fn main() {
    println!("=== Gate mode, 1.5 s gate ===\n");
    timeline(EnvelopeMode::Gate, 1.5);

    println!("\n=== Trigger mode ===\n");
    timeline(EnvelopeMode::Trigger, 0.001);
}
