//! Criterion benchmarks for collide-env components
//!
//! Run with: cargo bench -p collide-env
#![allow(missing_docs)]

use collide_env::{
    EnvJacks, EnvModule, EnvPanel, EnvelopeMode, EnvelopeState, SampleInputs, StageControls,
    StageParams,
};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

/// Gate stream with an edge every `period` samples, high for half of it.
fn gate_inputs(size: usize, period: usize) -> Vec<SampleInputs> {
    (0..size)
        .map(|i| match i % period {
            0 => SampleInputs::EDGE,
            n if n < period / 2 => SampleInputs::HIGH,
            _ => SampleInputs::LOW,
        })
        .collect()
}

fn bench_state_machine(c: &mut Criterion) {
    let mut group = c.benchmark_group("EnvelopeState");
    let params = StageParams::from_knobs(0.1, 0.2, 0.6, 0.2);

    for (name, mode) in [("Gate", EnvelopeMode::Gate), ("Trigger", EnvelopeMode::Trigger)] {
        for &block_size in BLOCK_SIZES {
            let inputs = gate_inputs(block_size, 48);
            let mut output = vec![0.0; block_size];
            let mut env = EnvelopeState::new(SAMPLE_RATE);

            group.bench_with_input(
                BenchmarkId::new(name, block_size),
                &block_size,
                |b, _| {
                    b.iter(|| {
                        let ends = env.render(black_box(&inputs), mode, &params, &mut output);
                        black_box(ends)
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_modulated(c: &mut Criterion) {
    let mut group = c.benchmark_group("EnvelopeState/modulated");

    for &block_size in BLOCK_SIZES {
        let inputs = gate_inputs(block_size, 256);
        let mut env = EnvelopeState::new(SAMPLE_RATE);

        group.bench_with_input(
            BenchmarkId::new("per_sample_params", block_size),
            &block_size,
            |b, &size| {
                b.iter(|| {
                    let mut sum = 0.0f32;
                    for (i, &input) in inputs.iter().enumerate() {
                        let knob = i as f32 / size as f32;
                        let params = StageParams::from_knobs(knob, knob, 0.5, knob);
                        sum += env.process(input, EnvelopeMode::Gate, &params).value;
                    }
                    black_box(sum)
                })
            },
        );
    }

    group.finish();
}

fn bench_module(c: &mut Criterion) {
    let mut group = c.benchmark_group("EnvModule");
    let panel = EnvPanel {
        attenuverters: StageControls::splat(0.5),
        ..EnvPanel::default()
    };

    for &block_size in BLOCK_SIZES {
        let mut module = EnvModule::new(SAMPLE_RATE);

        group.bench_with_input(
            BenchmarkId::new("process", block_size),
            &block_size,
            |b, &size| {
                b.iter(|| {
                    let mut sum = 0.0f32;
                    for i in 0..size {
                        let jacks = EnvJacks {
                            signal: 1.0,
                            gate: Some(if i % 64 < 32 { 10.0 } else { 0.0 }),
                            cv: StageControls::splat(1.0),
                        };
                        sum += module.process(&panel, &jacks).signal;
                    }
                    black_box(sum)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_state_machine, bench_modulated, bench_module);
criterion_main!(benches);
