//! Envelope rendering command.

use super::common::{EnvelopeArgs, run_module};
use clap::Args;
use collide_config::validate_sample_rate;
use collide_env::EnvOutputs;
use collide_io::{WavSpec, write_wav};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct RenderArgs {
    /// Output file (WAV, or CSV with --csv)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    #[command(flatten)]
    envelope: EnvelopeArgs,

    /// Duration in seconds
    #[arg(long, default_value = "2.0")]
    duration: f32,

    /// Sample rate (default: the preset's, 48000 without one)
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Write a CSV table (time, env, stage gates, end pulse) instead of WAV
    #[arg(long)]
    csv: bool,
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    if args.duration.is_nan() || args.duration <= 0.0 {
        anyhow::bail!("Duration must be positive, got {}", args.duration);
    }
    let preset = args.envelope.preset()?;
    let sample_rate = args.sample_rate.unwrap_or(preset.sample_rate);
    validate_sample_rate(sample_rate)?;

    let panel = preset.panel()?;
    let sr = sample_rate as f32;
    let num_samples = (args.duration * sr).round() as usize;
    let gate = args.envelope.gate_volts(num_samples, sr);

    tracing::debug!(?panel, num_samples, "rendering envelope");
    let outputs = run_module(&panel, sr, &gate, None);
    let cycles = outputs.iter().filter(|o| o.frame.end).count();

    if args.csv {
        write_csv(&args.output, &outputs, sr)?;
    } else {
        let samples: Vec<f32> = outputs.iter().map(|o| o.frame.value).collect();
        write_wav(&args.output, &samples, WavSpec::mono(sample_rate))?;
    }

    println!(
        "Rendered {:.2} s envelope ({} samples at {} Hz, {} completed cycle{}) to {}",
        args.duration,
        num_samples,
        sample_rate,
        cycles,
        if cycles == 1 { "" } else { "s" },
        args.output.display()
    );
    Ok(())
}

fn write_csv(path: &Path, outputs: &[EnvOutputs], sample_rate: f32) -> anyhow::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "time,env,attack,decay,sustain,release,end")?;
    for (n, o) in outputs.iter().enumerate() {
        let [a, d, s, r] = o.frame.stage_gates().map(u8::from);
        let end = u8::from(o.end > 0.0);
        writeln!(
            out,
            "{:.6},{:.6},{a},{d},{s},{r},{end}",
            n as f32 / sample_rate,
            o.frame.value
        )?;
    }
    out.flush()?;
    tracing::info!(path = %path.display(), rows = outputs.len(), "wrote CSV");
    Ok(())
}
