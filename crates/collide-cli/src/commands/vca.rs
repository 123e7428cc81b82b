//! Apply an envelope to an audio file.

use super::common::{EnvelopeArgs, run_module};
use clap::Args;
use collide_io::{StereoSamples, read_wav_stereo, write_wav, write_wav_stereo};
use std::path::PathBuf;

#[derive(Args)]
pub struct VcaArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    #[command(flatten)]
    envelope: EnvelopeArgs,
}

pub fn run(args: VcaArgs) -> anyhow::Result<()> {
    let (input, spec) = read_wav_stereo(&args.input)?;
    tracing::info!(
        path = %args.input.display(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        frames = input.len(),
        "loaded input"
    );

    let panel = args.envelope.panel()?;
    let sr = spec.sample_rate as f32;
    let gate = args.envelope.gate_volts(input.len(), sr);
    let outputs = run_module(&panel, sr, &gate, Some(&input.left));
    let out_spec = spec.writable();

    // Left goes through the module's VCA; right reuses the same contour.
    let left: Vec<f32> = outputs.iter().map(|o| o.signal).collect();
    if spec.channels == 1 {
        write_wav(&args.output, &left, out_spec)?;
    } else {
        let right = input
            .right
            .iter()
            .zip(&outputs)
            .map(|(x, o)| x * o.frame.value)
            .collect();
        write_wav_stereo(&args.output, &StereoSamples::new(left, right), out_spec)?;
    }

    println!(
        "Applied envelope to {} ({} frames) -> {}",
        args.input.display(),
        input.len(),
        args.output.display()
    );
    Ok(())
}
