//! Equal-power panning command.

use clap::Args;
use collide_core::Panner;
use collide_io::{StereoSamples, WavSpec, read_wav, write_wav_stereo};
use std::path::PathBuf;

#[derive(Args)]
pub struct PanArgs {
    /// Input WAV file (mixed down to mono)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output stereo WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Pan position (-1 = left, 0 = center, 1 = right)
    #[arg(short, long, default_value = "0.0", allow_hyphen_values = true)]
    pan: f32,
}

pub fn run(args: PanArgs) -> anyhow::Result<()> {
    if !(-1.0..=1.0).contains(&args.pan) {
        anyhow::bail!("Pan must be in [-1, 1], got {}", args.pan);
    }

    let (input, spec) = read_wav(&args.input)?;
    let panner = Panner::new(args.pan);
    let (left, right) = input.iter().map(|&x| panner.process(x, None)).unzip();

    let out_spec = WavSpec {
        channels: 2,
        ..spec.writable()
    };
    write_wav_stereo(&args.output, &StereoSamples::new(left, right), out_spec)?;

    println!(
        "Panned {} to {:+.2} -> {}",
        args.input.display(),
        args.pan,
        args.output.display()
    );
    Ok(())
}
