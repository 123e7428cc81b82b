//! Envelope follower command.

use clap::Args;
use collide_core::EnvelopeFollower;
use collide_io::{StereoSamples, read_wav_stereo, write_wav, write_wav_stereo};
use std::path::PathBuf;

#[derive(Args)]
pub struct FollowArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file (one envelope per input channel)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Sensitivity (0-1); higher releases faster
    #[arg(short, long, default_value = "0.5")]
    sensitivity: f32,
}

fn follow(samples: &[f32], sample_rate: f32, sensitivity: f32) -> Vec<f32> {
    let mut follower = EnvelopeFollower::with_sensitivity(sample_rate, sensitivity);
    samples.iter().map(|&x| follower.process(x)).collect()
}

pub fn run(args: FollowArgs) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&args.sensitivity) {
        anyhow::bail!("Sensitivity must be in [0, 1], got {}", args.sensitivity);
    }

    let (input, spec) = read_wav_stereo(&args.input)?;
    let sr = spec.sample_rate as f32;
    let left = follow(&input.left, sr, args.sensitivity);
    let out_spec = spec.writable();

    if spec.channels == 1 {
        write_wav(&args.output, &left, out_spec)?;
    } else {
        let right = follow(&input.right, sr, args.sensitivity);
        write_wav_stereo(&args.output, &StereoSamples::new(left, right), out_spec)?;
    }

    let tau = EnvelopeFollower::with_sensitivity(sr, args.sensitivity).release_tau();
    println!(
        "Followed {} (release tau {:.2} s) -> {}",
        args.input.display(),
        tau,
        args.output.display()
    );
    Ok(())
}
