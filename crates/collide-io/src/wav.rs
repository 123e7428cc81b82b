//! WAV file reading and writing.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// Bit depths accepted by the writers.
const SUPPORTED_BITS: &[u16] = &[16, 24, 32];

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = u64::from(reader.len());
    let num_frames = total_samples / u64::from(spec.channels.max(1));
    let duration_secs = num_frames as f64 / f64::from(spec.sample_rate);

    let format = match spec.sample_format {
        SampleFormat::Float => WavFormat::IeeeFloat,
        SampleFormat::Int => WavFormat::Pcm,
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// WAV file specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample (16, 24, or 32; 32 is stored as float).
    pub bits_per_sample: u16,
}

impl WavSpec {
    /// Mono 32-bit float at the given rate.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            ..Self::default()
        }
    }

    /// Stereo 32-bit float at the given rate.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
            ..Self::default()
        }
    }

    /// The same layout at a bit depth the writers accept.
    ///
    /// Readers take any depth hound decodes (8-bit PCM included); writing
    /// back needs 16, 24, or 32 bits, so other depths fall back to 16-bit.
    pub fn writable(self) -> Self {
        if SUPPORTED_BITS.contains(&self.bits_per_sample) {
            self
        } else {
            Self {
                bits_per_sample: 16,
                ..self
            }
        }
    }
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

/// Two channels of equal length, stored planar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StereoSamples {
    /// Left channel.
    pub left: Vec<f32>,
    /// Right channel.
    pub right: Vec<f32>,
}

impl StereoSamples {
    /// Wrap two channels, truncating the longer one.
    pub fn new(mut left: Vec<f32>, mut right: Vec<f32>) -> Self {
        let len = left.len().min(right.len());
        left.truncate(len);
        right.truncate(len);
        Self { left, right }
    }

    /// Duplicate a mono signal to both channels.
    pub fn from_mono(samples: Vec<f32>) -> Self {
        Self {
            right: samples.clone(),
            left: samples,
        }
    }

    /// Split interleaved L/R frames. A trailing half frame is dropped.
    pub fn from_interleaved(samples: &[f32]) -> Self {
        let (left, right) = samples.chunks_exact(2).map(|lr| (lr[0], lr[1])).unzip();
        Self { left, right }
    }

    /// Interleave into L/R frames.
    pub fn to_interleaved(&self) -> Vec<f32> {
        self.left
            .iter()
            .zip(&self.right)
            .flat_map(|(&l, &r)| [l, r])
            .collect()
    }

    /// Average both channels.
    pub fn to_mono(&self) -> Vec<f32> {
        self.left
            .iter()
            .zip(&self.right)
            .map(|(l, r)| (l + r) * 0.5)
            .collect()
    }

    /// Frames per channel.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// True when there are no frames.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

fn check_bits(bits: u16) -> Result<()> {
    if SUPPORTED_BITS.contains(&bits) {
        Ok(())
    } else {
        Err(Error::UnsupportedFormat(format!(
            "{bits}-bit output (expected one of {SUPPORTED_BITS:?})"
        )))
    }
}

/// Full-scale integer value for a bit depth.
fn int_scale(bits: u16) -> f32 {
    (1i64 << (bits - 1)) as f32
}

fn read_interleaved<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, WavSpec)> {
    let path = path.as_ref();
    let reader = WavReader::open(path)?;
    let hound_spec = reader.spec();
    let spec = WavSpec::from(hound_spec);

    let samples: Vec<f32> = match hound_spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = int_scale(spec.bits_per_sample);
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    tracing::debug!(
        path = %path.display(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        samples = samples.len(),
        "read WAV"
    );
    Ok((samples, spec))
}

fn write_interleaved<P: AsRef<Path>>(path: P, samples: &[f32], spec: WavSpec) -> Result<()> {
    check_bits(spec.bits_per_sample)?;
    let path = path.as_ref();
    let mut writer = WavWriter::create(path, hound::WavSpec::from(spec))?;

    if spec.bits_per_sample == 32 {
        for &sample in samples {
            writer.write_sample(sample)?;
        }
    } else {
        let max_val = int_scale(spec.bits_per_sample);
        for &sample in samples {
            let int_sample = (sample * max_val).clamp(-max_val, max_val - 1.0) as i32;
            writer.write_sample(int_sample)?;
        }
    }

    writer.finalize()?;
    tracing::info!(
        path = %path.display(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        frames = samples.len() / usize::from(spec.channels.max(1)),
        "wrote WAV"
    );
    Ok(())
}

/// Read a WAV file and return samples as f32 along with the spec.
///
/// Multi-channel files are mixed down to mono by averaging channels.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, WavSpec)> {
    let (samples, spec) = read_interleaved(path)?;
    let channels = usize::from(spec.channels.max(1));

    let mono_samples = if channels > 1 {
        samples
            .chunks(channels)
            .map(|chunk| chunk.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    Ok((mono_samples, spec))
}

/// Write mono samples to a WAV file. `spec.channels` is forced to 1.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f32], spec: WavSpec) -> Result<()> {
    write_interleaved(
        path,
        samples,
        WavSpec {
            channels: 1,
            ..spec
        },
    )
}

/// Read a WAV file and return stereo samples along with the spec.
///
/// Mono files are duplicated to both channels. Files with more than two
/// channels keep only the first two.
pub fn read_wav_stereo<P: AsRef<Path>>(path: P) -> Result<(StereoSamples, WavSpec)> {
    let (all_samples, spec) = read_interleaved(path)?;
    let channels = usize::from(spec.channels.max(1));

    let stereo = match channels {
        1 => StereoSamples::from_mono(all_samples),
        2 => StereoSamples::from_interleaved(&all_samples),
        _ => {
            let (left, right) = all_samples
                .chunks_exact(channels)
                .map(|frame| (frame[0], frame[1]))
                .unzip();
            StereoSamples { left, right }
        }
    };

    Ok((stereo, spec))
}

/// Write stereo samples to a WAV file. `spec.channels` is forced to 2.
pub fn write_wav_stereo<P: AsRef<Path>>(
    path: P,
    samples: &StereoSamples,
    spec: WavSpec,
) -> Result<()> {
    write_interleaved(
        path,
        &samples.to_interleaved(),
        WavSpec {
            channels: 2,
            ..spec
        },
    )
}
