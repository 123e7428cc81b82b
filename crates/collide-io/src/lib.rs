//! WAV file I/O for the collide tools.
//!
//! This crate provides:
//!
//! - **Mono I/O**: [`read_wav`] and [`write_wav`] for envelopes, control
//!   signals, and mixed-down audio
//! - **Stereo I/O**: [`read_wav_stereo`] and [`write_wav_stereo`] with the
//!   [`StereoSamples`] container for panned output
//! - **Metadata**: [`read_wav_info`] reads the header without loading samples
//!
//! Samples are always `f32`. Integer files are scaled to [-1, 1) on read and
//! clamped back on write; 32-bit files are stored as IEEE float.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use collide_io::{read_wav, write_wav};
//!
//! let (samples, spec) = read_wav("input.wav")?;
//! let quieter: Vec<f32> = samples.iter().map(|s| s * 0.5).collect();
//! write_wav("output.wav", &quieter, spec)?;
//! # Ok::<(), collide_io::Error>(())
//! ```

mod wav;

pub use wav::{
    StereoSamples, WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, read_wav_stereo,
    write_wav, write_wav_stereo,
};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The requested sample format is not supported.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
