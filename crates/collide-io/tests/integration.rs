//! Integration tests for collide-io WAV I/O.

use collide_io::{
    Error, StereoSamples, WavFormat, WavSpec, read_wav, read_wav_info, read_wav_stereo, write_wav,
    write_wav_stereo,
};
use tempfile::{NamedTempFile, TempDir};

/// Exponential attack/release contour, the shape the envelope tools write.
fn contour(num_samples: usize) -> Vec<f32> {
    let half = num_samples / 2;
    (0..num_samples)
        .map(|i| {
            if i < half {
                1.0 - (-(i as f32) / 200.0).exp()
            } else {
                (-((i - half) as f32) / 300.0).exp()
            }
        })
        .collect()
}

fn sine_wave(sample_rate: u32, freq_hz: f32, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| (2.0 * std::f32::consts::PI * freq_hz * i as f32 / sample_rate as f32).sin())
        .collect()
}

// ---------------------------------------------------------------------------
// Mono
// ---------------------------------------------------------------------------

#[test]
fn envelope_roundtrip_is_bit_exact_at_32_bits() {
    for sr in [44100, 48000, 96000] {
        let samples = contour(4096);
        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &samples, WavSpec::mono(sr)).unwrap();

        let (loaded, spec) = read_wav(file.path()).unwrap();
        assert_eq!(spec.sample_rate, sr);
        assert_eq!(spec.channels, 1);
        assert_eq!(loaded, samples);
    }
}

#[test]
fn roundtrip_mono_i24() {
    let samples = sine_wave(48000, 440.0, 2048);
    let spec = WavSpec {
        bits_per_sample: 24,
        ..WavSpec::mono(48000)
    };
    let file = NamedTempFile::new().unwrap();
    write_wav(file.path(), &samples, spec).unwrap();

    let (loaded, loaded_spec) = read_wav(file.path()).unwrap();
    assert_eq!(loaded_spec.bits_per_sample, 24);
    for (a, b) in samples.iter().zip(&loaded) {
        assert!((a - b).abs() < 1e-5, "{a} vs {b}");
    }
}

#[test]
fn write_empty_buffer() {
    let file = NamedTempFile::new().unwrap();
    write_wav(file.path(), &[], WavSpec::default()).unwrap();
    let (loaded, _) = read_wav(file.path()).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn mono_writer_ignores_channel_count_in_spec() {
    let file = NamedTempFile::new().unwrap();
    write_wav(file.path(), &[0.1, 0.2, 0.3], WavSpec::stereo(48000)).unwrap();
    let info = read_wav_info(file.path()).unwrap();
    assert_eq!(info.channels, 1);
    assert_eq!(info.num_frames, 3);
}

#[test]
fn missing_file_is_wav_error() {
    let dir = TempDir::new().unwrap();
    let err = read_wav(dir.path().join("nope.wav")).unwrap_err();
    assert!(matches!(err, Error::Wav(_)), "got {err:?}");
}

// ---------------------------------------------------------------------------
// Stereo
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_stereo_f32() {
    let left = sine_wave(48000, 220.0, 1000);
    let right = contour(1000);
    let samples = StereoSamples::new(left.clone(), right.clone());

    let file = NamedTempFile::new().unwrap();
    write_wav_stereo(file.path(), &samples, WavSpec::stereo(48000)).unwrap();

    let (loaded, spec) = read_wav_stereo(file.path()).unwrap();
    assert_eq!(spec.channels, 2);
    assert_eq!(loaded.left, left);
    assert_eq!(loaded.right, right);
}

#[test]
fn roundtrip_stereo_i16() {
    let samples = StereoSamples::new(vec![0.5, -0.5, 0.25], vec![-0.25, 0.75, 0.0]);
    let spec = WavSpec {
        bits_per_sample: 16,
        ..WavSpec::stereo(44100)
    };
    let file = NamedTempFile::new().unwrap();
    write_wav_stereo(file.path(), &samples, spec).unwrap();

    let (loaded, _) = read_wav_stereo(file.path()).unwrap();
    for (a, b) in samples.to_interleaved().iter().zip(loaded.to_interleaved().iter()) {
        assert!((a - b).abs() < 1e-4);
    }
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

#[test]
fn info_reports_duration_and_format() {
    let file = NamedTempFile::new().unwrap();
    write_wav(file.path(), &vec![0.0; 24000], WavSpec::mono(48000)).unwrap();

    let info = read_wav_info(file.path()).unwrap();
    assert_eq!(info.format, WavFormat::IeeeFloat);
    assert_eq!(info.bits_per_sample, 32);
    assert!((info.duration_secs - 0.5).abs() < 1e-9);
}

#[test]
fn info_stereo_i16() {
    let samples = StereoSamples::from_mono(vec![0.0; 4410]);
    let spec = WavSpec {
        bits_per_sample: 16,
        ..WavSpec::stereo(44100)
    };
    let file = NamedTempFile::new().unwrap();
    write_wav_stereo(file.path(), &samples, spec).unwrap();

    let info = read_wav_info(file.path()).unwrap();
    assert_eq!(info.format, WavFormat::Pcm);
    assert_eq!(info.channels, 2);
    assert_eq!(info.num_frames, 4410);
}

// ---------------------------------------------------------------------------
// Bit depth
// ---------------------------------------------------------------------------

/// 8-bit PCM reads fine; writing it back goes through a 16-bit spec.
#[test]
fn eight_bit_input_writes_back_as_sixteen_bit() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("u8.wav");
    let output = dir.path().join("out.wav");

    let hound_spec = hound::WavSpec {
        channels: 1,
        sample_rate: 8000,
        bits_per_sample: 8,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&input, hound_spec).unwrap();
    for v in [0i8, 64, -64, 127] {
        writer.write_sample(v).unwrap();
    }
    writer.finalize().unwrap();

    let (samples, spec) = read_wav_stereo(&input).unwrap();
    assert_eq!(spec.bits_per_sample, 8);
    assert_eq!(samples.left, vec![0.0, 0.5, -0.5, 127.0 / 128.0]);

    assert!(matches!(
        write_wav(&output, &samples.left, spec),
        Err(Error::UnsupportedFormat(_))
    ));
    let out_spec = spec.writable();
    assert_eq!(out_spec.bits_per_sample, 16);
    assert_eq!(out_spec.sample_rate, 8000);
    write_wav(&output, &samples.left, out_spec).unwrap();
    assert_eq!(read_wav_info(&output).unwrap().bits_per_sample, 16);
}

#[test]
fn writable_keeps_supported_depths() {
    for bits in [16, 24, 32] {
        let spec = WavSpec {
            bits_per_sample: bits,
            ..WavSpec::stereo(44100)
        };
        assert_eq!(spec.writable(), spec);
    }
}
