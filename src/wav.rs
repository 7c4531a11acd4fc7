use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::{FilterError, Result};

/// Read a mono WAV file as f32 samples
///
/// Integer samples are scaled to [-1.0, 1.0). Returns the samples and the
/// sample rate.
///
/// # Errors
/// Returns `FilterError::Wav` if the file cannot be read or has more than one
/// channel.
pub fn read_mono_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, u32)> {
    let mut reader = WavReader::open(path.as_ref())?;
    let spec = reader.spec();

    if spec.channels != 1 {
        return Err(FilterError::Wav(format!(
            "expected mono WAV file, got {} channels",
            spec.channels
        )));
    }

    let samples = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = 2_i64.pow(spec.bits_per_sample as u32 - 1) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    log::debug!(
        "Read {} samples at {} Hz from {}",
        samples.len(),
        spec.sample_rate,
        path.as_ref().display()
    );

    Ok((samples, spec.sample_rate))
}

/// Write f32 samples to a mono 32-bit float WAV file
pub fn save_mono_wav<P: AsRef<Path>>(path: P, samples: &[f32], sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path.as_ref(), spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("iirfilter_{}_{}.wav", name, std::process::id()))
    }

    #[test]
    fn test_float_wav_preserves_samples() {
        let path = temp_path("float");
        let samples = [0.0, 0.5, -0.25, 1.0];

        save_mono_wav(&path, &samples, 8000).unwrap();
        let (read, rate) = read_mono_wav(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(rate, 8000);
        assert_eq!(read, samples);
    }

    #[test]
    fn test_int_wav_is_scaled() {
        let path = temp_path("int16");
        let spec = WavSpec {
            channels: 1,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        for v in [0i16, 16384, -32768] {
            writer.write_sample(v).unwrap();
        }
        writer.finalize().unwrap();

        let (read, rate) = read_mono_wav(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(rate, 16000);
        assert_eq!(read, vec![0.0, 0.5, -1.0]);
    }

    #[test]
    fn test_stereo_wav_rejected() {
        let path = temp_path("stereo");
        let spec = WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        writer.write_sample(0.0f32).unwrap();
        writer.write_sample(0.0f32).unwrap();
        writer.finalize().unwrap();

        let result = read_mono_wav(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(FilterError::Wav(_))));
    }
}
