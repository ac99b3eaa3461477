//! Deterministic WAV export.
//!
//! Writes 16-bit mono PCM WAV files with no timestamps or variable metadata,
//! so identical renders produce byte-identical files. The BLAKE3 hash of the
//! PCM payload is exposed for golden-output comparison in tests and CI.

use std::io::{self, Write};

use crate::render::Rendered;

/// WAV file format parameters. Output is always mono 16-bit.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl WavFormat {
    const CHANNELS: u16 = 1;
    const BITS_PER_SAMPLE: u16 = 16;

    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Bytes per sample frame.
    fn block_align(&self) -> u16 {
        Self::CHANNELS * Self::BITS_PER_SAMPLE / 8
    }

    /// Bytes per second of audio.
    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Writes a complete WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&WavFormat::CHANNELS.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&WavFormat::BITS_PER_SAMPLE.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Converts f32 samples to 16-bit PCM bytes.
///
/// Samples outside `[-1, 1]` are clipped; the renderer only guarantees that
/// range when normalization is on.
pub fn samples_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let pcm_value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    pcm
}

/// Result of WAV file generation.
#[derive(Debug)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Creates a WavResult from raw mono samples.
    pub fn from_mono(samples: &[f32], sample_rate: u32) -> Self {
        let pcm = samples_to_pcm16(samples);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::new(sample_rate);
        let wav_data = write_wav_to_vec(&format, &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Creates a WavResult from a finished render.
    pub fn from_rendered(rendered: &Rendered) -> Self {
        Self::from_mono(&rendered.samples, rendered.sample_rate.round() as u32)
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_format() {
        let format = WavFormat::new(44100);
        assert_eq!(format.byte_rate(), 88200);
        assert_eq!(format.block_align(), 2);
    }

    #[test]
    fn test_samples_to_pcm16() {
        let samples = vec![0.0, 1.0, -1.0, 0.5];
        let pcm = samples_to_pcm16(&samples);

        assert_eq!(pcm.len(), 8);
        assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 0);
        assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), 32767);
        assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), -32767);
    }

    #[test]
    fn test_clipping() {
        let pcm = samples_to_pcm16(&[2.0, -2.0]);
        assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 32767);
        assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), -32767);
    }

    #[test]
    fn test_wav_header_layout() {
        let result = WavResult::from_mono(&vec![0.0; 100], 44100);
        let wav = &result.wav_data;

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");

        // Mono
        assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1);
        // 100 samples * 2 bytes
        assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 200);
    }

    #[test]
    fn test_pcm_hash_determinism() {
        let samples = vec![0.5, -0.5, 0.3, -0.3, 0.0];

        let hash1 = WavResult::from_mono(&samples, 44100).pcm_hash;
        let hash2 = WavResult::from_mono(&samples, 44100).pcm_hash;

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_pcm_hash_sensitive_to_samples() {
        let hash1 = WavResult::from_mono(&[0.5, -0.5], 44100).pcm_hash;
        let hash2 = WavResult::from_mono(&[0.5, -0.4], 44100).pcm_hash;
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_duration() {
        let result = WavResult::from_mono(&vec![0.0; 22050], 44100);
        assert!((result.duration_seconds() - 0.5).abs() < 1e-9);
    }
}
