//! Decoded PCM clips: loudness, time slicing and concatenation.
//!
//! Samples are interleaved f32 in [-1.0, 1.0]. All slicing is done on whole
//! frames so channels never drift out of alignment.

use std::path::Path;
use std::time::Duration;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tracing::debug;

use crate::error::{Result, VoiceOverError};

#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    sample_rate: u32,
    channels: u16,
    samples: Vec<f32>,
}

impl AudioClip {
    /// Build a clip from interleaved samples. A trailing partial frame is dropped.
    pub fn new(sample_rate: u32, channels: u16, mut samples: Vec<f32>) -> Self {
        let channels = channels.max(1);
        let whole = samples.len() / channels as usize * channels as usize;
        samples.truncate(whole);
        Self {
            sample_rate,
            channels,
            samples,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frames() as f64 / self.sample_rate as f64)
    }

    /// Number of frames covering `duration`, rounded down, at least one for
    /// any non-zero duration.
    pub fn frames_for(&self, duration: Duration) -> usize {
        let frames = (duration.as_secs_f64() * self.sample_rate as f64) as usize;
        if frames == 0 && !duration.is_zero() {
            1
        } else {
            frames
        }
    }

    /// Loudness of frames `[start, end)`, clamped to the clip.
    pub fn frame_range_dbfs(&self, start: usize, end: usize) -> f32 {
        dbfs(self.frame_slice(start, end))
    }

    /// Copy of frames `[start, end)`, clamped to the clip.
    pub fn slice_frames(&self, start: usize, end: usize) -> AudioClip {
        AudioClip {
            sample_rate: self.sample_rate,
            channels: self.channels,
            samples: self.frame_slice(start, end).to_vec(),
        }
    }

    /// Frames in reverse order, channel layout within each frame kept.
    pub fn reversed(&self) -> AudioClip {
        let samples = self
            .samples
            .chunks_exact(self.channels as usize)
            .rev()
            .flatten()
            .copied()
            .collect();
        AudioClip {
            sample_rate: self.sample_rate,
            channels: self.channels,
            samples,
        }
    }

    pub fn same_format(&self, other: &AudioClip) -> bool {
        self.sample_rate == other.sample_rate && self.channels == other.channels
    }

    /// Append `other` directly after this clip, with no gap or cross-fade.
    pub fn append(&mut self, other: &AudioClip) -> Result<()> {
        if !self.same_format(other) {
            return Err(VoiceOverError::FormatMismatch {
                expected: self.format_label(),
                found: other.format_label(),
            });
        }
        self.samples.extend_from_slice(&other.samples);
        Ok(())
    }

    fn format_label(&self) -> String {
        format!("{} Hz/{} ch", self.sample_rate, self.channels)
    }

    fn frame_slice(&self, start: usize, end: usize) -> &[f32] {
        let frames = self.frames();
        let start = start.min(frames);
        let end = end.clamp(start, frames);
        let ch = self.channels as usize;
        &self.samples[start * ch..end * ch]
    }

    /// Decode a WAV file of any integer bit depth or 32-bit float.
    pub fn from_wav(path: &Path) -> Result<Self> {
        let reader = WavReader::open(path)?;
        let spec = reader.spec();

        let samples: Vec<f32> = match spec.sample_format {
            SampleFormat::Float => reader.into_samples::<f32>().collect::<std::result::Result<_, _>>()?,
            SampleFormat::Int => {
                let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / scale))
                    .collect::<std::result::Result<_, _>>()?
            }
        };

        debug!(
            "Decoded {} ({} Hz, {} ch, {} samples)",
            path.display(),
            spec.sample_rate,
            spec.channels,
            samples.len()
        );

        Ok(Self::new(spec.sample_rate, spec.channels, samples))
    }

    /// Write the clip as a 32-bit float WAV.
    pub fn write_wav(&self, path: &Path) -> Result<()> {
        let spec = WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(path, spec)?;
        for &sample in &self.samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
        Ok(())
    }
}

/// RMS loudness in dB relative to full scale (1.0).
pub fn dbfs(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return f32::NEG_INFINITY;
    }
    let sum_sq: f32 = samples.iter().map(|s| s * s).sum();
    let rms = (sum_sq / samples.len() as f32).sqrt();
    if rms == 0.0 {
        f32::NEG_INFINITY
    } else {
        20.0 * rms.log10()
    }
}
