//! Leading/trailing silence removal so stitched fragments run together.

use std::time::Duration;

use tracing::debug;

use crate::audio::AudioClip;
use crate::config::SilenceConfig;
use crate::error::{Result, VoiceOverError};

#[derive(Debug, Clone)]
pub struct SilenceTrimmer {
    threshold_db: f32,
    chunk: Duration,
}

impl SilenceTrimmer {
    /// Build a trimmer. The chunk size must be non-zero or the scan would never advance.
    pub fn new(config: &SilenceConfig) -> Result<Self> {
        if config.chunk_ms == 0 {
            return Err(VoiceOverError::InvalidConfig(
                "silence.chunk_ms must be greater than zero".into(),
            ));
        }
        if config.threshold_db.is_nan() {
            return Err(VoiceOverError::InvalidConfig(
                "silence.threshold_db must be a number".into(),
            ));
        }
        Ok(Self {
            threshold_db: config.threshold_db,
            chunk: Duration::from_millis(config.chunk_ms),
        })
    }

    /// Frames of near-silence at the start of the clip, in whole chunks.
    pub fn leading_silence(&self, clip: &AudioClip) -> usize {
        let chunk = clip.frames_for(self.chunk);
        let total = clip.frames();
        let mut trim = 0;
        while trim < total && clip.frame_range_dbfs(trim, trim + chunk) < self.threshold_db {
            trim += chunk;
        }
        trim.min(total)
    }

    /// Frames of near-silence at the end of the clip, in whole chunks counted
    /// back from the last frame.
    pub fn trailing_silence(&self, clip: &AudioClip) -> usize {
        let chunk = clip.frames_for(self.chunk);
        let total = clip.frames();
        let mut trim = 0;
        while trim < total
            && clip.frame_range_dbfs(total.saturating_sub(trim + chunk), total - trim)
                < self.threshold_db
        {
            trim += chunk;
        }
        trim.min(total)
    }

    /// Copy of the clip with edge silence removed. A clip that is silent
    /// throughout comes back empty.
    pub fn trim(&self, clip: &AudioClip) -> AudioClip {
        let total = clip.frames();
        let start = self.leading_silence(clip);
        let end = total - self.trailing_silence(clip);
        debug!("Trim {total} frames: keep [{start}, {end})");
        clip.slice_frames(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: u32 = 1000;

    fn trimmer() -> SilenceTrimmer {
        SilenceTrimmer::new(&SilenceConfig::default()).unwrap()
    }

    /// `silent_ms` of zeros, `loud_ms` of a 0.5 tone, `tail_ms` of zeros, at 1 kHz.
    fn padded(silent_ms: usize, loud_ms: usize, tail_ms: usize) -> AudioClip {
        let mut samples = vec![0.0; silent_ms];
        samples.extend((0..loud_ms).map(|i| if i % 2 == 0 { 0.5 } else { -0.5 }));
        samples.extend(vec![0.0; tail_ms]);
        AudioClip::new(RATE, 1, samples)
    }

    #[test]
    fn zero_chunk_is_rejected_at_construction() {
        let config = SilenceConfig {
            chunk_ms: 0,
            ..SilenceConfig::default()
        };
        assert!(matches!(
            SilenceTrimmer::new(&config),
            Err(VoiceOverError::InvalidConfig(_))
        ));
    }

    #[test]
    fn trims_both_edges() {
        let clip = padded(30, 100, 50);
        let trimmed = trimmer().trim(&clip);
        assert_eq!(trimmed.frames(), 100);
        assert!(trimmed.samples().iter().all(|s| s.abs() == 0.5));
    }

    #[test]
    fn trim_points_are_chunk_aligned() {
        // 15 ms of silence: the second 10 ms chunk already holds sound
        let clip = padded(15, 100, 0);
        assert_eq!(trimmer().leading_silence(&clip), 10);
        assert_eq!(trimmer().trim(&clip).frames(), 105);
    }

    #[test]
    fn quiet_noise_below_threshold_counts_as_silence() {
        let mut samples = vec![0.001; 20]; // about -60 dBFS
        samples.extend(vec![0.5; 40]);
        let clip = AudioClip::new(RATE, 1, samples);
        assert_eq!(trimmer().leading_silence(&clip), 20);
    }

    #[test]
    fn silent_clip_collapses_to_nothing() {
        let clip = AudioClip::new(RATE, 1, vec![0.0; 95]);
        let trimmed = trimmer().trim(&clip);
        assert!(trimmed.is_empty());
        assert_eq!(trimmed.duration(), Duration::ZERO);
    }

    #[test]
    fn empty_clip_stays_empty() {
        assert!(trimmer().trim(&AudioClip::new(RATE, 1, Vec::new())).is_empty());
    }

    #[test]
    fn trimming_twice_changes_nothing() {
        let once = trimmer().trim(&padded(40, 200, 70));
        let twice = trimmer().trim(&once);
        assert_eq!(once.duration(), twice.duration());
        assert_eq!(once, twice);
    }

    #[test]
    fn trailing_scan_matches_reversed_leading_scan() {
        let clip = padded(10, 60, 37);
        let t = trimmer();
        assert_eq!(t.trailing_silence(&clip), t.leading_silence(&clip.reversed()));
    }

    #[test]
    fn stereo_is_trimmed_per_frame() {
        let mut samples = vec![0.0; 20];
        samples.extend(vec![0.5; 40]);
        let clip = AudioClip::new(RATE, 2, samples);
        let trimmed = trimmer().trim(&clip);
        assert_eq!(trimmed.frames(), 20);
        assert_eq!(trimmed.channels(), 2);
    }

    #[test]
    fn threshold_is_configurable() {
        let lenient = SilenceTrimmer::new(&SilenceConfig {
            threshold_db: -3.0,
            chunk_ms: 10,
        })
        .unwrap();
        // a 0.5 tone is about -6 dBFS, quiet enough for this threshold
        assert!(lenient.trim(&padded(0, 100, 0)).is_empty());
    }
}
