//! Playback drivers: the default output device via rodio, or a WAV file.

use std::path::PathBuf;
use std::time::Instant;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, info, warn};

use crate::audio::AudioClip;
use crate::error::{Result, VoiceOverError};

/// Something that can take the final clip.
pub trait Playback {
    fn play(&self, clip: &AudioClip) -> Result<()>;
}

/// Plays through the default output device, blocking until the clip ends.
pub struct RodioPlayer {
    // Kept alive for the player's lifetime; dropping it stops output
    stream: OutputStream,
}

impl RodioPlayer {
    pub fn open() -> Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| VoiceOverError::Playback(format!("Failed to open audio output: {e}")))?;
        stream.log_on_drop(false);
        info!("Audio output opened");
        Ok(Self { stream })
    }
}

impl Playback for RodioPlayer {
    fn play(&self, clip: &AudioClip) -> Result<()> {
        if clip.is_empty() {
            warn!("Nothing to play");
            return Ok(());
        }

        let t0 = Instant::now();
        let sink = Sink::connect_new(self.stream.mixer());
        let source = SamplesBuffer::new(clip.channels(), clip.sample_rate(), clip.samples().to_vec());
        sink.append(source);
        sink.sleep_until_end();

        debug!(
            "Played {:.2}s clip in {}ms",
            clip.duration().as_secs_f64(),
            t0.elapsed().as_millis()
        );
        Ok(())
    }
}

/// Writes the clip to a WAV file instead of playing it.
pub struct WavFileSink {
    path: PathBuf,
}

impl WavFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Playback for WavFileSink {
    fn play(&self, clip: &AudioClip) -> Result<()> {
        clip.write_wav(&self.path)?;
        info!(
            "Wrote {:.2}s to {}",
            clip.duration().as_secs_f64(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wav_sink_writes_the_clip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wav");
        let clip = AudioClip::new(16000, 1, vec![0.25; 160]);

        WavFileSink::new(&path).play(&clip).unwrap();

        assert_eq!(AudioClip::from_wav(&path).unwrap(), clip);
    }

    #[test]
    fn wav_sink_reports_unwritable_paths() {
        let clip = AudioClip::new(16000, 1, vec![0.25; 16]);
        let sink = WavFileSink::new("/nonexistent-dir/out.wav");
        assert!(sink.play(&clip).is_err());
    }
}
