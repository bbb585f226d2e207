//! Configuration management for date-voiceover.
//!
//! Loads config from YAML files in standard locations. Every section falls
//! back to its defaults when missing.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Result, VoiceOverError};
use crate::fragment::Category;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FragmentsConfig {
    /// Directory holding one sub-directory per category.
    pub root: PathBuf,
    pub hours: String,
    pub minutes: String,
    pub months: String,
    pub numbers: String,
    /// File extension of the recorded fragments, without the dot.
    pub extension: String,
}

impl Default for FragmentsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("audio"),
            hours: "hours".into(),
            minutes: "minutes".into(),
            months: "months".into(),
            numbers: "numbers".into(),
            extension: "wav".into(),
        }
    }
}

impl FragmentsConfig {
    /// Directory of one category's fragments.
    pub fn dir(&self, category: Category) -> PathBuf {
        let name = match category {
            Category::Hours => &self.hours,
            Category::Minutes => &self.minutes,
            Category::Months => &self.months,
            Category::Numbers => &self.numbers,
        };
        self.root.join(name)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SilenceConfig {
    /// Chunks quieter than this (dBFS) count as silence.
    pub threshold_db: f32,
    /// Scan step in milliseconds.
    pub chunk_ms: u64,
}

impl Default for SilenceConfig {
    fn default() -> Self {
        Self {
            threshold_db: -50.0,
            chunk_ms: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write the utterance here instead of playing it.
    pub wav_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fragments: FragmentsConfig,
    pub silence: SilenceConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from YAML file.
    ///
    /// Searches standard locations if no path is provided:
    /// 1. ./config.yaml
    /// 2. ~/.config/date-voiceover/config.yaml
    /// 3. /etc/date-voiceover/config.yaml
    pub fn load(path: Option<&Path>) -> Self {
        let resolved = path.map(PathBuf::from).or_else(|| {
            let candidates = [
                std::env::current_dir().ok().map(|d| d.join("config.yaml")),
                dirs::home_dir().map(|h| h.join(".config/date-voiceover/config.yaml")),
                Some(PathBuf::from("/etc/date-voiceover/config.yaml")),
            ];
            candidates.into_iter().flatten().find(|p| p.exists())
        });

        let Some(config_path) = resolved else {
            info!("No config file found, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match Self::from_yaml(&contents) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {e}, using defaults", config_path.display());
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}, using defaults", config_path.display());
                Self::default()
            }
        }
    }

    pub fn from_yaml(contents: &str) -> std::result::Result<Self, serde_yml::Error> {
        serde_yml::from_str(contents)
    }

    /// Startup checks for values that would otherwise fail deep inside a run.
    pub fn validate(&self) -> Result<()> {
        if self.silence.chunk_ms == 0 {
            return Err(VoiceOverError::InvalidConfig(
                "silence.chunk_ms must be greater than zero".into(),
            ));
        }
        if self.fragments.extension.trim_start_matches('.').is_empty() {
            return Err(VoiceOverError::InvalidConfig(
                "fragments.extension must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("silence:\n  threshold_db: -40.0\n").unwrap();
        assert_eq!(config.silence.threshold_db, -40.0);
        assert_eq!(config.silence.chunk_ms, 10);
        assert_eq!(config.fragments.extension, "wav");
        assert!(config.output.wav_path.is_none());
    }

    #[test]
    fn category_dirs_hang_off_the_root() {
        let config = Config::from_yaml("fragments:\n  root: /srv/voice\n  months: monthes\n").unwrap();
        assert_eq!(
            config.fragments.dir(Category::Months),
            PathBuf::from("/srv/voice/monthes")
        );
        assert_eq!(
            config.fragments.dir(Category::Hours),
            PathBuf::from("/srv/voice/hours")
        );
    }

    #[test]
    fn zero_chunk_fails_validation() {
        let config = Config::from_yaml("silence:\n  chunk_ms: 0\n").unwrap();
        assert!(matches!(config.validate(), Err(VoiceOverError::InvalidConfig(_))));
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/date-voiceover.yaml")));
        assert_eq!(config.silence.chunk_ms, 10);
    }
}
