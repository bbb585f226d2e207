//! Fragment catalogs loaded from disk, one directory per category.
//!
//! Files are keyed by their stem: `audio/hours/Часов.wav` answers
//! `FragmentKey::Hour(HourForm::Plural)`. Read-only once loaded.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::audio::AudioClip;
use crate::config::FragmentsConfig;
use crate::error::{Result, VoiceOverError};
use crate::fragment::{Category, FragmentKey, VOCABULARY};

/// Entries dropped into recording folders by file managers.
const OS_METADATA: &[&str] = &["Thumbs.db", "desktop.ini"];

#[derive(Debug, Default)]
pub struct FragmentCatalog {
    clips: HashMap<Category, HashMap<String, AudioClip>>,
}

impl FragmentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode every fragment of every category under `config.root`.
    pub fn load(config: &FragmentsConfig) -> Result<Self> {
        let mut catalog = Self::new();
        let extension = config.extension.trim_start_matches('.');
        for category in Category::ALL {
            let dir = config.dir(category);
            let count = catalog.load_dir(category, &dir, extension)?;
            info!("Loaded {count} {category} fragments from {}", dir.display());
        }
        Ok(catalog)
    }

    fn load_dir(&mut self, category: Category, dir: &Path, extension: &str) -> Result<usize> {
        let mut count = 0;
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
                continue;
            };
            if name.starts_with('.') || OS_METADATA.contains(&name.as_str()) || !path.is_file() {
                debug!("Skipping {}", path.display());
                continue;
            }
            let matches_ext = path
                .extension()
                .is_some_and(|e| e.to_string_lossy().eq_ignore_ascii_case(extension));
            if !matches_ext {
                debug!("Skipping {} (not .{extension})", path.display());
                continue;
            }
            let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
                continue;
            };

            let clip = AudioClip::from_wav(&path)?;
            self.insert(category, stem, clip);
            count += 1;
        }
        Ok(count)
    }

    pub fn insert(&mut self, category: Category, stem: impl Into<String>, clip: AudioClip) {
        self.clips
            .entry(category)
            .or_default()
            .insert(stem.into(), clip);
    }

    /// Resolve a key to its clip.
    pub fn lookup(&self, key: FragmentKey) -> Result<&AudioClip> {
        let category = key.category();
        key.stem()
            .and_then(|stem| self.clips.get(&category)?.get(stem))
            .ok_or_else(|| VoiceOverError::UnknownFragment {
                category,
                key: key.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.clips.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Vocabulary keys with no recorded clip.
    pub fn missing_keys(&self) -> Vec<FragmentKey> {
        VOCABULARY
            .iter()
            .map(|(key, _)| *key)
            .filter(|key| self.lookup(*key).is_err())
            .collect()
    }

    /// Fail on the first vocabulary key without a clip.
    pub fn verify(&self) -> Result<()> {
        let missing = self.missing_keys();
        if let Some(first) = missing.first() {
            for key in &missing {
                warn!("No {} fragment for '{key}'", key.category());
            }
            return Err(VoiceOverError::UnknownFragment {
                category: first.category(),
                key: first.to_string(),
            });
        }
        Ok(())
    }
}
