//! Error type shared by every stage of the voice-over pipeline.

use thiserror::Error;

use crate::fragment::Category;

#[derive(Debug, Error)]
pub enum VoiceOverError {
    /// A key has no clip in its catalog: the fragment set on disk is incomplete.
    #[error("fragment '{key}' missing from the {category} catalog")]
    UnknownFragment { category: Category, key: String },

    #[error("utterance is empty, nothing to assemble")]
    EmptyUtterance,

    #[error("invalid date/time override: {0}")]
    InvalidOverride(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("fragment format mismatch: expected {expected}, found {found}")]
    FormatMismatch { expected: String, found: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("playback error: {0}")]
    Playback(String),
}

pub type Result<T> = std::result::Result<T, VoiceOverError>;
