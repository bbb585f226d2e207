//! date-voiceover: speaks a date and time from pre-recorded Russian word fragments.
//!
//! `compose` picks the fragments with the right number agreement, `assemble`
//! trims their silent edges and stitches them together, and a [`player::Playback`]
//! plays or saves the result.

pub mod assembler;
pub mod audio;
pub mod catalog;
pub mod clock;
pub mod composer;
pub mod config;
pub mod error;
pub mod fragment;
pub mod player;
pub mod trimmer;
pub mod voice_over;

pub use error::{Result, VoiceOverError};
pub use voice_over::{DateVoiceOver, When};
