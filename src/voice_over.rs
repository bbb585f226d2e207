//! The voice-over context: fragments, trimmer and an optional date override.

use tracing::{debug, info};

use crate::assembler::assemble;
use crate::audio::AudioClip;
use crate::catalog::FragmentCatalog;
use crate::clock::Moment;
use crate::composer::{compose, Utterance};
use crate::error::Result;
use crate::player::Playback;
use crate::trimmer::SilenceTrimmer;

/// Which date and time to speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum When {
    /// Current local wall clock.
    #[default]
    Now,
    /// The last moment set through [`DateVoiceOver::set_date`] or spoken, or
    /// 01.01 00:00 if none.
    Override,
}

pub struct DateVoiceOver {
    catalog: FragmentCatalog,
    trimmer: SilenceTrimmer,
    moment: Option<Moment>,
}

impl DateVoiceOver {
    pub fn new(catalog: FragmentCatalog, trimmer: SilenceTrimmer) -> Self {
        Self {
            catalog,
            trimmer,
            moment: None,
        }
    }

    /// Store an explicit date and time. The year is only used to validate the day.
    /// An invalid call leaves the previous override in place.
    pub fn set_date(&mut self, day: u32, month: u32, year: i32, hour: u32, minute: u32) -> Result<()> {
        let moment = Moment::from_components(day, month, year, hour, minute)?;
        info!("Override set to {moment}");
        self.moment = Some(moment);
        Ok(())
    }

    pub fn date_string(&self) -> Option<String> {
        self.moment.map(|m| m.date_string())
    }

    pub fn time_string(&self) -> Option<String> {
        self.moment.map(|m| m.time_string())
    }

    /// The moment to speak. Reading the wall clock also stores it, so a later
    /// [`When::Override`] repeats the last moment spoken.
    pub fn resolve(&mut self, when: When) -> Moment {
        match when {
            When::Now => *self.moment.insert(Moment::now()),
            When::Override => *self.moment.get_or_insert_with(Moment::default),
        }
    }

    pub fn utterance(&mut self, when: When) -> Utterance {
        let moment = self.resolve(when);
        let utterance = compose(moment.date, moment.time);
        debug!("{moment} -> {utterance}");
        utterance
    }

    pub fn render(&mut self, when: When) -> Result<AudioClip> {
        let utterance = self.utterance(when);
        assemble(&utterance, &self.catalog, &self.trimmer)
    }

    /// Render and hand the clip to `player`. Nothing is played if rendering fails.
    pub fn speak(&mut self, when: When, player: &dyn Playback) -> Result<()> {
        let clip = self.render(when)?;
        player.play(&clip)
    }
}
