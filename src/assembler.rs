//! Stitches the clips of an utterance into one gapless clip.

use tracing::debug;

use crate::audio::AudioClip;
use crate::catalog::FragmentCatalog;
use crate::composer::Utterance;
use crate::error::{Result, VoiceOverError};
use crate::trimmer::SilenceTrimmer;

/// Look up, trim and concatenate every fragment in order.
///
/// All-or-nothing: an unknown fragment or a format mismatch aborts the whole
/// utterance before anything is returned for playback.
pub fn assemble(
    utterance: &Utterance,
    catalog: &FragmentCatalog,
    trimmer: &SilenceTrimmer,
) -> Result<AudioClip> {
    let mut keys = utterance.iter();
    let first = keys.next().ok_or(VoiceOverError::EmptyUtterance)?;

    let mut result = trimmer.trim(catalog.lookup(*first)?);
    for key in keys {
        let clip = trimmer.trim(catalog.lookup(*key)?);
        result.append(&clip)?;
    }

    debug!(
        "Assembled {} fragments into {:.2}s",
        utterance.len(),
        result.duration().as_secs_f64()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SilenceConfig;
    use crate::fragment::{Category, FragmentKey, HourForm, MinuteForm};

    const RATE: u32 = 1000;

    fn trimmer() -> SilenceTrimmer {
        SilenceTrimmer::new(&SilenceConfig::default()).unwrap()
    }

    fn padded(level: f32, loud_ms: usize) -> AudioClip {
        let mut samples = vec![0.0; 20];
        samples.extend(vec![level; loud_ms]);
        samples.extend(vec![0.0; 30]);
        AudioClip::new(RATE, 1, samples)
    }

    fn catalog() -> FragmentCatalog {
        let mut catalog = FragmentCatalog::new();
        catalog.insert(Category::Numbers, "12", padded(0.3, 100));
        catalog.insert(Category::Hours, "Часов", padded(0.4, 60));
        catalog.insert(Category::Minutes, "Минут", padded(0.5, 40));
        catalog
    }

    fn midnight() -> Utterance {
        Utterance::from(vec![
            FragmentKey::Numeral(12),
            FragmentKey::Hour(HourForm::Plural),
            FragmentKey::Minute(MinuteForm::Plural),
        ])
    }

    #[test]
    fn concatenates_trimmed_fragments_in_order() {
        let clip = assemble(&midnight(), &catalog(), &trimmer()).unwrap();
        assert_eq!(clip.frames(), 200);
        let samples = clip.samples();
        assert_eq!(samples[0], 0.3);
        assert_eq!(samples[99], 0.3);
        assert_eq!(samples[100], 0.4);
        assert_eq!(samples[160], 0.5);
    }

    #[test]
    fn duration_is_the_sum_of_trimmed_fragments() {
        let catalog = catalog();
        let trimmer = trimmer();
        let utterance = midnight();
        let expected: f64 = utterance
            .iter()
            .map(|key| trimmer.trim(catalog.lookup(*key).unwrap()).duration().as_secs_f64())
            .sum();
        let clip = assemble(&utterance, &catalog, &trimmer).unwrap();
        assert!((clip.duration().as_secs_f64() - expected).abs() < 1e-6);
    }

    #[test]
    fn empty_utterance_is_an_error() {
        assert!(matches!(
            assemble(&Utterance::default(), &catalog(), &trimmer()),
            Err(VoiceOverError::EmptyUtterance)
        ));
    }

    #[test]
    fn missing_fragment_aborts_the_utterance() {
        let utterance = Utterance::from(vec![
            FragmentKey::Numeral(12),
            FragmentKey::Hour(HourForm::Few),
        ]);
        assert!(matches!(
            assemble(&utterance, &catalog(), &trimmer()),
            Err(VoiceOverError::UnknownFragment {
                category: Category::Hours,
                ..
            })
        ));
    }

    #[test]
    fn mixed_sample_rates_are_rejected() {
        let mut catalog = catalog();
        catalog.insert(Category::Minutes, "Минут", AudioClip::new(44100, 1, vec![0.5; 441]));
        assert!(matches!(
            assemble(&midnight(), &catalog, &trimmer()),
            Err(VoiceOverError::FormatMismatch { .. })
        ));
    }
}
