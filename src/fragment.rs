//! Fragment vocabulary: every spoken unit the composer may ask for.
//!
//! Each key lives in exactly one category directory and is stored on disk
//! under a fixed file stem. The whole mapping is the [`VOCABULARY`] table,
//! so a catalog can be checked for completeness as soon as it is loaded.

use std::fmt;

/// The four fragment catalogs, one directory each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Hours,
    Minutes,
    Months,
    Numbers,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Hours,
        Category::Minutes,
        Category::Months,
        Category::Numbers,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hours => write!(f, "hours"),
            Self::Minutes => write!(f, "minutes"),
            Self::Months => write!(f, "months"),
            Self::Numbers => write!(f, "numbers"),
        }
    }
}

/// Declension of "час" agreeing with the preceding numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourForm {
    /// час
    Singular,
    /// часа
    Few,
    /// часов
    Plural,
}

/// Declension of "минута" agreeing with the preceding numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinuteForm {
    /// минута
    Singular,
    /// минуты
    Few,
    /// минут
    Plural,
}

/// One spoken unit, resolved to a clip through its category and stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKey {
    /// Bare cardinal: 1..=20 and the tens 30, 40, 50.
    Numeral(u8),
    /// Neuter ordinal used for the day of month: 1..=20, plus 0 after the tens of 30.
    DayOrdinal(u8),
    /// "одна", feminine one before "минута".
    FeminineOne,
    /// "две", feminine two before "минуты".
    FeminineTwo,
    /// Month name in the genitive, 1..=12.
    Month(u8),
    Hour(HourForm),
    Minute(MinuteForm),
}

/// Every known fragment with its file stem.
pub const VOCABULARY: &[(FragmentKey, &str)] = &[
    (FragmentKey::Numeral(1), "1"),
    (FragmentKey::Numeral(2), "2"),
    (FragmentKey::Numeral(3), "3"),
    (FragmentKey::Numeral(4), "4"),
    (FragmentKey::Numeral(5), "5"),
    (FragmentKey::Numeral(6), "6"),
    (FragmentKey::Numeral(7), "7"),
    (FragmentKey::Numeral(8), "8"),
    (FragmentKey::Numeral(9), "9"),
    (FragmentKey::Numeral(10), "10"),
    (FragmentKey::Numeral(11), "11"),
    (FragmentKey::Numeral(12), "12"),
    (FragmentKey::Numeral(13), "13"),
    (FragmentKey::Numeral(14), "14"),
    (FragmentKey::Numeral(15), "15"),
    (FragmentKey::Numeral(16), "16"),
    (FragmentKey::Numeral(17), "17"),
    (FragmentKey::Numeral(18), "18"),
    (FragmentKey::Numeral(19), "19"),
    (FragmentKey::Numeral(20), "20"),
    (FragmentKey::Numeral(30), "30"),
    (FragmentKey::Numeral(40), "40"),
    (FragmentKey::Numeral(50), "50"),
    // первое, второе, третье ... двадцатое; "0ое" follows "30" for the 30th
    (FragmentKey::DayOrdinal(0), "0ое"),
    (FragmentKey::DayOrdinal(1), "1ое"),
    (FragmentKey::DayOrdinal(2), "2ое"),
    (FragmentKey::DayOrdinal(3), "3ое"),
    (FragmentKey::DayOrdinal(4), "4ое"),
    (FragmentKey::DayOrdinal(5), "5ое"),
    (FragmentKey::DayOrdinal(6), "6ое"),
    (FragmentKey::DayOrdinal(7), "7ое"),
    (FragmentKey::DayOrdinal(8), "8ое"),
    (FragmentKey::DayOrdinal(9), "9ое"),
    (FragmentKey::DayOrdinal(10), "10ое"),
    (FragmentKey::DayOrdinal(11), "11ое"),
    (FragmentKey::DayOrdinal(12), "12ое"),
    (FragmentKey::DayOrdinal(13), "13ое"),
    (FragmentKey::DayOrdinal(14), "14ое"),
    (FragmentKey::DayOrdinal(15), "15ое"),
    (FragmentKey::DayOrdinal(16), "16ое"),
    (FragmentKey::DayOrdinal(17), "17ое"),
    (FragmentKey::DayOrdinal(18), "18ое"),
    (FragmentKey::DayOrdinal(19), "19ое"),
    (FragmentKey::DayOrdinal(20), "20ое"),
    (FragmentKey::FeminineOne, "1а"),
    (FragmentKey::FeminineTwo, "2е"),
    (FragmentKey::Month(1), "1"),
    (FragmentKey::Month(2), "2"),
    (FragmentKey::Month(3), "3"),
    (FragmentKey::Month(4), "4"),
    (FragmentKey::Month(5), "5"),
    (FragmentKey::Month(6), "6"),
    (FragmentKey::Month(7), "7"),
    (FragmentKey::Month(8), "8"),
    (FragmentKey::Month(9), "9"),
    (FragmentKey::Month(10), "10"),
    (FragmentKey::Month(11), "11"),
    (FragmentKey::Month(12), "12"),
    (FragmentKey::Hour(HourForm::Singular), "Час"),
    (FragmentKey::Hour(HourForm::Few), "Часа"),
    (FragmentKey::Hour(HourForm::Plural), "Часов"),
    (FragmentKey::Minute(MinuteForm::Singular), "Минута"),
    (FragmentKey::Minute(MinuteForm::Few), "Минуты"),
    (FragmentKey::Minute(MinuteForm::Plural), "Минут"),
];

impl FragmentKey {
    pub fn category(&self) -> Category {
        match self {
            Self::Numeral(_) | Self::DayOrdinal(_) | Self::FeminineOne | Self::FeminineTwo => {
                Category::Numbers
            }
            Self::Month(_) => Category::Months,
            Self::Hour(_) => Category::Hours,
            Self::Minute(_) => Category::Minutes,
        }
    }

    /// File stem of this fragment, or `None` for a key outside the vocabulary.
    pub fn stem(&self) -> Option<&'static str> {
        VOCABULARY
            .iter()
            .find(|(key, _)| key == self)
            .map(|(_, stem)| *stem)
    }

    pub fn is_known(&self) -> bool {
        self.stem().is_some()
    }
}

impl fmt::Display for FragmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stem() {
            Some(stem) => write!(f, "{stem}"),
            None => write!(f, "{self:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn stems_are_unique_within_a_category() {
        let mut seen = HashSet::new();
        for (key, stem) in VOCABULARY {
            assert!(
                seen.insert((key.category(), *stem)),
                "duplicate stem {stem} in {}",
                key.category()
            );
        }
    }

    #[test]
    fn every_category_has_fragments() {
        for category in Category::ALL {
            assert!(VOCABULARY.iter().any(|(key, _)| key.category() == category));
        }
    }

    #[test]
    fn ordinal_table_covers_days_one_to_twenty() {
        for day in 1..=20u8 {
            assert_eq!(
                FragmentKey::DayOrdinal(day).stem(),
                Some(format!("{day}ое").as_str())
            );
        }
    }

    #[test]
    fn keys_outside_the_table_are_unknown() {
        assert!(!FragmentKey::Numeral(0).is_known());
        assert!(!FragmentKey::Numeral(21).is_known());
        assert!(!FragmentKey::DayOrdinal(30).is_known());
        assert!(!FragmentKey::Month(13).is_known());
        assert_eq!(FragmentKey::Numeral(0).to_string(), "Numeral(0)");
    }

    #[test]
    fn feminine_forms_live_with_numbers() {
        assert_eq!(FragmentKey::FeminineOne.category(), Category::Numbers);
        assert_eq!(FragmentKey::FeminineTwo.to_string(), "2е");
        assert_eq!(FragmentKey::Hour(HourForm::Few).to_string(), "Часа");
        assert_eq!(FragmentKey::Minute(MinuteForm::Plural).category(), Category::Minutes);
    }
}
