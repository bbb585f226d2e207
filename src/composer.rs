//! Rule engine turning a date and time into the ordered fragment keys of a
//! spoken Russian phrase, e.g. 23.03 21:02 becomes
//! "двадцать третье марта двадцать один час две минуты".
//!
//! Agreement follows the usual declension: a last digit of 1 takes the
//! singular, 2..=4 the "few" form, anything else the plural, with 10..=20
//! always plural.

use std::fmt;

use crate::clock::{CalendarDate, ClockTime};
use crate::fragment::{FragmentKey, HourForm, MinuteForm};

/// The words to speak, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Utterance(Vec<FragmentKey>);

impl Utterance {
    pub fn keys(&self) -> &[FragmentKey] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FragmentKey> {
        self.0.iter()
    }
}

impl From<Vec<FragmentKey>> for Utterance {
    fn from(keys: Vec<FragmentKey>) -> Self {
        Self(keys)
    }
}

impl<'a> IntoIterator for &'a Utterance {
    type Item = &'a FragmentKey;
    type IntoIter = std::slice::Iter<'a, FragmentKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Utterance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

/// Compose the full date-then-time utterance.
pub fn compose(date: CalendarDate, time: ClockTime) -> Utterance {
    let mut keys = Vec::with_capacity(8);
    push_date(&mut keys, date);
    push_hour(&mut keys, time.hour());
    push_minute(&mut keys, time.minute());
    Utterance(keys)
}

fn push_date(keys: &mut Vec<FragmentKey>, date: CalendarDate) {
    let day = date.day();
    if day <= 20 {
        keys.push(FragmentKey::DayOrdinal(day));
    } else {
        keys.push(FragmentKey::Numeral(day / 10 * 10));
        keys.push(FragmentKey::DayOrdinal(day % 10));
    }
    keys.push(FragmentKey::Month(date.month()));
}

fn push_hour(keys: &mut Vec<FragmentKey>, hour: u8) {
    if hour == 0 {
        // midnight is spoken as twelve
        keys.push(FragmentKey::Numeral(12));
    } else {
        let mut rest = hour;
        if rest > 20 {
            keys.push(FragmentKey::Numeral(rest / 10 * 10));
            rest %= 10;
        }
        if rest != 0 {
            keys.push(FragmentKey::Numeral(rest));
        }
    }
    keys.push(FragmentKey::Hour(hour_form(hour)));
}

fn push_minute(keys: &mut Vec<FragmentKey>, minute: u8) {
    let mut rest = minute;
    if rest >= 20 {
        keys.push(FragmentKey::Numeral(rest / 10 * 10));
        rest %= 10;
    }

    match rest {
        1 => {
            keys.push(FragmentKey::FeminineOne);
            keys.push(FragmentKey::Minute(MinuteForm::Singular));
        }
        2 => {
            keys.push(FragmentKey::FeminineTwo);
            keys.push(FragmentKey::Minute(MinuteForm::Few));
        }
        _ => {
            if rest != 0 {
                keys.push(FragmentKey::Numeral(rest));
            }
            let form = if (1..5).contains(&rest) {
                MinuteForm::Few
            } else {
                MinuteForm::Plural
            };
            keys.push(FragmentKey::Minute(form));
        }
    }
}

/// Form of "час" for the unreduced hour.
pub fn hour_form(hour: u8) -> HourForm {
    if (10..=20).contains(&hour) {
        return HourForm::Plural;
    }
    match hour % 10 {
        1 => HourForm::Singular,
        2..=4 => HourForm::Few,
        _ => HourForm::Plural,
    }
}
