//! Calendar date and clock time values fed to the composer.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate, NaiveTime, Timelike};

use crate::error::{Result, VoiceOverError};

/// Time of day, hour 0..=23 and minute 0..=59.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(VoiceOverError::InvalidOverride(format!(
                "time {hour:02}:{minute:02} out of range"
            )));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Day and month. Day-for-month validity is checked by [`Moment::from_components`],
/// not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    day: u8,
    month: u8,
}

impl CalendarDate {
    pub fn new(day: u8, month: u8) -> Result<Self> {
        if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
            return Err(VoiceOverError::InvalidOverride(format!(
                "date {day:02}.{month:02} out of range"
            )));
        }
        Ok(Self { day, month })
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}", self.day, self.month)
    }
}

/// A date plus a time of day. The year is only used for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    pub date: CalendarDate,
    pub time: ClockTime,
}

impl Moment {
    /// Current local wall-clock date and time.
    pub fn now() -> Self {
        let now = Local::now();
        // chrono guarantees day 1..=31, month 1..=12, hour 0..=23, minute 0..=59
        Self {
            date: CalendarDate {
                day: now.day() as u8,
                month: now.month() as u8,
            },
            time: ClockTime {
                hour: now.hour() as u8,
                minute: now.minute() as u8,
            },
        }
    }

    /// Validate explicit components against the real calendar of `year`.
    pub fn from_components(day: u32, month: u32, year: i32, hour: u32, minute: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            VoiceOverError::InvalidOverride(format!("no such date {day:02}.{month:02}.{year}"))
        })?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            VoiceOverError::InvalidOverride(format!("no such time {hour:02}:{minute:02}"))
        })?;

        Ok(Self {
            date: CalendarDate {
                day: date.day() as u8,
                month: date.month() as u8,
            },
            time: ClockTime {
                hour: time.hour() as u8,
                minute: time.minute() as u8,
            },
        })
    }

    /// Normalized date string, `DD.MM`.
    pub fn date_string(&self) -> String {
        self.date.to_string()
    }

    /// Normalized time string, `HH:MM`.
    pub fn time_string(&self) -> String {
        self.time.to_string()
    }
}

impl Default for Moment {
    /// 01.01 00:00, the fallback when override mode has nothing set.
    fn default() -> Self {
        Self {
            date: CalendarDate { day: 1, month: 1 },
            time: ClockTime { hour: 0, minute: 0 },
        }
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}
