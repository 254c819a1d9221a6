//! Calendar date handling
//!
//! Warranty terms are computed on calendar dates in the seller's local zone.
//! This module provides:
//! - `Timezone`: an IANA zone with serde support
//! - `TimeProvider`: the injected source of "today"
//! - checked calendar arithmetic that reports overflow instead of panicking

use chrono::{DateTime, Days, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use std::str::FromStr;

/// Timezone wrapper for the seller's jurisdiction
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Timezone::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl Timezone {
    /// Parses an IANA zone name such as `America/Bogota`
    pub fn parse(name: &str) -> Result<Self, TemporalError> {
        Tz::from_str(name)
            .map(Timezone)
            .map_err(|_| TemporalError::UnknownTimezone(name.to_string()))
    }

    /// Returns the calendar date of a UTC instant in this timezone
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.0).date_naive()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Date overflow: cannot add {days} days to {date}")]
    DateOverflow {
        date: NaiveDate,
        days: u64,
    },
}

/// Source of the current calendar date
///
/// Injected into the warranty engine so tests can pin "today".
pub trait TimeProvider: Send + Sync {
    /// Returns today's date, truncated to the calendar day
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock
///
/// Without an explicit timezone the machine's local zone is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeProvider {
    timezone: Option<Timezone>,
}

impl SystemTimeProvider {
    /// Uses the machine's local timezone
    pub fn local() -> Self {
        Self { timezone: None }
    }

    /// Uses the given timezone regardless of the machine's setting
    pub fn in_timezone(timezone: Timezone) -> Self {
        Self {
            timezone: Some(timezone),
        }
    }
}

impl TimeProvider for SystemTimeProvider {
    fn today(&self) -> NaiveDate {
        match self.timezone {
            Some(tz) => tz.date_of(Utc::now()),
            None => Local::now().date_naive(),
        }
    }
}

/// Always answers the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimeProvider {
    date: NaiveDate,
}

impl FixedTimeProvider {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl TimeProvider for FixedTimeProvider {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

/// Adds whole calendar days to a date
pub fn add_calendar_days(date: NaiveDate, days: u64) -> Result<NaiveDate, TemporalError> {
    date.checked_add_days(Days::new(days))
        .ok_or(TemporalError::DateOverflow { date, days })
}

/// Returns the following calendar day
pub fn next_day(date: NaiveDate) -> Result<NaiveDate, TemporalError> {
    add_calendar_days(date, 1)
}
