//! Parser for age expressions such as `1d`, `2w`, `6m` and `1y`.
//!
//! Grammar: `<positive integer><unit>` with unit one of `d`, `w`, `m`, `y`.
//! - surrounding ASCII whitespace is ignored
//! - the unit is case-sensitive, so `1M` or `1D` are rejected
//! - no sign, no inner whitespace, magnitude between 1 and `u32::MAX`
//!
//! Months and years are fixed approximations (30 and 365 days).

use crate::error::{CleanerError, Result};
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUnit {
    Day,
    Week,
    Month,
    Year,
}

impl IntervalUnit {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "d" => Some(IntervalUnit::Day),
            "w" => Some(IntervalUnit::Week),
            "m" => Some(IntervalUnit::Month),
            "y" => Some(IntervalUnit::Year),
            _ => None,
        }
    }

    fn suffix(self) -> char {
        match self {
            IntervalUnit::Day => 'd',
            IntervalUnit::Week => 'w',
            IntervalUnit::Month => 'm',
            IntervalUnit::Year => 'y',
        }
    }

    /// Length of one unit in days
    pub fn days(self) -> u64 {
        match self {
            IntervalUnit::Day => 1,
            IntervalUnit::Week => 7,
            IntervalUnit::Month => 30,
            IntervalUnit::Year => 365,
        }
    }
}

/// A parsed minimum age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub magnitude: u32,
    pub unit: IntervalUnit,
}

impl Interval {
    pub fn new(magnitude: u32, unit: IntervalUnit) -> Self {
        Self { magnitude, unit }
    }

    /// Total length in whole days
    pub fn days(&self) -> u64 {
        u64::from(self.magnitude) * self.unit.days()
    }

    /// The interval as a duration usable for instant arithmetic.
    ///
    /// `None` when the duration exceeds what `TimeDelta` can hold.
    pub fn to_duration(&self) -> Option<TimeDelta> {
        i64::try_from(self.days()).ok().and_then(TimeDelta::try_days)
    }

    /// The newest creation instant that is still at least this old at `now`.
    ///
    /// `None` when the cutoff falls before the earliest representable
    /// instant, in which case nothing can be old enough.
    pub fn cutoff_from(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.to_duration()
            .and_then(|duration| now.checked_sub_signed(duration))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit.suffix())
    }
}

impl FromStr for Interval {
    type Err = CleanerError;

    fn from_str(s: &str) -> Result<Self> {
        parse_interval(s)
    }
}

/// Parse an age expression into an `Interval`.
pub fn parse_interval(input: &str) -> Result<Interval> {
    let invalid = |reason: &str| CleanerError::InvalidIntervalFormat {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid("empty expression"));
    }

    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| invalid("missing unit (expected one of d, w, m, y)"))?;
    let (digits, suffix) = trimmed.split_at(split);

    if digits.is_empty() {
        return Err(invalid("expected a positive whole number before the unit"));
    }
    let unit = IntervalUnit::from_suffix(suffix).ok_or_else(|| {
        invalid(&format!(
            "unknown unit '{}' (expected one of d, w, m, y)",
            suffix
        ))
    })?;
    let magnitude: u32 = digits
        .parse()
        .map_err(|_| invalid("magnitude is too large"))?;
    if magnitude == 0 {
        return Err(invalid("magnitude must be greater than zero"));
    }

    Ok(Interval::new(magnitude, unit))
}
