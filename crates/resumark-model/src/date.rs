//! CV date literals.
//!
//! The dialect accepts `YYYY-MM` or `YYYY-MM-DD` date literals. Role end
//! dates may additionally be the sentinel `present`, which means
//! "ongoing" and is distinct from an unspecified (absent) end date.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A calendar date with optional day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CvDate {
    pub year: i32,
    pub month: u32,
    pub day: Option<u32>,
}

/// Errors produced when decoding a date literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("date `{0}` must use YYYY-MM or YYYY-MM-DD")]
    Malformed(String),

    #[error("month {month} in date `{input}` must be between 1 and 12")]
    MonthOutOfRange { input: String, month: u32 },

    #[error("day {day} in date `{input}` must be between 1 and 31")]
    DayOutOfRange { input: String, day: u32 },
}

impl CvDate {
    /// Create a year/month date.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            day: None,
        }
    }

    /// Create a full year/month/day date.
    pub fn with_day(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day: Some(day),
        }
    }
}

impl FromStr for CvDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DateError::Malformed(s.to_string());

        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(malformed());
        }

        if parts[0].len() != 4 || parts[1].len() != 2 {
            return Err(malformed());
        }

        let year: i32 = parts[0].parse().map_err(|_| malformed())?;
        let month: u32 = parts[1].parse().map_err(|_| malformed())?;
        if !(1..=12).contains(&month) {
            return Err(DateError::MonthOutOfRange {
                input: s.to_string(),
                month,
            });
        }

        let day = if parts.len() == 3 {
            if parts[2].len() != 2 {
                return Err(malformed());
            }
            let day: u32 = parts[2].parse().map_err(|_| malformed())?;
            if !(1..=31).contains(&day) {
                return Err(DateError::DayOutOfRange {
                    input: s.to_string(),
                    day,
                });
            }
            Some(day)
        } else {
            None
        };

        Ok(CvDate { year, month, day })
    }
}

impl fmt::Display for CvDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.day {
            Some(day) => write!(f, "{:04}-{:02}-{:02}", self.year, self.month, day),
            None => write!(f, "{:04}-{:02}", self.year, self.month),
        }
    }
}

/// The end of a dated span: a concrete date or the `present` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndDate {
    Date(CvDate),
    Present,
}

impl EndDate {
    /// Whether this end date means "ongoing".
    pub fn is_ongoing(&self) -> bool {
        matches!(self, EndDate::Present)
    }
}

impl FromStr for EndDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "present" {
            Ok(EndDate::Present)
        } else {
            CvDate::from_str(s).map(EndDate::Date)
        }
    }
}

impl fmt::Display for EndDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndDate::Date(date) => date.fmt(f),
            EndDate::Present => write!(f, "present"),
        }
    }
}
