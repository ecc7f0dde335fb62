//! Validated date and time inputs.
//!
//! This module defines [`DateValue`] (`YYYY-MM-DD`) and [`TimeValue`]
//! (`HH:MM`), the date and clock time a vehicle intends to circulate.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PredictorError, PredictorResult};

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Valid date pattern"));

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("Valid time pattern")
});

const DATE_FORMAT: &str = "YYYY-MM-DD (e.g. 2021-04-02)";
const TIME_FORMAT: &str = "HH:MM (e.g. 08:31, 14:22, 00:01)";

/// A validated calendar date in ISO 8601 `YYYY-MM-DD` form.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use pico_placa::models::DateValue;
///
/// let date: DateValue = "2021-04-02".parse().unwrap();
/// assert_eq!(date.weekday(), Weekday::Fri);
/// assert_eq!(date.to_string(), "2021-04-02");
///
/// assert!("2021-4-2".parse::<DateValue>().is_err());
/// assert!("2021-02-30".parse::<DateValue>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateValue {
    date: NaiveDate,
}

impl DateValue {
    /// Validates and parses a `YYYY-MM-DD` date string.
    ///
    /// The string must be exactly ten characters and name a real calendar
    /// date.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::InvalidFormat`] otherwise.
    pub fn parse(value: &str) -> PredictorResult<Self> {
        let invalid = || PredictorError::InvalidFormat {
            field: "date",
            value: value.to_string(),
            expected: DATE_FORMAT,
        };

        if value.len() != 10 || !DATE_PATTERN.is_match(value) {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())?;
        Ok(Self { date })
    }

    /// Returns the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the day of the week of this date.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns the calendar year of this date.
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}

impl FromStr for DateValue {
    type Err = PredictorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateValue {
    type Error = PredictorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateValue> for String {
    fn from(value: DateValue) -> Self {
        value.to_string()
    }
}

/// A validated clock time in `HH:MM` form.
///
/// Hours range over `00`-`23` and minutes over `00`-`59`; both must be two
/// digits.
///
/// # Example
///
/// ```
/// use pico_placa::models::TimeValue;
///
/// let time: TimeValue = "08:31".parse().unwrap();
/// assert_eq!(time.minutes_from_midnight(), 8 * 60 + 31);
///
/// assert!("24:00".parse::<TimeValue>().is_err());
/// assert!("8:31".parse::<TimeValue>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeValue {
    time: NaiveTime,
}

impl TimeValue {
    /// Validates and parses an `HH:MM` time string.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::InvalidFormat`] if the string does not match
    /// `HH:MM` with a valid hour and minute.
    pub fn parse(value: &str) -> PredictorResult<Self> {
        let invalid = || PredictorError::InvalidFormat {
            field: "time",
            value: value.to_string(),
            expected: TIME_FORMAT,
        };

        let captures = TIME_PATTERN.captures(value).ok_or_else(invalid)?;
        let hour: u32 = captures[1].parse().map_err(|_| invalid())?;
        let minute: u32 = captures[2].parse().map_err(|_| invalid())?;

        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)?;
        Ok(Self { time })
    }

    /// Returns the underlying clock time.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the number of whole minutes since midnight.
    pub fn minutes_from_midnight(&self) -> u32 {
        self.time.hour() * 60 + self.time.minute()
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time.format("%H:%M"))
    }
}

impl FromStr for TimeValue {
    type Err = PredictorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeValue {
    type Error = PredictorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeValue> for String {
    fn from(value: TimeValue) -> Self {
        value.to_string()
    }
}
