//! Holiday and region models.
//!
//! This module contains the [`HolidayRecord`] produced by the holiday
//! calendar and the [`Region`] enumeration used for province-specific
//! holidays.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single observed public holiday.
///
/// # Example
///
/// ```
/// use pico_placa::models::HolidayRecord;
/// use chrono::NaiveDate;
///
/// let holiday = HolidayRecord {
///     date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
///     label: "New Year's Day".to_string(),
/// };
/// assert_eq!(holiday.to_string(), "2021-01-01 New Year's Day");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// The observed date of the holiday (after any bridging shift).
    pub date: NaiveDate,
    /// The name of the holiday.
    pub label: String,
}

impl fmt::Display for HolidayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format("%Y-%m-%d"), self.label)
    }
}

/// An Ecuadorian province with its own public holidays.
///
/// Variants are identified by their ISO 3166-2:EC subdivision code. Adding a
/// province means adding a variant here and its holidays to the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Pichincha province, whose capital is Quito.
    #[serde(rename = "EC-P")]
    Pichincha,
}

impl Region {
    /// All supported regions.
    pub const ALL: [Region; 1] = [Region::Pichincha];

    /// Returns the ISO 3166-2:EC code of the region.
    pub fn code(&self) -> &'static str {
        match self {
            Region::Pichincha => "EC-P",
        }
    }

    /// Looks up a region by its ISO 3166-2:EC code.
    ///
    /// Unknown codes yield `None`, which simply leaves out regional holidays.
    ///
    /// # Example
    ///
    /// ```
    /// use pico_placa::models::Region;
    ///
    /// assert_eq!(Region::from_code("EC-P"), Some(Region::Pichincha));
    /// assert_eq!(Region::from_code("EC-G"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Region> {
        Self::ALL.into_iter().find(|region| region.code() == code)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
