//! Ecuadorian public holiday calendar.
//!
//! This module provides the [`HolidayCalculator`], which derives the observed
//! public holidays of Ecuador for a year, and the [`HolidayCalendar`] it
//! produces.
//!
//! Reference: <https://www.turismo.gob.ec/wp-content/uploads/2020/03/CALENDARIO-DE-FERIADOS.pdf>

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::models::{HolidayRecord, Region};

use super::bridging::{bridged_date, november_pair};
use super::easter::easter_sunday;

/// January 1.
pub const NEW_YEARS_DAY: &str = "New Year's Day";
/// December 25.
pub const CHRISTMAS_DAY: &str = "Christmas Day";
/// The Friday before Easter Sunday.
pub const GOOD_FRIDAY: &str = "Good Friday";
/// Western Easter Sunday.
pub const EASTER_SUNDAY: &str = "Easter Sunday";
/// 48 days before Easter Sunday.
pub const CARNIVAL_MONDAY: &str = "Carnival Monday";
/// 47 days before Easter Sunday.
pub const CARNIVAL_TUESDAY: &str = "Carnival Tuesday";
/// May 1, bridged.
pub const LABOUR_DAY: &str = "Labour Day";
/// May 24, bridged.
pub const BATTLE_OF_PICHINCHA: &str = "Battle of Pichincha";
/// August 10, bridged.
pub const FIRST_CRY_OF_INDEPENDENCE: &str = "First Cry of Independence";
/// October 9, bridged.
pub const INDEPENDENCE_OF_GUAYAQUIL: &str = "Independence of Guayaquil";
/// November 2, per the November table.
pub const DAY_OF_THE_DEAD: &str = "Day of the Dead";
/// November 3, per the November table.
pub const INDEPENDENCE_OF_CUENCA: &str = "Independence of Cuenca";
/// December 6, bridged, Pichincha only.
pub const FOUNDATION_OF_QUITO: &str = "Foundation of Quito";

/// One entry of the holiday rule list.
#[derive(Debug, Clone, Copy)]
enum HolidayRule {
    /// Always observed on its literal date.
    Fixed {
        month: u32,
        day: u32,
        label: &'static str,
    },
    /// A fixed number of days from Easter Sunday.
    EasterOffset { days: i64, label: &'static str },
    /// A civil holiday subject to the weekday bridging rule.
    Bridged {
        month: u32,
        day: u32,
        label: &'static str,
    },
    /// Day of the Dead and Independence of Cuenca, via the November table.
    NovemberPair,
    /// A bridged holiday observed only in one region.
    Regional {
        region: Region,
        month: u32,
        day: u32,
        label: &'static str,
    },
}

/// Rules in application order; a later rule overwrites an earlier one that
/// lands on the same date.
const HOLIDAY_RULES: &[HolidayRule] = &[
    HolidayRule::Fixed {
        month: 1,
        day: 1,
        label: NEW_YEARS_DAY,
    },
    HolidayRule::Fixed {
        month: 12,
        day: 25,
        label: CHRISTMAS_DAY,
    },
    // Easter is a Sunday, so the Friday immediately before is two days back
    HolidayRule::EasterOffset {
        days: -2,
        label: GOOD_FRIDAY,
    },
    HolidayRule::EasterOffset {
        days: 0,
        label: EASTER_SUNDAY,
    },
    HolidayRule::EasterOffset {
        days: -48,
        label: CARNIVAL_MONDAY,
    },
    HolidayRule::EasterOffset {
        days: -47,
        label: CARNIVAL_TUESDAY,
    },
    HolidayRule::Bridged {
        month: 5,
        day: 1,
        label: LABOUR_DAY,
    },
    HolidayRule::Bridged {
        month: 5,
        day: 24,
        label: BATTLE_OF_PICHINCHA,
    },
    HolidayRule::Bridged {
        month: 8,
        day: 10,
        label: FIRST_CRY_OF_INDEPENDENCE,
    },
    HolidayRule::Bridged {
        month: 10,
        day: 9,
        label: INDEPENDENCE_OF_GUAYAQUIL,
    },
    HolidayRule::NovemberPair,
    HolidayRule::Regional {
        region: Region::Pichincha,
        month: 12,
        day: 6,
        label: FOUNDATION_OF_QUITO,
    },
];

impl HolidayRule {
    /// Returns the (date, label) pairs this rule contributes for a year.
    fn apply(&self, year: i32, region: Option<Region>) -> Vec<(NaiveDate, &'static str)> {
        match *self {
            HolidayRule::Fixed { month, day, label } => NaiveDate::from_ymd_opt(year, month, day)
                .map(|date| (date, label))
                .into_iter()
                .collect(),
            HolidayRule::EasterOffset { days, label } => easter_sunday(year)
                .map(|easter| (easter + Duration::days(days), label))
                .into_iter()
                .collect(),
            HolidayRule::Bridged { month, day, label } => NaiveDate::from_ymd_opt(year, month, day)
                .map(|date| (bridged_date(date), label))
                .into_iter()
                .collect(),
            HolidayRule::NovemberPair => november_pair(year)
                .map(|pair| {
                    vec![
                        (pair.day_of_the_dead, DAY_OF_THE_DEAD),
                        (pair.independence_of_cuenca, INDEPENDENCE_OF_CUENCA),
                    ]
                })
                .unwrap_or_default(),
            HolidayRule::Regional {
                region: rule_region,
                month,
                day,
                label,
            } => {
                if region != Some(rule_region) {
                    return Vec::new();
                }
                NaiveDate::from_ymd_opt(year, month, day)
                    .map(|date| (bridged_date(date), label))
                    .into_iter()
                    .collect()
            }
        }
    }
}

/// The observed public holidays of one year.
///
/// A calendar is immutable once computed. Each date carries exactly one
/// label.
///
/// # Example
///
/// ```
/// use pico_placa::holidays::HolidayCalculator;
/// use pico_placa::models::Region;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalculator::new(Some(Region::Pichincha)).compute(2021);
/// let new_year = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// assert!(calendar.contains(new_year));
/// assert_eq!(calendar.label(new_year), Some("New Year's Day"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayCalendar {
    year: i32,
    region: Option<Region>,
    holidays: BTreeMap<NaiveDate, &'static str>,
}

impl HolidayCalendar {
    /// Returns the year this calendar covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the region whose regional holidays are included, if any.
    pub fn region(&self) -> Option<Region> {
        self.region
    }

    /// Returns true if `date` is an observed holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Returns the label of the holiday observed on `date`.
    pub fn label(&self, date: NaiveDate) -> Option<&'static str> {
        self.holidays.get(&date).copied()
    }

    /// Returns the holiday observed on `date` as a record.
    pub fn get(&self, date: NaiveDate) -> Option<HolidayRecord> {
        self.label(date).map(|label| HolidayRecord {
            date,
            label: label.to_string(),
        })
    }

    /// Returns the observed date of the holiday with the given label.
    pub fn date_of(&self, label: &str) -> Option<NaiveDate> {
        self.holidays
            .iter()
            .find(|(_, holiday)| **holiday == label)
            .map(|(date, _)| *date)
    }

    /// Returns all holidays ordered by date.
    pub fn records(&self) -> Vec<HolidayRecord> {
        self.holidays
            .iter()
            .map(|(date, label)| HolidayRecord {
                date: *date,
                label: label.to_string(),
            })
            .collect()
    }

    /// Returns the number of observed holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if the calendar has no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

/// Computes the observed public holidays of Ecuador.
///
/// The calculator is a pure function of the year and the configured region;
/// it performs no I/O.
///
/// # Example
///
/// ```
/// use pico_placa::holidays::HolidayCalculator;
/// use pico_placa::models::Region;
/// use chrono::NaiveDate;
///
/// let calculator = HolidayCalculator::new(Some(Region::Pichincha));
/// let calendar = calculator.compute(2021);
///
/// // Labour Day 2021 fell on a Saturday and was observed on Friday
/// assert!(calendar.contains(NaiveDate::from_ymd_opt(2021, 4, 30).unwrap()));
/// assert!(!calendar.contains(NaiveDate::from_ymd_opt(2021, 5, 1).unwrap()));
///
/// // Foundation of Quito is only observed in Pichincha
/// let quito = NaiveDate::from_ymd_opt(2021, 12, 6).unwrap();
/// assert!(calendar.contains(quito));
/// assert!(!HolidayCalculator::new(None).compute(2021).contains(quito));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HolidayCalculator {
    region: Option<Region>,
}

impl HolidayCalculator {
    /// Creates a calculator for the national calendar plus the holidays of
    /// `region`, if given.
    pub fn new(region: Option<Region>) -> Self {
        Self { region }
    }

    /// Returns the configured region.
    pub fn region(&self) -> Option<Region> {
        self.region
    }

    /// Computes the observed holidays of `year`.
    pub fn compute(&self, year: i32) -> HolidayCalendar {
        let mut holidays = BTreeMap::new();

        for rule in HOLIDAY_RULES {
            for (date, label) in rule.apply(year, self.region) {
                if let Some(previous) = holidays.insert(date, label) {
                    debug!(%date, previous, label, "Holiday rule overrides an earlier one");
                }
            }
        }

        debug!(
            year,
            region = ?self.region,
            holidays = holidays.len(),
            "Computed holiday calendar"
        );

        HolidayCalendar {
            year,
            region: self.region,
            holidays,
        }
    }

    /// Returns the holiday observed on `date`, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<HolidayRecord> {
        self.compute(date.year()).get(date)
    }
}
