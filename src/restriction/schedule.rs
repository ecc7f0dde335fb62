//! Weekly restriction schedule.
//!
//! Each weekday forbids the plates ending in two digits during peak hours,
//! as set by Ordenanza Metropolitana No. 0305. Weekends forbid none.

use chrono::Weekday;

/// The weekday to forbidden-last-digit table.
///
/// The schedule is constant data; the weekend exemption is encoded as empty
/// digit sets rather than as a separate rule.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use pico_placa::restriction::RestrictionSchedule;
///
/// let schedule = RestrictionSchedule::QUITO;
/// assert_eq!(schedule.forbidden_digits(Weekday::Mon), &[1, 2]);
/// assert!(schedule.is_restricted(Weekday::Fri, 0));
/// assert!(schedule.forbidden_digits(Weekday::Sun).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestrictionSchedule {
    // Indexed by Weekday::num_days_from_monday()
    forbidden: [&'static [u8]; 7],
}

impl RestrictionSchedule {
    /// The Quito Pico y Placa schedule.
    pub const QUITO: RestrictionSchedule = RestrictionSchedule {
        forbidden: [&[1, 2], &[3, 4], &[5, 6], &[7, 8], &[9, 0], &[], &[]],
    };

    /// Returns the last digits forbidden on `weekday`.
    pub fn forbidden_digits(&self, weekday: Weekday) -> &'static [u8] {
        self.forbidden[weekday.num_days_from_monday() as usize]
    }

    /// Returns true if plates ending in `digit` are restricted on `weekday`.
    pub fn is_restricted(&self, weekday: Weekday, digit: u8) -> bool {
        self.forbidden_digits(weekday).contains(&digit)
    }
}

impl Default for RestrictionSchedule {
    fn default() -> Self {
        Self::QUITO
    }
}

/// Returns the English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
