//! Easter Sunday computation.
//!
//! Easter anchors the moveable holidays of the Ecuadorian calendar (Carnival
//! and Holy Week).

use std::ops::RangeInclusive;

use chrono::NaiveDate;

/// Years for which the Gregorian computus below is defined.
pub const EASTER_YEARS: RangeInclusive<i32> = 1583..=4099;

/// Computes the date of Western (Gregorian) Easter Sunday.
///
/// Returns `None` for years outside [`EASTER_YEARS`].
///
/// # Example
///
/// ```
/// use pico_placa::holidays::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2021), NaiveDate::from_ymd_opt(2021, 4, 4));
/// assert_eq!(easter_sunday(1500), None);
/// ```
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    if !EASTER_YEARS.contains(&year) {
        return None;
    }

    let golden = year % 19;
    let century = year / 100;
    let century_quarter = century / 4;

    // Days from March 21 to the Paschal full moon, corrected for the
    // Gregorian epact exceptions.
    let h = (century - century_quarter - (8 * century + 13) / 25 + 19 * golden + 15) % 30;
    let h_div_28 = h / 28;
    let i = h - h_div_28 * (1 - h_div_28 * (29 / (h + 1)) * ((21 - golden) / 11));

    // Weekday of the Paschal full moon.
    let j = (year + year / 4 + i + 2 - century + century_quarter) % 7;

    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
