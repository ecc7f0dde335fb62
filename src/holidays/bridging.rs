//! Observed-date ("bridging") rules for civil holidays.
//!
//! Since the LOSEP reform (Ley 858, in force for 2016 onwards) most civil
//! holidays are moved next to a weekend depending on the weekday they fall
//! on. Day of the Dead (Nov 2) and Independence of Cuenca (Nov 3) are two
//! consecutive holidays with their own redistribution table.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Bridging only applies to years strictly after this one.
pub const LAST_UNBRIDGED_YEAR: i32 = 2015;

/// Returns the observed date of a bridged civil holiday.
///
/// For years after [`LAST_UNBRIDGED_YEAR`]:
/// - Saturday or Tuesday moves back one day (to Friday or Monday);
/// - Sunday moves forward one day (to Monday);
/// - Wednesday or Thursday moves to the Friday of the same week;
/// - Monday or Friday stays put.
///
/// Earlier years always keep the literal date.
///
/// # Example
///
/// ```
/// use pico_placa::holidays::bridged_date;
/// use chrono::NaiveDate;
///
/// // 2021-05-01 is a Saturday, observed on Friday 2021-04-30
/// let labour_day = NaiveDate::from_ymd_opt(2021, 5, 1).unwrap();
/// assert_eq!(bridged_date(labour_day), NaiveDate::from_ymd_opt(2021, 4, 30).unwrap());
///
/// // 2015 predates the rule
/// let labour_day = NaiveDate::from_ymd_opt(2015, 5, 1).unwrap();
/// assert_eq!(bridged_date(labour_day), labour_day);
/// ```
pub fn bridged_date(date: NaiveDate) -> NaiveDate {
    if date.year() <= LAST_UNBRIDGED_YEAR {
        return date;
    }

    match date.weekday() {
        Weekday::Sat | Weekday::Tue => date - Duration::days(1),
        Weekday::Sun => date + Duration::days(1),
        Weekday::Wed | Weekday::Thu => next_friday(date),
        Weekday::Mon | Weekday::Fri => date,
    }
}

/// Returns the first Friday on or after `date`.
fn next_friday(date: NaiveDate) -> NaiveDate {
    let days_ahead = (Weekday::Fri.num_days_from_monday() + 7
        - date.weekday().num_days_from_monday())
        % 7;
    date + Duration::days(i64::from(days_ahead))
}

/// Observed dates of the Day of the Dead and Independence of Cuenca.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NovemberPair {
    /// Observed date of the Day of the Dead (literal date Nov 2).
    pub day_of_the_dead: NaiveDate,
    /// Observed date of the Independence of Cuenca (literal date Nov 3).
    pub independence_of_cuenca: NaiveDate,
}

/// Applies the Nov 2 / Nov 3 redistribution table for a year.
///
/// The table is keyed on the weekday of Nov 3:
///
/// | Nov 3      | Day of the Dead | Independence of Cuenca |
/// |------------|-----------------|------------------------|
/// | Sunday     | Nov 2 - 1       | Nov 3 + 1              |
/// | Wednesday  | Nov 2           | Nov 3 - 2              |
/// | Thursday   | Nov 2 + 2       | Nov 3                  |
/// | Saturday   | Nov 2           | Nov 3 - 2              |
/// | Monday     | Nov 2 + 2       | Nov 3                  |
/// | otherwise  | Nov 2           | Nov 3                  |
///
/// The cases are kept as a literal table; they do not follow
/// [`bridged_date`]. Returns `None` only for years chrono cannot represent.
///
/// # Example
///
/// ```
/// use pico_placa::holidays::november_pair;
/// use chrono::NaiveDate;
///
/// // 2019-11-03 is a Sunday
/// let pair = november_pair(2019).unwrap();
/// assert_eq!(pair.day_of_the_dead, NaiveDate::from_ymd_opt(2019, 11, 1).unwrap());
/// assert_eq!(pair.independence_of_cuenca, NaiveDate::from_ymd_opt(2019, 11, 4).unwrap());
/// ```
pub fn november_pair(year: i32) -> Option<NovemberPair> {
    let nov_2 = NaiveDate::from_ymd_opt(year, 11, 2)?;
    let nov_3 = NaiveDate::from_ymd_opt(year, 11, 3)?;
    let day = Duration::days;

    let (day_of_the_dead, independence_of_cuenca) = match (nov_2.weekday(), nov_3.weekday()) {
        (Weekday::Sat, Weekday::Sun) => (nov_2 - day(1), nov_3 + day(1)),
        (_, Weekday::Wed) => (nov_2, nov_3 - day(2)),
        (_, Weekday::Thu) => (nov_2 + day(2), nov_3),
        (_, Weekday::Sat) => (nov_2, nov_3 - day(2)),
        (_, Weekday::Mon) => (nov_2 + day(2), nov_3),
        _ => (nov_2, nov_3),
    };

    Some(NovemberPair {
        day_of_the_dead,
        independence_of_cuenca,
    })
}
