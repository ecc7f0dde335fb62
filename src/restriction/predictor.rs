//! The Pico y Placa decision procedure.

use tracing::{debug, info};

use crate::error::PredictorResult;
use crate::holidays::HolidaySource;
use crate::models::PredictionQuery;

use super::exemption::plate_exemption;
use super::peak_hours::is_peak_time;
use super::schedule::RestrictionSchedule;
use super::verdict::{Prediction, Verdict};

/// Decides whether a vehicle may circulate.
///
/// Rules are checked in order and the first one that permits circulation
/// wins:
///
/// 1. the date is a public holiday;
/// 2. the plate belongs to an exempt class;
/// 3. the time is outside peak hours;
/// 4. the last digit is not restricted on the date's weekday.
///
/// A query that passes none of them is restricted.
///
/// # Example
///
/// ```
/// use pico_placa::holidays::{HolidayCalculator, HolidaySource};
/// use pico_placa::models::{PredictionQuery, Region};
/// use pico_placa::restriction::RestrictionPredictor;
///
/// # #[tokio::main]
/// # async fn main() {
/// let source = HolidaySource::local(HolidayCalculator::new(Some(Region::Pichincha)));
/// let predictor = RestrictionPredictor::new(source);
///
/// let query = PredictionQuery::parse("PBA-1111", "2021-04-12", "08:00", false).unwrap();
/// assert!(!predictor.predict(&query).await.unwrap());
///
/// let query = PredictionQuery::parse("PBA-1111", "2021-04-12", "10:00", false).unwrap();
/// assert!(predictor.predict(&query).await.unwrap());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RestrictionPredictor {
    holidays: HolidaySource,
    schedule: RestrictionSchedule,
}

impl RestrictionPredictor {
    /// Creates a predictor using the Quito schedule.
    pub fn new(holidays: HolidaySource) -> Self {
        Self {
            holidays,
            schedule: RestrictionSchedule::QUITO,
        }
    }

    /// Returns the holiday source consulted first.
    pub fn holidays(&self) -> &HolidaySource {
        &self.holidays
    }

    /// Returns true if the vehicle may circulate.
    ///
    /// # Errors
    ///
    /// Holiday lookup errors are returned unchanged.
    pub async fn predict(&self, query: &PredictionQuery) -> PredictorResult<bool> {
        Ok(self.evaluate(query).await?.permitted())
    }

    /// Evaluates `query` and returns the rule that decided it.
    ///
    /// # Errors
    ///
    /// Holiday lookup errors are returned unchanged.
    pub async fn evaluate(&self, query: &PredictionQuery) -> PredictorResult<Prediction> {
        let verdict = self.decide(query).await?;
        debug!(
            plate = %query.plate,
            date = %query.date,
            time = %query.time,
            ?verdict,
            "Rule decided prediction"
        );
        info!(plate = %query.plate, permitted = verdict.is_permitted(), "Prediction complete");
        Ok(Prediction::new(query.clone(), verdict))
    }

    async fn decide(&self, query: &PredictionQuery) -> PredictorResult<Verdict> {
        let holiday = self
            .holidays
            .lookup(query.date.date(), query.use_remote_holiday_check)
            .await?;
        if let Some(holiday) = holiday {
            return Ok(Verdict::Holiday {
                label: holiday.label,
            });
        }

        if let Some(exemption) = plate_exemption(&query.plate) {
            return Ok(Verdict::ExemptPlate { exemption });
        }

        if !is_peak_time(query.time) {
            return Ok(Verdict::OutsidePeakHours);
        }

        let weekday = query.date.weekday();
        let digit = query.plate.last_digit();
        if self.schedule.is_restricted(weekday, digit) {
            Ok(Verdict::Restricted { weekday, digit })
        } else {
            Ok(Verdict::DigitAllowed { weekday, digit })
        }
    }
}
