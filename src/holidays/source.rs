//! Unified holiday lookup.
//!
//! [`HolidaySource`] answers "is this date a holiday?" either from the local
//! [`HolidayCalculator`] or through the [`RemoteHolidayClient`].

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{PredictorError, PredictorResult};
use crate::models::HolidayRecord;

use super::calculator::HolidayCalculator;
use super::remote::RemoteHolidayClient;

/// Answers holiday queries locally or remotely.
///
/// # Example
///
/// ```
/// use pico_placa::holidays::{HolidayCalculator, HolidaySource};
/// use pico_placa::models::Region;
/// use chrono::NaiveDate;
///
/// # #[tokio::main]
/// # async fn main() {
/// let source = HolidaySource::local(HolidayCalculator::new(Some(Region::Pichincha)));
/// let christmas = NaiveDate::from_ymd_opt(2021, 12, 25).unwrap();
/// assert!(source.is_holiday(christmas, false).await.unwrap());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HolidaySource {
    calculator: HolidayCalculator,
    remote: Option<RemoteHolidayClient>,
}

impl HolidaySource {
    /// Creates a source that can only answer from the local calendar.
    pub fn local(calculator: HolidayCalculator) -> Self {
        Self {
            calculator,
            remote: None,
        }
    }

    /// Creates a source that can also query the remote holiday service.
    pub fn with_remote(calculator: HolidayCalculator, remote: RemoteHolidayClient) -> Self {
        Self {
            calculator,
            remote: Some(remote),
        }
    }

    /// Returns the local calculator.
    pub fn calculator(&self) -> &HolidayCalculator {
        &self.calculator
    }

    /// Returns true if a remote client is configured.
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Returns the holiday observed on `date`, if any.
    ///
    /// With `use_remote` the remote service is asked; otherwise the year's
    /// calendar is computed locally.
    ///
    /// # Errors
    ///
    /// Remote errors are returned unchanged. Asking for a remote lookup
    /// without a remote client yields [`PredictorError::RemoteUnavailable`].
    pub async fn lookup(
        &self,
        date: NaiveDate,
        use_remote: bool,
    ) -> PredictorResult<Option<HolidayRecord>> {
        if !use_remote {
            let holiday = self.calculator.holiday_on(date);
            debug!(%date, holiday = ?holiday.as_ref().map(|h| &h.label), "Local holiday lookup");
            return Ok(holiday);
        }

        let remote = self.remote.as_ref().ok_or(PredictorError::RemoteUnavailable)?;
        remote.lookup(date).await
    }

    /// Returns true if `date` is a public holiday.
    ///
    /// # Errors
    ///
    /// See [`HolidaySource::lookup`].
    pub async fn is_holiday(&self, date: NaiveDate, use_remote: bool) -> PredictorResult<bool> {
        Ok(self.lookup(date, use_remote).await?.is_some())
    }
}
