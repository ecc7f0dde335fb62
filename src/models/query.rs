//! Prediction query model.

use serde::{Deserialize, Serialize};

use crate::error::PredictorResult;

use super::{DateValue, Plate, TimeValue};

/// A single "may this vehicle circulate?" request.
///
/// All fields are validated on construction; a query is never partially
/// valid.
///
/// # Example
///
/// ```
/// use pico_placa::models::PredictionQuery;
///
/// let query = PredictionQuery::parse("PBA-1111", "2021-04-12", "08:00", false).unwrap();
/// assert_eq!(query.plate.last_digit(), 1);
/// assert!(!query.use_remote_holiday_check);
///
/// assert!(PredictionQuery::parse("PBA-1111", "2021-04-12", "8:00", false).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionQuery {
    /// The vehicle plate.
    pub plate: Plate,
    /// The date the vehicle intends to circulate.
    pub date: DateValue,
    /// The time the vehicle intends to circulate.
    pub time: TimeValue,
    /// Whether holidays are checked against the remote holiday API.
    #[serde(default)]
    pub use_remote_holiday_check: bool,
}

impl PredictionQuery {
    /// Builds a query from already validated parts.
    pub fn new(
        plate: Plate,
        date: DateValue,
        time: TimeValue,
        use_remote_holiday_check: bool,
    ) -> Self {
        Self {
            plate,
            date,
            time,
            use_remote_holiday_check,
        }
    }

    /// Validates raw plate, date and time strings and builds a query.
    ///
    /// Validation happens in field order and stops at the first invalid
    /// field.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PredictorError::InvalidFormat`] for the first
    /// field that fails validation.
    pub fn parse(
        plate: &str,
        date: &str,
        time: &str,
        use_remote_holiday_check: bool,
    ) -> PredictorResult<Self> {
        Ok(Self::new(
            Plate::new(plate)?,
            DateValue::parse(date)?,
            TimeValue::parse(time)?,
            use_remote_holiday_check,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictorError;

    #[test]
    fn test_parse_valid_query() {
        let query = PredictionQuery::parse("ABC-1234", "2021-04-02", "08:31", true).unwrap();
        assert_eq!(query.plate.as_str(), "ABC-1234");
        assert_eq!(query.date.to_string(), "2021-04-02");
        assert_eq!(query.time.to_string(), "08:31");
        assert!(query.use_remote_holiday_check);
    }

    #[test]
    fn test_parse_reports_first_invalid_field() {
        let error = PredictionQuery::parse("abc-1234", "bad", "bad", false).unwrap_err();
        assert!(matches!(error, PredictorError::InvalidFormat { field: "plate", .. }));

        let error = PredictionQuery::parse("ABC-1234", "04/02/2021", "bad", false).unwrap_err();
        assert!(matches!(error, PredictorError::InvalidFormat { field: "date", .. }));

        let error = PredictionQuery::parse("ABC-1234", "2021-04-02", "24:00", false).unwrap_err();
        assert!(matches!(error, PredictorError::InvalidFormat { field: "time", .. }));
    }

    #[test]
    fn test_query_deserialization_validates_fields() {
        let json = r#"{"plate": "PBA-1111", "date": "2021-04-12", "time": "08:00"}"#;
        let query: PredictionQuery = serde_json::from_str(json).unwrap();
        assert!(!query.use_remote_holiday_check);

        let bad = r#"{"plate": "PBA-1111", "date": "2021-04-12", "time": "8:00"}"#;
        assert!(serde_json::from_str::<PredictionQuery>(bad).is_err());
    }
}
