//! Prediction outcome types.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::PredictionQuery;

use super::exemption::PlateExemption;
use super::peak_hours::PEAK_WINDOWS;
use super::schedule::weekday_name;

/// The rule that decided a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Verdict {
    /// The date is a public holiday; the restriction is suspended.
    Holiday {
        /// The holiday name.
        label: String,
    },
    /// The plate belongs to an exempt vehicle class.
    ExemptPlate {
        /// Why the plate is exempt.
        exemption: PlateExemption,
    },
    /// The time falls outside both peak-hour windows.
    OutsidePeakHours,
    /// The plate's last digit is not restricted on this weekday.
    DigitAllowed {
        /// The weekday of the query date.
        weekday: Weekday,
        /// The plate's last digit.
        digit: u8,
    },
    /// The plate's last digit is restricted on this weekday during peak hours.
    Restricted {
        /// The weekday of the query date.
        weekday: Weekday,
        /// The plate's last digit.
        digit: u8,
    },
}

impl Verdict {
    /// Returns true unless the vehicle is restricted.
    pub fn is_permitted(&self) -> bool {
        !matches!(self, Verdict::Restricted { .. })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Holiday { label } => write!(f, "{label} is a public holiday"),
            Verdict::ExemptPlate { exemption } => write!(f, "{exemption}"),
            Verdict::OutsidePeakHours => write!(
                f,
                "the time is outside peak hours ({} and {})",
                PEAK_WINDOWS[0], PEAK_WINDOWS[1]
            ),
            Verdict::DigitAllowed { weekday, digit } => write!(
                f,
                "plates ending in {digit} are not restricted on {}",
                weekday_name(*weekday)
            ),
            Verdict::Restricted { weekday, digit } => write!(
                f,
                "plates ending in {digit} are restricted on {} during peak hours",
                weekday_name(*weekday)
            ),
        }
    }
}

/// A decided query.
///
/// # Example
///
/// ```
/// use pico_placa::models::PredictionQuery;
/// use pico_placa::restriction::{Prediction, Verdict};
///
/// let query = PredictionQuery::parse("PBA-1111", "2021-04-12", "10:00", false).unwrap();
/// let prediction = Prediction::new(query, Verdict::OutsidePeakHours);
/// assert!(prediction.permitted());
/// assert_eq!(
///     prediction.summary(),
///     "The vehicle with plate PBA-1111 CAN be on the road on 2021-04-12 at 10:00."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// The query that was evaluated.
    pub query: PredictionQuery,
    /// The deciding rule.
    pub verdict: Verdict,
}

impl Prediction {
    /// Pairs a query with its verdict.
    pub fn new(query: PredictionQuery, verdict: Verdict) -> Self {
        Self { query, verdict }
    }

    /// Returns true if the vehicle may circulate.
    pub fn permitted(&self) -> bool {
        self.verdict.is_permitted()
    }

    /// Returns the one-line answer printed by the command-line tool.
    pub fn summary(&self) -> String {
        let decision = if self.permitted() { "CAN" } else { "MUST NOT" };
        format!(
            "The vehicle with plate {} {} be on the road on {} at {}.",
            self.query.plate, decision, self.query.date, self.query.time
        )
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
