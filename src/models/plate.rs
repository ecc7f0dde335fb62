//! Vehicle plate model.
//!
//! This module defines the validated [`Plate`] type. Ecuadorian plates use
//! the format `XX-YYYY` or `XXX-YYYY`, where `X` is an uppercase letter and
//! `Y` is a digit.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PredictorError, PredictorResult};

static PLATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,3}-[0-9]{4}$").expect("Valid plate pattern"));

const PLATE_FORMAT: &str = "XX-YYYY or XXX-YYYY, where X is an uppercase letter and Y a digit";

/// A validated vehicle license plate.
///
/// A `Plate` can only be obtained through validation, so every accessor can
/// rely on the `{2-3 letters}-{4 digits}` shape.
///
/// # Example
///
/// ```
/// use pico_placa::models::Plate;
///
/// let plate: Plate = "PBA-1234".parse().unwrap();
/// assert_eq!(plate.prefix(), "PBA");
/// assert_eq!(plate.second_letter(), 'B');
/// assert_eq!(plate.last_digit(), 4);
///
/// assert!("pba-1234".parse::<Plate>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Plate {
    value: String,
}

impl Plate {
    /// Validates and wraps a plate string.
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::InvalidFormat`] if the string is not of the
    /// form `XX-YYYY` or `XXX-YYYY`.
    pub fn new(value: impl Into<String>) -> PredictorResult<Self> {
        let value = value.into();
        if !PLATE_PATTERN.is_match(&value) {
            return Err(PredictorError::InvalidFormat {
                field: "plate",
                value,
                expected: PLATE_FORMAT,
            });
        }
        Ok(Self { value })
    }

    /// Returns the plate as it was entered.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the letter group before the dash.
    pub fn prefix(&self) -> &str {
        self.value.split('-').next().unwrap_or_default()
    }

    /// Returns the second letter of the plate.
    pub fn second_letter(&self) -> char {
        char::from(self.value.as_bytes()[1])
    }

    /// Returns the final digit of the plate.
    pub fn last_digit(&self) -> u8 {
        self.value.as_bytes()[self.value.len() - 1] - b'0'
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Plate {
    type Err = PredictorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Plate {
    type Error = PredictorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Plate> for String {
    fn from(plate: Plate) -> Self {
        plate.value
    }
}
