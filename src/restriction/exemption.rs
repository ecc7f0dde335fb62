//! Plate-shape exemptions.
//!
//! Some vehicle classes are never subject to Pico y Placa. The class is
//! encoded in the plate itself: the second letter identifies government,
//! municipal and similar fleets, and two-letter prefixes belong to
//! categories that are exempt outright.
//!
//! Reference: <https://es.wikipedia.org/wiki/Matr%C3%ADculas_automovil%C3%ADsticas_de_Ecuador>

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Plate;

/// Second letters that exempt a plate from the restriction.
pub const EXEMPT_SECOND_LETTERS: [char; 6] = ['A', 'U', 'Z', 'E', 'X', 'M'];

/// Why a plate is exempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlateExemption {
    /// The second letter is one of [`EXEMPT_SECOND_LETTERS`].
    SecondLetter {
        /// The exempting letter.
        letter: char,
    },
    /// The letter group before the dash has two letters.
    TwoLetterPrefix,
}

impl fmt::Display for PlateExemption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlateExemption::SecondLetter { letter } => {
                write!(f, "second letter '{letter}' marks an exempt vehicle class")
            }
            PlateExemption::TwoLetterPrefix => write!(f, "two-letter plates are exempt"),
        }
    }
}

/// Returns the exemption that applies to `plate`, if any.
///
/// The second-letter check is made first, so a two-letter plate such as
/// `AX-1234` reports its letter.
///
/// # Example
///
/// ```
/// use pico_placa::models::Plate;
/// use pico_placa::restriction::{PlateExemption, plate_exemption};
///
/// let plate: Plate = "PXA-1234".parse().unwrap();
/// assert_eq!(plate_exemption(&plate), Some(PlateExemption::SecondLetter { letter: 'X' }));
///
/// let plate: Plate = "PB-1234".parse().unwrap();
/// assert_eq!(plate_exemption(&plate), Some(PlateExemption::TwoLetterPrefix));
///
/// let plate: Plate = "PBA-1234".parse().unwrap();
/// assert_eq!(plate_exemption(&plate), None);
/// ```
pub fn plate_exemption(plate: &Plate) -> Option<PlateExemption> {
    let letter = plate.second_letter();
    if EXEMPT_SECOND_LETTERS.contains(&letter) {
        return Some(PlateExemption::SecondLetter { letter });
    }

    if plate.prefix().len() == 2 {
        return Some(PlateExemption::TwoLetterPrefix);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plate(value: &str) -> Plate {
        Plate::new(value).unwrap()
    }

    #[test]
    fn test_every_exempt_second_letter() {
        for letter in EXEMPT_SECOND_LETTERS {
            let value = format!("P{letter}B-1234");
            assert_eq!(
                plate_exemption(&plate(&value)),
                Some(PlateExemption::SecondLetter { letter }),
                "{value}"
            );
        }
    }

    #[test]
    fn test_only_second_letter_counts() {
        // Exempt letters in first or third position do not exempt
        assert_eq!(plate_exemption(&plate("ABC-1234")), None);
        assert_eq!(plate_exemption(&plate("PBX-1234")), None);
    }

    #[test]
    fn test_two_letter_prefix_is_exempt() {
        assert_eq!(
            plate_exemption(&plate("PB-1234")),
            Some(PlateExemption::TwoLetterPrefix)
        );
    }

    #[test]
    fn test_exemption_display() {
        assert_eq!(
            PlateExemption::SecondLetter { letter: 'M' }.to_string(),
            "second letter 'M' marks an exempt vehicle class"
        );
        assert_eq!(
            PlateExemption::TwoLetterPrefix.to_string(),
            "two-letter plates are exempt"
        );
    }
}
