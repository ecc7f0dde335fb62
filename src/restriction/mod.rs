//! Pico y Placa restriction rules.
//!
//! This module contains the weekly digit schedule, the peak-hour windows,
//! plate exemptions and the predictor that combines them with the holiday
//! source.

mod exemption;
mod peak_hours;
mod predictor;
mod schedule;
mod verdict;

pub use exemption::{EXEMPT_SECOND_LETTERS, PlateExemption, plate_exemption};
pub use peak_hours::{PEAK_WINDOWS, PeakWindow, is_peak_time};
pub use predictor::RestrictionPredictor;
pub use schedule::{RestrictionSchedule, weekday_name};
pub use verdict::{Prediction, Verdict};
