//! Core data models for the Pico y Placa predictor.
//!
//! This module contains the validated input types and the holiday records
//! used throughout the crate.

mod date_time;
mod holiday;
mod plate;
mod query;

pub use date_time::{DateValue, TimeValue};
pub use holiday::{HolidayRecord, Region};
pub use plate::Plate;
pub use query::PredictionQuery;
