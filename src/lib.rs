//! Pico y Placa predictor for Quito
//!
//! This crate decides whether a vehicle may circulate in Quito under the
//! Pico y Placa peak-hour restriction, and computes the Ecuadorian public
//! holidays that suspend it.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod holidays;
pub mod models;
pub mod restriction;
