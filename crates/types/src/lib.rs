//! Willr Types
//!
//! Core data structures shared by the indicator plugin crates.
//! This crate provides the indicator configuration, the columnar
//! table/dataset model, daily rows and signal states.

#![deny(clippy::all)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod row;
pub mod signal;
pub mod table;

// Re-export main types for convenience
pub use config::IndicatorConfig;
pub use dataset::Dataset;
pub use error::CoreError;
pub use row::DailyRow;
pub use signal::IndicatorSignal;
pub use table::{Column, Table};
