//! Willr Indicators
//!
//! Indicator plugins driven by an external algorithm runner.
//!
//! # Features
//! - `IndicatorPlugin` trait: process a dataset once per cycle, expose buy/sell signals
//! - Williams %R computed on the open price (`WilliamsROpen`)
//! - TA-Lib compatible `willr` numeric routine
//! - Registry mapping indicator names to constructors
//!
//! # Available Indicators
//! - `willr_open`: Williams %R using open instead of close

pub mod error;
pub mod impl_;
pub mod numeric;
pub mod registry;
pub mod traits;

// Re-export main types
pub use error::IndicatorError;
pub use registry::{IndicatorFactory, IndicatorRegistry};
pub use traits::{IndicatorPlugin, IndicatorReport};

// Re-export indicator implementations
pub use impl_::willr_open::{WilliamsROpen, get_indicator};

pub use willr_types::{Column, DailyRow, Dataset, IndicatorConfig, IndicatorSignal, Table};
