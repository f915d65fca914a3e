//! Indicator implementations
//!
//! Contains all concrete indicator plugins.

pub mod willr_open;
