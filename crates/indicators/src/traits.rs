//! Indicator plugin trait and report types.

use serde::{Deserialize, Serialize};
use willr_types::{Dataset, IndicatorConfig, IndicatorSignal, Table};

use crate::error::IndicatorError;

/// Trait for indicator plugins driven by an algorithm runner.
///
/// The runner owns one instance per ticker run. Each cycle it calls
/// [`IndicatorPlugin::process`] and then reads the value and signals.
/// Between runs it calls [`IndicatorPlugin::reset_internals`].
///
/// # Example
/// ```ignore
/// let mut indicator = registry.create("willr_open", &config)?;
/// indicator.reset_internals();
/// indicator.process("algo-1", "SPY", &dataset)?;
/// if indicator.is_buy() == IndicatorSignal::Buy {
///     // place order
/// }
/// ```
pub trait IndicatorPlugin: Send {
    /// Name of the indicator (registry key).
    fn name(&self) -> &str;

    /// Configuration fixed at construction.
    fn config(&self) -> &IndicatorConfig;

    /// Runs one processing cycle over `dataset`.
    ///
    /// # Errors
    /// Returns [`IndicatorError::DataUnavailable`] when the subscribed table or a
    /// required column is missing and [`IndicatorError::NumericComputation`] when
    /// the value cannot be computed. State is left unchanged on error.
    fn process(
        &mut self,
        run_id: &str,
        ticker: &str,
        dataset: &Dataset,
    ) -> Result<(), IndicatorError>;

    /// Clears the buy/sell signals back to [`IndicatorSignal::Reset`].
    fn reset_internals(&mut self);

    /// Last computed value, `None` if the last cycle had insufficient history.
    fn value(&self) -> Option<f64>;

    /// Current buy signal.
    fn is_buy(&self) -> IndicatorSignal;

    /// Current sell signal.
    fn is_sell(&self) -> IndicatorSignal;

    /// Snapshot of the current state for the runner's per-cycle report.
    fn report(&self) -> IndicatorReport;

    /// Returns the table this indicator subscribes to (`config().uses_data`).
    ///
    /// # Errors
    /// Returns [`IndicatorError::DataUnavailable`] if `dataset` has no such table.
    fn subscribed_table<'a>(&self, dataset: &'a Dataset) -> Result<&'a Table, IndicatorError> {
        let uses_data = &self.config().uses_data;
        dataset.get(uses_data).ok_or_else(|| {
            let available = dataset.names().collect::<Vec<_>>().join(", ");
            IndicatorError::data_unavailable(format!(
                "{name}: dataset '{uses_data}' not found (available: {available})",
                name = self.name()
            ))
        })
    }
}

/// Per-cycle snapshot of an indicator's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReport {
    /// Indicator name
    pub name: String,
    /// Ticker of the last processed cycle
    #[serde(default)]
    pub ticker: Option<String>,
    /// Last computed value
    pub value: Option<f64>,
    /// Buy signal
    pub is_buy: IndicatorSignal,
    /// Sell signal
    pub is_sell: IndicatorSignal,
    /// Window length
    pub num_points: usize,
    /// Buy threshold
    pub buy_below: f64,
    /// Sell threshold
    pub sell_above: f64,
}
