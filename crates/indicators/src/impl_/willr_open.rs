//! Williams %R computed on the open price.
//!
//! Same formula as the conventional Williams %R but the open of the latest
//! row replaces the close:
//!
//! `%R = 100 * (open - highest_high) / (highest_high - lowest_low)`
//!
//! over the last `num_points` rows. Range: `[-100, 0]`.
//! - near -100: oversold, buy when below `buy_below`
//! - near 0: overbought, sell when above `sell_above`

use willr_types::{Dataset, IndicatorConfig, IndicatorSignal, Table};

use crate::error::IndicatorError;
use crate::numeric;
use crate::traits::{IndicatorPlugin, IndicatorReport};

/// Williams %R (open) indicator plugin
#[derive(Debug, Clone)]
pub struct WilliamsROpen {
    config: IndicatorConfig,
    willr_open_value: Option<f64>,
    is_buy: IndicatorSignal,
    is_sell: IndicatorSignal,
    last_ticker: Option<String>,
}

impl WilliamsROpen {
    /// Creates the plugin with both signals in the `Reset` state.
    ///
    /// # Errors
    /// Returns [`IndicatorError::Configuration`] if `num_points` is zero.
    pub fn new(config: IndicatorConfig) -> Result<Self, IndicatorError> {
        if config.num_points == 0 {
            return Err(IndicatorError::configuration("num_points must be > 0"));
        }
        Ok(Self {
            config,
            willr_open_value: None,
            is_buy: IndicatorSignal::Reset,
            is_sell: IndicatorSignal::Reset,
            last_ticker: None,
        })
    }

    /// Creates the plugin from a JSON configuration object.
    ///
    /// # Errors
    /// Returns [`IndicatorError::Configuration`] for missing or invalid keys.
    pub fn from_value(params: &serde_json::Value) -> Result<Self, IndicatorError> {
        Self::new(IndicatorConfig::from_value(params)?)
    }

    /// Last computed oscillator value.
    #[must_use]
    pub fn oscillator_value(&self) -> Option<f64> {
        self.willr_open_value
    }

    fn signals_for(&self, value: f64) -> (IndicatorSignal, IndicatorSignal) {
        let is_buy = if value < self.config.buy_below {
            IndicatorSignal::Buy
        } else {
            IndicatorSignal::Ignore
        };
        let is_sell = if value > self.config.sell_above {
            IndicatorSignal::Sell
        } else {
            IndicatorSignal::Ignore
        };
        (is_buy, is_sell)
    }
}

fn float_column<'a>(table: &'a Table, name: &str) -> Result<&'a [f64], IndicatorError> {
    table
        .float_column(name)
        .ok_or_else(|| missing_column(table, name, "numeric"))
}

fn text_column<'a>(table: &'a Table, name: &str) -> Result<&'a [String], IndicatorError> {
    table
        .text_column(name)
        .ok_or_else(|| missing_column(table, name, "text"))
}

fn missing_column(table: &Table, name: &str, kind: &str) -> IndicatorError {
    let available = table.column_names().collect::<Vec<_>>().join(", ");
    IndicatorError::data_unavailable(format!(
        "column '{name}' missing or not {kind} (available: {available})"
    ))
}

impl IndicatorPlugin for WilliamsROpen {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn process(
        &mut self,
        run_id: &str,
        ticker: &str,
        dataset: &Dataset,
    ) -> Result<(), IndicatorError> {
        let table = self.subscribed_table(dataset)?;
        let num_points = self.config.num_points;
        let num_records = table.len();

        tracing::info!(run_id, ticker, num_points, num_records, "process start");

        if num_records <= num_points {
            self.willr_open_value = None;
            self.last_ticker = Some(ticker.to_string());
            tracing::info!(
                run_id,
                ticker,
                willr_open_value = ?self.willr_open_value,
                "process end"
            );
            return Ok(());
        }

        let window = table.tail(num_points);
        let dates = text_column(&window, "date")?;
        let highs = float_column(&window, "high")?;
        let lows = float_column(&window, "low")?;
        let opens = float_column(&window, "open")?;

        // tail() of a table longer than num_points is never empty
        let first_date = dates.first().map_or("", String::as_str);
        let end_date = dates.last().map_or("", String::as_str);

        if self.config.verbose {
            for (((date, high), low), open) in dates.iter().zip(highs).zip(lows).zip(opens) {
                tracing::info!(
                    ticker,
                    date = %date,
                    high,
                    low,
                    open,
                    period = num_points,
                    "WILLR input"
                );
            }
        }

        let willr_values = numeric::willr(highs, lows, opens, num_points).inspect_err(|err| {
            tracing::warn!(run_id, ticker, first_date, end_date, "willr failed: {err}");
        })?;
        let value = willr_values.last().copied().unwrap_or(f64::NAN) * 100.0;
        if !value.is_finite() {
            tracing::warn!(run_id, ticker, first_date, end_date, "willr produced {value}");
            return Err(IndicatorError::numeric(format!(
                "{ticker} ({run_id}): non-finite willr_open value {value} for {first_date} to {end_date}"
            )));
        }

        let (is_buy, is_sell) = self.signals_for(value);
        self.willr_open_value = Some(value);
        self.is_buy = is_buy;
        self.is_sell = is_sell;
        self.last_ticker = Some(ticker.to_string());

        tracing::info!(
            run_id,
            ticker,
            first_date,
            end_date,
            willr_open_value = value,
            buy_below = self.config.buy_below,
            is_buy = %is_buy,
            sell_above = self.config.sell_above,
            is_sell = %is_sell,
            "process end"
        );

        Ok(())
    }

    fn reset_internals(&mut self) {
        self.is_buy = IndicatorSignal::Reset;
        self.is_sell = IndicatorSignal::Reset;
    }

    fn value(&self) -> Option<f64> {
        self.willr_open_value
    }

    fn is_buy(&self) -> IndicatorSignal {
        self.is_buy
    }

    fn is_sell(&self) -> IndicatorSignal {
        self.is_sell
    }

    fn report(&self) -> IndicatorReport {
        IndicatorReport {
            name: self.config.name.clone(),
            ticker: self.last_ticker.clone(),
            value: self.willr_open_value,
            is_buy: self.is_buy,
            is_sell: self.is_sell,
            num_points: self.config.num_points,
            buy_below: self.config.buy_below,
            sell_above: self.config.sell_above,
        }
    }
}

/// Builds a [`WilliamsROpen`] from a JSON configuration object.
///
/// Kept for callers that look indicators up by module rather than through
/// [`crate::IndicatorRegistry`].
///
/// # Errors
/// Returns [`IndicatorError::Configuration`] for missing or invalid keys.
pub fn get_indicator(params: &serde_json::Value) -> Result<WilliamsROpen, IndicatorError> {
    tracing::info!("getting indicator");
    WilliamsROpen::from_value(params)
}
