//! Indicator configuration.
//!
//! Configuration arrives as a JSON object (one entry of an algorithm's
//! `indicators` list). It is deserialized into a raw form first and then
//! validated into [`IndicatorConfig`], so invalid values surface as
//! [`CoreError::Config`] with a readable message.

use std::path::Path;

use crate::error::CoreError;

/// Validated indicator configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct IndicatorConfig {
    /// Indicator name, also used as registry key
    pub name: String,
    /// Name of the sub-dataset to read (e.g. `daily`)
    pub uses_data: String,
    /// Number of most-recent rows in the calculation window
    pub num_points: usize,
    /// Buy when the oscillator is strictly below this value
    pub buy_below: f64,
    /// Sell when the oscillator is strictly above this value
    pub sell_above: f64,
    /// Log every window row while processing
    pub verbose: bool,
}

fn default_name() -> String {
    "willr_open".to_string()
}

fn default_uses_data() -> String {
    "daily".to_string()
}

#[derive(Debug, Clone, serde::Deserialize)]
struct IndicatorConfigRaw {
    #[serde(default = "default_name")]
    name: String,
    #[serde(default = "default_uses_data")]
    uses_data: String,
    #[serde(default)]
    num_points: Option<i64>,
    #[serde(default)]
    buy_below: Option<f64>,
    #[serde(default)]
    sell_above: Option<f64>,
    #[serde(default)]
    verbose: bool,
}

impl TryFrom<IndicatorConfigRaw> for IndicatorConfig {
    type Error = CoreError;

    fn try_from(raw: IndicatorConfigRaw) -> Result<Self, Self::Error> {
        let num_points = match raw.num_points {
            None => return Err(CoreError::Config("missing num_points".to_string())),
            Some(n) if n <= 0 => {
                return Err(CoreError::Config(format!("num_points must be > 0, got {n}")));
            }
            Some(n) => usize::try_from(n)
                .map_err(|_| CoreError::Config(format!("num_points out of range: {n}")))?,
        };
        let buy_below = require_finite("buy_below", raw.buy_below)?;
        let sell_above = require_finite("sell_above", raw.sell_above)?;
        if raw.uses_data.is_empty() {
            return Err(CoreError::Config("uses_data must not be empty".to_string()));
        }

        Ok(Self {
            name: raw.name,
            uses_data: raw.uses_data,
            num_points,
            buy_below,
            sell_above,
            verbose: raw.verbose,
        })
    }
}

fn require_finite(key: &str, value: Option<f64>) -> Result<f64, CoreError> {
    match value {
        None => Err(CoreError::Config(format!("missing {key}"))),
        Some(v) if !v.is_finite() => Err(CoreError::Config(format!("{key} must be finite"))),
        Some(v) => Ok(v),
    }
}

impl<'de> serde::Deserialize<'de> for IndicatorConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = IndicatorConfigRaw::deserialize(deserializer)?;
        IndicatorConfig::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl IndicatorConfig {
    /// Creates a configuration reading the `daily` dataset.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if `num_points` is zero or a threshold is not finite.
    pub fn new(num_points: usize, buy_below: f64, sell_above: f64) -> Result<Self, CoreError> {
        let num_points = i64::try_from(num_points)
            .map_err(|_| CoreError::Config(format!("num_points out of range: {num_points}")))?;
        IndicatorConfig::try_from(IndicatorConfigRaw {
            name: default_name(),
            uses_data: default_uses_data(),
            num_points: Some(num_points),
            buy_below: Some(buy_below),
            sell_above: Some(sell_above),
            verbose: false,
        })
    }

    /// Sets the indicator name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the sub-dataset selector.
    #[must_use]
    pub fn with_uses_data(mut self, uses_data: impl Into<String>) -> Self {
        self.uses_data = uses_data.into();
        self
    }

    /// Enables or disables verbose diagnostics.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Parses and validates a configuration from a JSON value.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] for missing or invalid keys.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, CoreError> {
        let raw: IndicatorConfigRaw = serde_json::from_value(value.clone())
            .map_err(|e| CoreError::Config(e.to_string()))?;
        IndicatorConfig::try_from(raw)
    }

    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Errors
    /// Returns [`CoreError::Json`] for malformed JSON and
    /// [`CoreError::Config`] for missing or invalid keys.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Reads a configuration from a JSON file.
    ///
    /// # Errors
    /// Returns [`CoreError::Io`] if the file cannot be read, otherwise see
    /// [`IndicatorConfig::from_json_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
