//! Indicator error types.

use thiserror::Error;
use willr_types::CoreError;

/// Errors that can occur while building or running an indicator.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// Invalid or missing configuration at construction time
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Required sub-dataset or column missing at process time
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// Numeric routine rejected its input or produced a non-finite value
    #[error("numeric computation error: {0}")]
    NumericComputation(String),

    /// Unknown indicator name requested from registry
    #[error("unknown indicator: {0}")]
    UnknownIndicator(String),
}

impl IndicatorError {
    /// Creates a `Configuration` error with a message.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        IndicatorError::Configuration(msg.into())
    }

    /// Creates a `DataUnavailable` error with a message.
    #[must_use]
    pub fn data_unavailable(msg: impl Into<String>) -> Self {
        IndicatorError::DataUnavailable(msg.into())
    }

    /// Creates a `NumericComputation` error with a message.
    #[must_use]
    pub fn numeric(msg: impl Into<String>) -> Self {
        IndicatorError::NumericComputation(msg.into())
    }
}

impl From<CoreError> for IndicatorError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Config(msg) => IndicatorError::Configuration(msg),
            CoreError::Table(msg) => IndicatorError::DataUnavailable(msg),
            // io/json only arise while loading a configuration
            err @ (CoreError::Io(_) | CoreError::Json(_)) => {
                IndicatorError::Configuration(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IndicatorError::data_unavailable("dataset 'daily' not found");
        assert_eq!(err.to_string(), "data unavailable: dataset 'daily' not found");
    }

    #[test]
    fn test_from_core_config_error() {
        let err: IndicatorError = CoreError::Config("missing num_points".to_string()).into();
        assert!(
            matches!(err, IndicatorError::Configuration(ref msg) if msg == "missing num_points")
        );
    }

    #[test]
    fn test_from_core_table_error() {
        let err: IndicatorError = CoreError::Table("duplicate column 'open'".to_string()).into();
        assert!(
            matches!(err, IndicatorError::DataUnavailable(ref msg) if msg == "duplicate column 'open'")
        );
    }

    #[test]
    fn test_from_core_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: IndicatorError = CoreError::from(json_err).into();
        assert!(matches!(err, IndicatorError::Configuration(_)));
    }

    #[test]
    fn test_from_core_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.json");
        let err: IndicatorError = CoreError::from(io_err).into();
        assert!(matches!(err, IndicatorError::Configuration(_)));
    }
}
