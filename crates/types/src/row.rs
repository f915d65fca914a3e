/// One daily OHLCV record.
///
/// `date` is kept as the ISO string the upstream dataset carries
/// (e.g. `2019-02-15`); it is only used for diagnostics.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DailyRow {
    /// Trading date (ISO format)
    pub date: String,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Volume
    #[serde(default)]
    pub volume: f64,
}

impl DailyRow {
    /// Creates a row without volume.
    #[must_use]
    pub fn new(date: impl Into<String>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date: date.into(),
            open,
            high,
            low,
            close,
            volume: 0.0,
        }
    }
}
