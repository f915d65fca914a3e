/// Signal state produced by an indicator for one side (buy or sell).
///
/// `Reset` is the state before the first `process` of a run and after
/// `reset_internals`. `Ignore` means the threshold was evaluated and not hit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorSignal {
    /// Cleared between runs
    #[default]
    Reset,
    /// Evaluated, no trigger
    Ignore,
    /// Buy trigger
    Buy,
    /// Sell trigger
    Sell,
}

impl IndicatorSignal {
    /// Lowercase label used in log records and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IndicatorSignal::Reset => "reset",
            IndicatorSignal::Ignore => "ignore",
            IndicatorSignal::Buy => "buy",
            IndicatorSignal::Sell => "sell",
        }
    }
}

impl std::fmt::Display for IndicatorSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
