use willr_indicators::{DailyRow, Dataset, IndicatorConfig, WilliamsROpen};

pub const RUN_ID: &str = "willr-open-test";
pub const TICKER: &str = "SPY";

/// `n` daily rows starting 2019-01-02, high=110 and low=90 on every row,
/// open=100 except the last row which opens at `last_open`.
pub fn rows_with_last_open(n: usize, last_open: f64) -> Vec<DailyRow> {
    (0..n)
        .map(|i| {
            let open = if i + 1 == n { last_open } else { 100.0 };
            DailyRow::new(day(i), open, 110.0, 90.0, 100.0)
        })
        .collect()
}

pub fn day(i: usize) -> String {
    format!("2019-{:02}-{:02}", i / 28 + 1, i % 28 + 1)
}

pub fn daily(rows: &[DailyRow]) -> Dataset {
    Dataset::new().with_rows("daily", rows)
}

pub fn indicator(num_points: usize, buy_below: f64, sell_above: f64) -> WilliamsROpen {
    let config = IndicatorConfig::new(num_points, buy_below, sell_above).unwrap();
    WilliamsROpen::new(config).unwrap()
}
