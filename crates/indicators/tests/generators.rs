use proptest::prelude::*;
use std::ops::Range;
use willr_indicators::DailyRow;

/// Generates chronologically ordered rows with `low <= open <= high`.
pub fn valid_row_sequence(len: Range<usize>) -> impl Strategy<Value = Vec<DailyRow>> {
    prop::collection::vec(valid_row(), len).prop_map(|mut rows| {
        for (i, row) in rows.iter_mut().enumerate() {
            row.date = format!("2019-{:02}-{:02}", i / 28 + 1, i % 28 + 1);
        }
        rows
    })
}

fn valid_row() -> impl Strategy<Value = DailyRow> {
    (
        10.0f64..500.0, // base price
        0.0f64..5.0,    // half range
        0.0f64..=1.0,   // open position inside [low, high]
    )
        .prop_map(|(base, half_range, open_frac)| {
            let low = base - half_range;
            let high = base + half_range;
            let open = low + open_frac * (high - low);
            DailyRow::new(String::new(), open, high, low, base)
        })
}
