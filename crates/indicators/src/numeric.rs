//! Numeric routines used by the indicator plugins.
//!
//! `willr` follows the TA-Lib `WILLR` contract (period of at least 2, same
//! output length as the input, `NaN` during warmup, `0.0` for a flat range)
//! but returns the raw ratio in `[-1, 0]`; callers scale it.

use crate::error::IndicatorError;

/// Smallest window TA-Lib accepts for `WILLR`.
pub const MIN_PERIOD: usize = 2;

/// Williams %R ratio over a rolling window.
///
/// At index `i >= period - 1`:
/// `(reference[i] - highest_high) / (highest_high - lowest_low)`
/// over `high[i + 1 - period..=i]` and `low[i + 1 - period..=i]`.
///
/// `reference` is normally the close; any price series works.
/// A window containing `NaN` yields `NaN` at that index.
///
/// # Errors
/// Returns [`IndicatorError::NumericComputation`] if `period < 2`,
/// the input lengths differ, or the input is shorter than `period`.
pub fn willr(
    high: &[f64],
    low: &[f64],
    reference: &[f64],
    period: usize,
) -> Result<Vec<f64>, IndicatorError> {
    if period < MIN_PERIOD {
        return Err(IndicatorError::numeric(format!(
            "willr period must be >= {MIN_PERIOD}, got {period}"
        )));
    }
    let len = high.len();
    if low.len() != len || reference.len() != len {
        return Err(IndicatorError::numeric(format!(
            "willr input lengths differ: high={len}, low={}, reference={}",
            low.len(),
            reference.len()
        )));
    }
    if len < period {
        return Err(IndicatorError::numeric(format!(
            "willr needs at least {period} values, got {len}"
        )));
    }

    let mut result = vec![f64::NAN; len];
    for i in (period - 1)..len {
        let start = i + 1 - period;
        result[i] = ratio(&high[start..=i], &low[start..=i], reference[i]);
    }

    Ok(result)
}

fn ratio(high: &[f64], low: &[f64], reference: f64) -> f64 {
    if reference.is_nan() || high.iter().chain(low).any(|v| v.is_nan()) {
        return f64::NAN;
    }

    let highest = high.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lowest = low.iter().copied().fold(f64::INFINITY, f64::min);
    let range = highest - lowest;

    if range == 0.0 {
        0.0
    } else {
        (reference - highest) / range
    }
}
