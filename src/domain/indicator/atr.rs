//! ATR (Average True Range).
//!
//! True range per row: max(high-low, |high-prev_close|, |low-prev_close|).
//! Row 0 has no previous close; its true range is high-low.
//! ATR(n) = simple rolling mean of the true range over n rows, so the first
//! (n-1) rows are undefined.

use crate::domain::indicator::sma::calculate_sma;
use crate::domain::ohlcv::PriceBar;

pub fn calculate_true_range(bars: &[PriceBar]) -> Vec<f64> {
    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            if i == 0 {
                bar.high - bar.low
            } else {
                bar.true_range(bars[i - 1].close)
            }
        })
        .collect()
}

pub fn calculate_atr(bars: &[PriceBar], period: usize) -> Vec<Option<f64>> {
    calculate_sma(&calculate_true_range(bars), period)
}
