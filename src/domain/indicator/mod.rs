//! Technical indicator computation engine.
//!
//! Each indicator lives in its own module and returns a column aligned by row
//! index to the input series. Rows before an indicator's warm-up window hold
//! `None`, never a substituted numeric value. All windows trail the current
//! row; nothing looks ahead.
//!
//! [`compute_indicators`] runs the full fixed set over a [`PriceSeries`] and
//! produces an [`AnalyzedSeries`] with every derived column.

pub mod sma;
pub mod ema;
pub mod rsi;
pub mod stddev;
pub mod macd;
pub mod bollinger;
pub mod atr;

use crate::domain::series::PriceSeries;

pub const MA_SHORT: usize = 20;
pub const MA_MEDIUM: usize = 50;
pub const MA_LONG: usize = 200;
pub const RSI_PERIOD: usize = 14;
pub const ATR_PERIOD: usize = 14;

/// A price series augmented with the derived indicator columns.
///
/// Every column has the same length as the underlying bars.
#[derive(Debug, Clone)]
pub struct AnalyzedSeries {
    pub series: PriceSeries,
    pub ma20: Vec<Option<f64>>,
    pub ma50: Vec<Option<f64>>,
    pub ma200: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub ema12: Vec<Option<f64>>,
    pub ema26: Vec<Option<f64>>,
    pub macd: Vec<Option<f64>>,
    pub macd_signal: Vec<Option<f64>>,
    pub bollinger_upper: Vec<Option<f64>>,
    pub bollinger_middle: Vec<Option<f64>>,
    pub bollinger_lower: Vec<Option<f64>>,
    pub atr: Vec<Option<f64>>,
}

/// Derived-column values at the most recent row.
#[derive(Debug, Clone)]
pub struct IndicatorSnapshot {
    pub close: f64,
    pub ma20: Option<f64>,
    pub ma50: Option<f64>,
    pub ma200: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub bollinger_upper: Option<f64>,
    pub bollinger_middle: Option<f64>,
    pub bollinger_lower: Option<f64>,
    pub atr: Option<f64>,
}

impl AnalyzedSeries {
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Values at the last row, or `None` for an empty series.
    pub fn snapshot(&self) -> Option<IndicatorSnapshot> {
        let close = self.series.last_close()?;
        let last = |col: &Vec<Option<f64>>| col.last().copied().flatten();
        Some(IndicatorSnapshot {
            close,
            ma20: last(&self.ma20),
            ma50: last(&self.ma50),
            ma200: last(&self.ma200),
            rsi: last(&self.rsi),
            macd: last(&self.macd),
            macd_signal: last(&self.macd_signal),
            bollinger_upper: last(&self.bollinger_upper),
            bollinger_middle: last(&self.bollinger_middle),
            bollinger_lower: last(&self.bollinger_lower),
            atr: last(&self.atr),
        })
    }
}

/// Compute the full indicator set over a series.
///
/// An empty series yields empty columns.
pub fn compute_indicators(series: PriceSeries) -> AnalyzedSeries {
    let closes = series.closes();

    let ma20 = sma::calculate_sma(&closes, MA_SHORT);
    let ma50 = sma::calculate_sma(&closes, MA_MEDIUM);
    let ma200 = sma::calculate_sma(&closes, MA_LONG);
    let rsi = rsi::calculate_rsi(&closes, RSI_PERIOD);
    let ema12 = ema::calculate_ema(&closes, macd::DEFAULT_FAST);
    let ema26 = ema::calculate_ema(&closes, macd::DEFAULT_SLOW);
    let macd_series = macd::calculate_macd_default(&closes);
    let bands = bollinger::calculate_bollinger_default(&closes);
    let atr = atr::calculate_atr(series.bars(), ATR_PERIOD);

    AnalyzedSeries {
        series,
        ma20,
        ma50,
        ma200,
        rsi,
        ema12: ema12.into_iter().map(Some).collect(),
        ema26: ema26.into_iter().map(Some).collect(),
        macd: macd_series.line.into_iter().map(Some).collect(),
        macd_signal: macd_series.signal.into_iter().map(Some).collect(),
        bollinger_upper: bands.upper,
        bollinger_middle: bands.middle,
        bollinger_lower: bands.lower,
        atr,
    }
}
