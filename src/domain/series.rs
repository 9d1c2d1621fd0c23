//! Provenance-tagged price series for one symbol.

use crate::domain::error::StocklensError;
use crate::domain::ohlcv::PriceBar;

/// OHLCV bars for one symbol from one data source, ascending by timestamp.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    symbol: String,
    source: String,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series, validating strict timestamp ordering.
    pub fn new(
        symbol: impl Into<String>,
        source: impl Into<String>,
        bars: Vec<PriceBar>,
    ) -> Result<Self, StocklensError> {
        let symbol = symbol.into();
        for pair in bars.windows(2) {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(StocklensError::Series {
                    symbol,
                    reason: format!(
                        "bars out of order at {} (previous {})",
                        pair[1].timestamp, pair[0].timestamp
                    ),
                });
            }
        }
        Ok(Self {
            symbol,
            source: source.into(),
            bars,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Name of the data provider that produced these bars.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(day: u32, close: f64) -> PriceBar {
        PriceBar {
            symbol: "ONON".into(),
            timestamp: NaiveDate::from_ymd_opt(2024, 1, day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1000,
        }
    }

    #[test]
    fn accepts_ascending_bars() {
        let series = PriceSeries::new("ONON", "primary", vec![bar(1, 10.0), bar(2, 11.0)]);
        let series = series.unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.symbol(), "ONON");
        assert_eq!(series.source(), "primary");
        assert_eq!(series.closes(), vec![10.0, 11.0]);
        assert_eq!(series.last_close(), Some(11.0));
    }

    #[test]
    fn rejects_out_of_order_bars() {
        let result = PriceSeries::new("ONON", "primary", vec![bar(2, 10.0), bar(1, 11.0)]);
        assert!(matches!(result, Err(StocklensError::Series { .. })));
    }

    #[test]
    fn rejects_duplicate_timestamps() {
        let result = PriceSeries::new("ONON", "primary", vec![bar(1, 10.0), bar(1, 11.0)]);
        assert!(matches!(result, Err(StocklensError::Series { .. })));
    }

    #[test]
    fn empty_series() {
        let series = PriceSeries::new("ONON", "primary", Vec::new()).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.last_close(), None);
    }
}
