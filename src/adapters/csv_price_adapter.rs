//! CSV file price adapter.
//!
//! One file per (symbol, period, interval) under a base directory:
//! `<base>/<SYMBOL>_<period>_<interval>.csv` with columns
//! timestamp,open,high,low,close,volume. Timestamps accept either
//! `YYYY-MM-DD HH:MM:SS` or a bare `YYYY-MM-DD` (midnight).

use crate::domain::error::StocklensError;
use crate::domain::ohlcv::PriceBar;
use crate::domain::series::PriceSeries;
use crate::ports::price_port::PricePort;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::PathBuf;

pub struct CsvPriceAdapter {
    base_path: PathBuf,
    source: String,
}

impl CsvPriceAdapter {
    pub fn new(base_path: PathBuf, source: impl Into<String>) -> Self {
        Self {
            base_path,
            source: source.into(),
        }
    }

    fn csv_path(&self, symbol: &str, period: &str, interval: &str) -> PathBuf {
        self.base_path
            .join(format!("{}_{}_{}.csv", symbol, period, interval))
    }

    fn parse_timestamp(&self, raw: &str) -> Result<NaiveDateTime, StocklensError> {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return Ok(ts);
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|d| d.and_time(chrono::NaiveTime::MIN))
            .map_err(|e| StocklensError::Provider {
                provider: self.source.clone(),
                reason: format!("invalid timestamp {:?}: {}", raw, e),
            })
    }

    fn parse_field(
        &self,
        record: &csv::StringRecord,
        index: usize,
        name: &str,
    ) -> Result<f64, StocklensError> {
        record
            .get(index)
            .ok_or_else(|| StocklensError::Provider {
                provider: self.source.clone(),
                reason: format!("missing {} column", name),
            })?
            .trim()
            .parse()
            .map_err(|e| StocklensError::Provider {
                provider: self.source.clone(),
                reason: format!("invalid {} value: {}", name, e),
            })
    }
}

impl PricePort for CsvPriceAdapter {
    fn source_name(&self) -> &str {
        &self.source
    }

    fn fetch_series(
        &self,
        symbol: &str,
        period: &str,
        interval: &str,
    ) -> Result<Option<PriceSeries>, StocklensError> {
        let path = self.csv_path(symbol, period, interval);
        if !path.exists() {
            // provider simply has nothing for this request
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| StocklensError::Provider {
            provider: self.source.clone(),
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| StocklensError::Provider {
                provider: self.source.clone(),
                reason: format!("CSV parse error: {}", e),
            })?;

            let raw_timestamp = record.get(0).ok_or_else(|| StocklensError::Provider {
                provider: self.source.clone(),
                reason: "missing timestamp column".into(),
            })?;
            let timestamp = self.parse_timestamp(raw_timestamp.trim())?;

            let open = self.parse_field(&record, 1, "open")?;
            let high = self.parse_field(&record, 2, "high")?;
            let low = self.parse_field(&record, 3, "low")?;
            let close = self.parse_field(&record, 4, "close")?;
            let volume = record
                .get(5)
                .ok_or_else(|| StocklensError::Provider {
                    provider: self.source.clone(),
                    reason: "missing volume column".into(),
                })?
                .trim()
                .parse()
                .map_err(|e| StocklensError::Provider {
                    provider: self.source.clone(),
                    reason: format!("invalid volume value: {}", e),
                })?;

            bars.push(PriceBar {
                symbol: symbol.to_string(),
                timestamp,
                open,
                high,
                low,
                close,
                volume,
            });
        }

        PriceSeries::new(symbol, self.source.clone(), bars).map(Some)
    }
}
