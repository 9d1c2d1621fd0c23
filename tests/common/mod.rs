#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use stocklens::domain::error::StocklensError;
pub use stocklens::domain::ohlcv::PriceBar;
use stocklens::domain::series::PriceSeries;
use stocklens::ports::news_port::NewsPort;
use stocklens::ports::price_port::PricePort;
use stocklens::ports::sentiment_port::SentimentPort;
use stocklens::ports::valuation_port::ValuationPort;

pub fn timestamp(day_offset: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        + chrono::Duration::days(day_offset)
}

pub fn make_bar(symbol: &str, day_offset: i64, close: f64) -> PriceBar {
    PriceBar {
        symbol: symbol.to_string(),
        timestamp: timestamp(day_offset),
        open: close,
        high: close + 1.0,
        low: close - 1.0,
        close,
        volume: 1000,
    }
}

pub fn bars_from_closes(symbol: &str, closes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| make_bar(symbol, i as i64, close))
        .collect()
}

pub fn make_series(symbol: &str, source: &str, closes: &[f64]) -> PriceSeries {
    PriceSeries::new(symbol, source, bars_from_closes(symbol, closes)).unwrap()
}

pub struct MockPricePort {
    pub name: String,
    pub data: HashMap<String, Vec<PriceBar>>,
    pub errors: HashMap<String, String>,
}

impl MockPricePort {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, symbol: &str, bars: Vec<PriceBar>) -> Self {
        self.data.insert(symbol.to_string(), bars);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl PricePort for MockPricePort {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn fetch_series(
        &self,
        symbol: &str,
        _period: &str,
        _interval: &str,
    ) -> Result<Option<PriceSeries>, StocklensError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(StocklensError::Provider {
                provider: self.name.clone(),
                reason: reason.clone(),
            });
        }
        match self.data.get(symbol) {
            Some(bars) => Ok(Some(PriceSeries::new(
                symbol,
                self.name.clone(),
                bars.clone(),
            )?)),
            None => Ok(None),
        }
    }
}

pub struct MockNewsPort {
    pub headlines: HashMap<String, Vec<String>>,
}

impl MockNewsPort {
    pub fn new() -> Self {
        Self {
            headlines: HashMap::new(),
        }
    }

    pub fn with_headlines(mut self, symbol: &str, headlines: &[&str]) -> Self {
        self.headlines.insert(
            symbol.to_string(),
            headlines.iter().map(|h| h.to_string()).collect(),
        );
        self
    }
}

impl NewsPort for MockNewsPort {
    fn fetch_headlines(&self, symbol: &str) -> Result<Vec<String>, StocklensError> {
        Ok(self.headlines.get(symbol).cloned().unwrap_or_default())
    }
}

pub struct MockValuationPort {
    pub ratios: HashMap<String, f64>,
}

impl MockValuationPort {
    pub fn new() -> Self {
        Self {
            ratios: HashMap::new(),
        }
    }

    pub fn with_ratio(mut self, symbol: &str, ratio: f64) -> Self {
        self.ratios.insert(symbol.to_string(), ratio);
        self
    }
}

impl ValuationPort for MockValuationPort {
    fn fetch_ratio(&self, symbol: &str) -> Option<f64> {
        self.ratios.get(symbol).copied()
    }
}

/// Scorer with canned per-headline polarities; unknown text scores 0.
pub struct FixedPolarityScorer {
    pub scores: HashMap<String, f64>,
}

impl FixedPolarityScorer {
    pub fn new(entries: &[(&str, f64)]) -> Self {
        Self {
            scores: entries
                .iter()
                .map(|(text, score)| (text.to_string(), *score))
                .collect(),
        }
    }
}

impl SentimentPort for FixedPolarityScorer {
    fn polarity(&self, text: &str) -> f64 {
        self.scores.get(text).copied().unwrap_or(0.0)
    }
}
