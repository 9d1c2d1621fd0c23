//! Per-symbol analysis pipeline.
//!
//! One symbol is fully processed at a time: price series per provider →
//! indicators → recommendation, merged with the process-wide macro sentiment
//! and the symbol's news sentiment. Provider failures are recorded per
//! source and never abort the other providers or symbols.

use crate::domain::indicator::{compute_indicators, IndicatorSnapshot};
use crate::domain::macro_sentiment::{classify_macro, MacroReading};
use crate::domain::news_sentiment::classify_news;
use crate::domain::recommendation::{merge_recommendations, recommend, Recommendation};
use crate::domain::sentiment::Sentiment;
use crate::ports::macro_port::MacroPort;
use crate::ports::news_port::NewsPort;
use crate::ports::price_port::PricePort;
use crate::ports::sentiment_port::SentimentPort;
use crate::ports::valuation_port::ValuationPort;

/// Read-only context shared across the symbol loop. Macro readings are
/// fetched once per process and never re-fetched per symbol.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    pub macro_reading: MacroReading,
    pub macro_sentiment: Sentiment,
}

impl AnalysisContext {
    pub fn from_port(port: &dyn MacroPort) -> Self {
        let macro_reading = port.fetch_reading();
        let macro_sentiment = classify_macro(&macro_reading);
        Self {
            macro_reading,
            macro_sentiment,
        }
    }
}

/// Indicator snapshot and recommendation from one price provider.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub source: String,
    pub rows: usize,
    pub snapshot: IndicatorSnapshot,
    /// `None` means insufficient history, not Hold.
    pub recommendation: Option<Recommendation>,
}

/// A provider that produced nothing usable for this symbol.
#[derive(Debug, Clone)]
pub struct SkippedProvider {
    pub source: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct SymbolReport {
    pub symbol: String,
    pub sources: Vec<SourceReport>,
    pub skipped: Vec<SkippedProvider>,
    pub valuation_ratio: Option<f64>,
    /// Merged view over per-provider recommendations.
    pub market_view: Sentiment,
    pub macro_sentiment: Sentiment,
    /// `None` means no headlines were available.
    pub news_sentiment: Option<Sentiment>,
}

/// Run the full pipeline for one symbol.
pub fn analyze_symbol(
    symbol: &str,
    period: &str,
    interval: &str,
    price_ports: &[&dyn PricePort],
    news_port: &dyn NewsPort,
    scorer: &dyn SentimentPort,
    valuation_port: &dyn ValuationPort,
    ctx: &AnalysisContext,
) -> SymbolReport {
    let mut skipped = Vec::new();

    let headlines = match news_port.fetch_headlines(symbol) {
        Ok(headlines) => headlines,
        Err(e) => {
            skipped.push(SkippedProvider {
                source: "news".into(),
                reason: e.to_string(),
            });
            Vec::new()
        }
    };
    let news_sentiment = classify_news(&headlines, scorer);

    let valuation_ratio = valuation_port.fetch_ratio(symbol);

    let mut sources = Vec::new();
    let mut recommendations = Vec::new();
    for port in price_ports {
        match port.fetch_series(symbol, period, interval) {
            Ok(Some(series)) if !series.is_empty() => {
                let analyzed = compute_indicators(series);
                let rows = analyzed.len();
                if let Some(snapshot) = analyzed.snapshot() {
                    let recommendation = recommend(&snapshot, valuation_ratio, rows);
                    recommendations.push(recommendation);
                    sources.push(SourceReport {
                        source: port.source_name().to_string(),
                        rows,
                        snapshot,
                        recommendation,
                    });
                }
            }
            Ok(_) => skipped.push(SkippedProvider {
                source: port.source_name().to_string(),
                reason: format!("no {period}/{interval} data for {symbol}"),
            }),
            Err(e) => skipped.push(SkippedProvider {
                source: port.source_name().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    let market_view = merge_recommendations(&recommendations);

    SymbolReport {
        symbol: symbol.to_string(),
        sources,
        skipped,
        valuation_ratio,
        market_view,
        macro_sentiment: ctx.macro_sentiment,
        news_sentiment,
    }
}
