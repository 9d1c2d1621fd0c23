//! Console report adapter.
//!
//! Prints one symbol's analysis with per-indicator rationale lines and a
//! colored recommendation footer. Colors are bold ANSI escapes; `plain()`
//! disables them for piped output and tests.

use crate::domain::analysis::{SourceReport, SymbolReport};
use crate::domain::error::StocklensError;
use crate::domain::recommendation::{
    Recommendation, RSI_OVERBOUGHT, RSI_OVERSOLD, VALUATION_CHEAP, VALUATION_EXPENSIVE,
};
use crate::domain::sentiment::Sentiment;
use crate::ports::report_port::ReportPort;
use std::fmt::Write as _;

const GREEN: &str = "32";
const RED: &str = "31";
const YELLOW: &str = "33";

pub struct ConsoleReportAdapter {
    color: bool,
}

impl ConsoleReportAdapter {
    pub fn new() -> Self {
        Self { color: true }
    }

    /// No escape codes; for piped output and tests.
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn colored(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("\x1b[1;{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }

    fn sentiment(&self, sentiment: Sentiment) -> String {
        let code = match sentiment {
            Sentiment::Positive => GREEN,
            Sentiment::Negative => RED,
            Sentiment::Neutral => YELLOW,
        };
        self.colored(&sentiment.to_string(), code)
    }

    fn recommendation(&self, recommendation: Option<Recommendation>) -> String {
        match recommendation {
            Some(Recommendation::Buy) => self.colored("Buy", GREEN),
            Some(Recommendation::Sell) => self.colored("Sell", RED),
            Some(Recommendation::Hold) => self.colored("Hold", YELLOW),
            None => "insufficient data".to_string(),
        }
    }

    fn write_source(&self, out: &mut String, source: &SourceReport) {
        let s = &source.snapshot;
        let _ = writeln!(out, "\n{} ({} rows):", source.source, source.rows);
        let _ = writeln!(out, "  MA_20: {}  MA_50: {}  MA_200: {}",
            fmt_opt(s.ma20), fmt_opt(s.ma50), fmt_opt(s.ma200));

        match s.ma20 {
            Some(ma) if source.snapshot.close > ma => {
                let _ = writeln!(out, "  Price is above the 20-bar average.");
            }
            Some(_) => {
                let _ = writeln!(out, "  Price is below the 20-bar average.");
            }
            None => {}
        }

        let _ = writeln!(out, "  RSI: {}", fmt_opt(s.rsi));
        match s.rsi {
            Some(rsi) if rsi < RSI_OVERSOLD => {
                let _ = writeln!(out, "  RSI signals an oversold condition.");
            }
            Some(rsi) if rsi > RSI_OVERBOUGHT => {
                let _ = writeln!(out, "  RSI signals an overbought condition.");
            }
            Some(_) => {
                let _ = writeln!(out, "  RSI is in its neutral band.");
            }
            None => {}
        }

        let _ = writeln!(out, "  MACD: {}  Signal: {}", fmt_opt(s.macd), fmt_opt(s.macd_signal));
        if let (Some(line), Some(signal)) = (s.macd, s.macd_signal) {
            if line > signal {
                let _ = writeln!(out, "  MACD is above its signal line.");
            } else {
                let _ = writeln!(out, "  MACD is below its signal line.");
            }
        }

        let _ = writeln!(out, "  Bollinger: {} / {} / {}",
            fmt_opt(s.bollinger_upper), fmt_opt(s.bollinger_middle), fmt_opt(s.bollinger_lower));
        match (s.bollinger_upper, s.bollinger_lower) {
            (Some(upper), _) if s.close > upper => {
                let _ = writeln!(out, "  Price closed above the upper band.");
            }
            (_, Some(lower)) if s.close < lower => {
                let _ = writeln!(out, "  Price closed below the lower band.");
            }
            (Some(_), Some(_)) => {
                let _ = writeln!(out, "  Price is inside the bands.");
            }
            _ => {}
        }

        let _ = writeln!(out, "  ATR: {}", fmt_opt(s.atr));
        let _ = writeln!(out, "  Close: {:.2}", s.close);
        let _ = writeln!(out, "  Recommendation: {}", self.recommendation(source.recommendation));
    }

    pub fn format_report(&self, report: &SymbolReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n*** {} ***", report.symbol);

        for skipped in &report.skipped {
            let _ = writeln!(out, "({} skipped: {})", skipped.source, skipped.reason);
        }

        for source in &report.sources {
            self.write_source(&mut out, source);
        }

        match report.valuation_ratio {
            Some(ratio) => {
                let _ = writeln!(out, "\nValuation ratio: {:.2}", ratio);
                if ratio < VALUATION_CHEAP {
                    let _ = writeln!(out, "  Below {}: possibly undervalued.", VALUATION_CHEAP);
                } else if ratio > VALUATION_EXPENSIVE {
                    let _ = writeln!(out, "  Above {}: possibly overvalued.", VALUATION_EXPENSIVE);
                } else {
                    let _ = writeln!(out, "  Inside the neutral range.");
                }
            }
            None => {
                let _ = writeln!(out, "\nValuation ratio not available.");
            }
        }

        let _ = writeln!(out, "\nRecommendations:");
        let _ = writeln!(out, "Financial Analysis: {}", self.sentiment(report.market_view));
        let _ = writeln!(out, "Macroeconomic Analysis: {}", self.sentiment(report.macro_sentiment));
        let news = match report.news_sentiment {
            Some(sentiment) => self.sentiment(sentiment),
            None => "no data".to_string(),
        };
        let _ = writeln!(out, "News Sentiment Analysis: {}", news);

        out
    }
}

impl Default for ConsoleReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPort for ConsoleReportAdapter {
    fn write(&self, report: &SymbolReport) -> Result<(), StocklensError> {
        print!("{}", self.format_report(report));
        Ok(())
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "n/a".to_string(),
    }
}
