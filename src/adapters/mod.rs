//! Concrete port implementations.

pub mod file_config_adapter;
pub mod csv_price_adapter;
pub mod ini_macro_adapter;
pub mod file_news_adapter;
pub mod ini_valuation_adapter;
pub mod lexicon_sentiment_adapter;
pub mod console_report_adapter;
pub mod svg_chart_adapter;
