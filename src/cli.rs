//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::console_report_adapter::ConsoleReportAdapter;
use crate::adapters::csv_price_adapter::CsvPriceAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::file_news_adapter::FileNewsAdapter;
use crate::adapters::ini_macro_adapter::IniMacroAdapter;
use crate::adapters::ini_valuation_adapter::IniValuationAdapter;
use crate::adapters::lexicon_sentiment_adapter::LexiconSentimentAdapter;
use crate::adapters::svg_chart_adapter::SvgChartAdapter;
use crate::domain::analysis::{analyze_symbol, AnalysisContext};
use crate::domain::error::StocklensError;
use crate::domain::indicator::compute_indicators;
use crate::domain::watchlist::parse_symbols;
use crate::ports::chart_port::ChartPort;
use crate::ports::config_port::ConfigPort;
use crate::ports::price_port::PricePort;
use crate::ports::report_port::ReportPort;

pub const DEFAULT_PERIOD: &str = "1y";
pub const DEFAULT_INTERVAL: &str = "1d";
pub const DEFAULT_CHART_PAIRS: &str = "1y:1d,6mo:1d,1d:1m";

#[derive(Parser, Debug)]
#[command(name = "stocklens", about = "Technical and sentiment stock analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze the configured symbols
    Analyze {
        #[arg(short, long)]
        config: PathBuf,
        /// Analyze one symbol instead of the configured list
        #[arg(long)]
        symbol: Option<String>,
        /// Directory for rendered charts
        #[arg(long)]
        charts_dir: Option<PathBuf>,
        /// Skip chart rendering
        #[arg(long)]
        no_charts: bool,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Analyze {
            config,
            symbol,
            charts_dir,
            no_charts,
        } => run_analyze(&config, symbol.as_deref(), charts_dir, no_charts),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = StocklensError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Parse `period:interval` pairs from a comma-separated list.
pub fn parse_chart_pairs(input: &str) -> Result<Vec<(String, String)>, StocklensError> {
    let mut pairs = Vec::new();
    for token in input.split(',') {
        let trimmed = token.trim();
        let (period, interval) =
            trimmed
                .split_once(':')
                .ok_or_else(|| StocklensError::ConfigInvalid {
                    section: "analysis".into(),
                    key: "chart_pairs".into(),
                    reason: format!("expected period:interval, got {:?}", trimmed),
                })?;
        if period.is_empty() || interval.is_empty() {
            return Err(StocklensError::ConfigInvalid {
                section: "analysis".into(),
                key: "chart_pairs".into(),
                reason: format!("expected period:interval, got {:?}", trimmed),
            });
        }
        pairs.push((period.to_string(), interval.to_string()));
    }
    Ok(pairs)
}

fn resolve_symbols(
    symbol_override: Option<&str>,
    config: &dyn ConfigPort,
) -> Result<Vec<String>, StocklensError> {
    let raw = match symbol_override {
        Some(symbol) => symbol.to_string(),
        None => config.get_string("analysis", "symbols").ok_or_else(|| {
            StocklensError::ConfigMissing {
                section: "analysis".into(),
                key: "symbols".into(),
            }
        })?,
    };
    parse_symbols(&raw).map_err(|e| StocklensError::ConfigInvalid {
        section: "analysis".into(),
        key: "symbols".into(),
        reason: e.to_string(),
    })
}

/// Price adapters from the `[data]` section: a required primary directory
/// and an optional secondary one, each with a configurable source name.
fn build_price_adapters(config: &dyn ConfigPort) -> Result<Vec<CsvPriceAdapter>, StocklensError> {
    let primary_dir =
        config
            .get_string("data", "primary_dir")
            .ok_or_else(|| StocklensError::ConfigMissing {
                section: "data".into(),
                key: "primary_dir".into(),
            })?;
    let primary_source = config
        .get_string("data", "primary_source")
        .unwrap_or_else(|| "primary".to_string());

    let mut adapters = vec![CsvPriceAdapter::new(PathBuf::from(primary_dir), primary_source)];

    if let Some(secondary_dir) = config.get_string("data", "secondary_dir") {
        let secondary_source = config
            .get_string("data", "secondary_source")
            .unwrap_or_else(|| "secondary".to_string());
        adapters.push(CsvPriceAdapter::new(
            PathBuf::from(secondary_dir),
            secondary_source,
        ));
    }

    Ok(adapters)
}

fn run_analyze(
    config_path: &PathBuf,
    symbol_override: Option<&str>,
    charts_dir_override: Option<PathBuf>,
    no_charts: bool,
) -> ExitCode {
    // Stage 1: Load config
    eprintln!("Loading config from {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    // Stage 2: Resolve symbols, period, interval
    let symbols = match resolve_symbols(symbol_override, &config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let period = config
        .get_string("analysis", "period")
        .unwrap_or_else(|| DEFAULT_PERIOD.to_string());
    let interval = config
        .get_string("analysis", "interval")
        .unwrap_or_else(|| DEFAULT_INTERVAL.to_string());

    let chart_pairs_raw = config
        .get_string("analysis", "chart_pairs")
        .unwrap_or_else(|| DEFAULT_CHART_PAIRS.to_string());
    let chart_pairs = match parse_chart_pairs(&chart_pairs_raw) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 3: Build adapters
    let price_adapters = match build_price_adapters(&config) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let price_ports: Vec<&dyn PricePort> =
        price_adapters.iter().map(|a| a as &dyn PricePort).collect();

    let news_dir = config
        .get_string("data", "news_dir")
        .unwrap_or_else(|| "news".to_string());
    let news_adapter = FileNewsAdapter::new(PathBuf::from(news_dir));
    let macro_adapter = IniMacroAdapter::new(&config);
    let valuation_adapter = IniValuationAdapter::new(&config);
    let scorer = LexiconSentimentAdapter::new();
    let report_adapter = ConsoleReportAdapter::new();

    let charts_dir = charts_dir_override
        .or_else(|| config.get_string("analysis", "charts_dir").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("charts"));
    let chart_adapter = SvgChartAdapter::new(charts_dir);

    // Stage 4: Macro readings, once for the whole run
    eprintln!("Fetching macro readings");
    let ctx = AnalysisContext::from_port(&macro_adapter);
    eprintln!("Macro sentiment: {}", ctx.macro_sentiment);

    // Stage 5: Symbol loop
    eprintln!(
        "Analyzing {} symbol(s) over {}/{}",
        symbols.len(),
        period,
        interval
    );
    for symbol in &symbols {
        let report = analyze_symbol(
            symbol,
            &period,
            &interval,
            &price_ports,
            &news_adapter,
            &scorer,
            &valuation_adapter,
            &ctx,
        );

        for skipped in &report.skipped {
            eprintln!("warning: {}: {}", skipped.source, skipped.reason);
        }

        if let Err(e) = report_adapter.write(&report) {
            eprintln!("error: {e}");
            return (&e).into();
        }

        if !no_charts {
            render_charts(symbol, &chart_pairs, price_ports[0], &chart_adapter);
        }
    }

    ExitCode::SUCCESS
}

/// Chart failures only warn; they never fail the run.
fn render_charts(
    symbol: &str,
    chart_pairs: &[(String, String)],
    price_port: &dyn PricePort,
    chart_adapter: &dyn ChartPort,
) {
    for (period, interval) in chart_pairs {
        match price_port.fetch_series(symbol, period, interval) {
            Ok(Some(series)) if !series.is_empty() => {
                let analyzed = compute_indicators(series);
                if let Err(e) = chart_adapter.render(&analyzed, period, interval) {
                    eprintln!("warning: {e}");
                }
            }
            Ok(_) => eprintln!(
                "warning: nothing to chart for {} at {}/{}",
                symbol, period, interval
            ),
            Err(e) => eprintln!("warning: {e}"),
        }
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let checks = || -> Result<usize, StocklensError> {
        let symbols = resolve_symbols(None, &config)?;
        build_price_adapters(&config)?;
        let chart_pairs_raw = config
            .get_string("analysis", "chart_pairs")
            .unwrap_or_else(|| DEFAULT_CHART_PAIRS.to_string());
        parse_chart_pairs(&chart_pairs_raw)?;
        Ok(symbols.len())
    };

    match checks() {
        Ok(count) => {
            println!("configuration OK ({} symbol(s))", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
