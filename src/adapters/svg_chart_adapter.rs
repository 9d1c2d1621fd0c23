//! SVG overlay chart adapter.
//!
//! Writes one SVG per rendered series: close price, dashed Bollinger bounds,
//! and the three moving averages, scaled to a fixed viewport. Columns with
//! undefined warm-up rows start their polyline at the first defined row.

use crate::domain::error::StocklensError;
use crate::domain::indicator::AnalyzedSeries;
use crate::ports::chart_port::ChartPort;
use std::fs;
use std::path::PathBuf;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;
const PADDING: f64 = 50.0;

pub struct SvgChartAdapter {
    out_dir: PathBuf,
}

struct Scale {
    min: f64,
    span: f64,
    step: f64,
}

impl Scale {
    fn point(&self, index: usize, value: f64) -> (f64, f64) {
        let x = PADDING + index as f64 * self.step;
        let y = HEIGHT - PADDING - (value - self.min) / self.span * (HEIGHT - 2.0 * PADDING);
        (x, y)
    }
}

impl SvgChartAdapter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }

    fn chart_path(&self, symbol: &str, period: &str, interval: &str) -> PathBuf {
        self.out_dir
            .join(format!("{}_{}_{}.svg", symbol, period, interval))
    }
}

fn defined_points(column: &[Option<f64>]) -> Vec<(usize, f64)> {
    column
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| (i, v)))
        .collect()
}

fn polyline(points: &[(usize, f64)], scale: &Scale, stroke: &str, dashed: bool) -> String {
    if points.is_empty() {
        return String::new();
    }
    let coords: Vec<String> = points
        .iter()
        .map(|&(i, v)| {
            let (x, y) = scale.point(i, v);
            format!("{:.1},{:.1}", x, y)
        })
        .collect();
    let dash = if dashed { " stroke-dasharray=\"6 4\"" } else { "" };
    format!(
        "  <polyline fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\"{} points=\"{}\"/>\n",
        stroke,
        dash,
        coords.join(" ")
    )
}

impl ChartPort for SvgChartAdapter {
    fn render(
        &self,
        analyzed: &AnalyzedSeries,
        period: &str,
        interval: &str,
    ) -> Result<(), StocklensError> {
        let symbol = analyzed.series.symbol();
        if analyzed.is_empty() {
            return Err(StocklensError::Chart {
                reason: format!("no rows to chart for {}", symbol),
            });
        }

        let closes = analyzed.series.closes();
        let layers: [(&str, &str, bool, Vec<(usize, f64)>); 6] = [
            ("close", "#00b2e2", false, closes.iter().copied().enumerate().collect()),
            ("bollinger upper", "#d62728", true, defined_points(&analyzed.bollinger_upper)),
            ("bollinger lower", "#d62728", true, defined_points(&analyzed.bollinger_lower)),
            ("ma 20", "#2ca02c", false, defined_points(&analyzed.ma20)),
            ("ma 50", "#ff7f0e", false, defined_points(&analyzed.ma50)),
            ("ma 200", "#9467bd", false, defined_points(&analyzed.ma200)),
        ];

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (_, _, _, points) in &layers {
            for &(_, v) in points {
                min = min.min(v);
                max = max.max(v);
            }
        }
        let span = if max > min { max - min } else { 1.0 };
        let step = if closes.len() > 1 {
            (WIDTH - 2.0 * PADDING) / (closes.len() - 1) as f64
        } else {
            0.0
        };
        let scale = Scale { min, span, step };

        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.0} {h:.0}\">\n  <rect width=\"{w:.0}\" height=\"{h:.0}\" fill=\"#111418\"/>\n  <text x=\"{pad:.0}\" y=\"30\" fill=\"#e8e8e8\" font-family=\"sans-serif\" font-size=\"16\">{symbol} {period}/{interval}</text>\n",
            w = WIDTH,
            h = HEIGHT,
            pad = PADDING,
        );

        let mut legend_y = 50.0;
        for (name, stroke, dashed, points) in &layers {
            svg.push_str(&polyline(points, &scale, stroke, *dashed));
            if !points.is_empty() {
                svg.push_str(&format!(
                    "  <text x=\"{:.0}\" y=\"{:.0}\" fill=\"{}\" font-family=\"sans-serif\" font-size=\"11\">{}</text>\n",
                    WIDTH - PADDING - 90.0,
                    legend_y,
                    stroke,
                    name
                ));
                legend_y += 14.0;
            }
        }
        svg.push_str("</svg>\n");

        fs::create_dir_all(&self.out_dir)?;
        let path = self.chart_path(symbol, period, interval);
        fs::write(&path, svg)?;
        Ok(())
    }
}
