//! Bollinger Bands.
//!
//! Middle = SMA(n), Upper/Lower = Middle ± multiplier × rolling stddev(n).
//! The middle band and the deviation share one n-row trailing window, so all
//! three bands become defined together at row n-1.
//!
//! Default parameters: period=20, multiplier=2.0.

use crate::domain::indicator::sma::calculate_sma;
use crate::domain::indicator::stddev::calculate_stddev;

pub const DEFAULT_PERIOD: usize = 20;
pub const DEFAULT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct BollingerSeries {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

pub fn calculate_bollinger(closes: &[f64], period: usize, multiplier: f64) -> BollingerSeries {
    let middle = calculate_sma(closes, period);
    let deviation = calculate_stddev(closes, period);

    let band = |sign: f64| -> Vec<Option<f64>> {
        middle
            .iter()
            .zip(&deviation)
            .map(|(m, d)| match (m, d) {
                (Some(m), Some(d)) => Some(m + sign * multiplier * d),
                _ => None,
            })
            .collect()
    };

    let upper = band(1.0);
    let lower = band(-1.0);
    BollingerSeries {
        upper,
        middle,
        lower,
    }
}

pub fn calculate_bollinger_default(closes: &[f64]) -> BollingerSeries {
    calculate_bollinger(closes, DEFAULT_PERIOD, DEFAULT_MULTIPLIER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bollinger_warmup() {
        let closes: Vec<f64> = (0..6).map(|i| 10.0 * i as f64).collect();
        let bands = calculate_bollinger(&closes, 3, 2.0);

        for i in 0..2 {
            assert!(bands.upper[i].is_none());
            assert!(bands.middle[i].is_none());
            assert!(bands.lower[i].is_none());
        }
        for i in 2..6 {
            assert!(bands.upper[i].is_some());
            assert!(bands.middle[i].is_some());
            assert!(bands.lower[i].is_some());
        }
    }

    #[test]
    fn bollinger_constant_series_collapses() {
        let closes = vec![100.0; 5];
        let bands = calculate_bollinger(&closes, 3, 2.0);
        assert!((bands.upper[3].unwrap() - 100.0).abs() < f64::EPSILON);
        assert!((bands.middle[3].unwrap() - 100.0).abs() < f64::EPSILON);
        assert!((bands.lower[3].unwrap() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bollinger_width_is_four_stddev() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + ((i * 7) % 5) as f64).collect();
        let bands = calculate_bollinger_default(&closes);
        let deviation = calculate_stddev(&closes, DEFAULT_PERIOD);

        for i in 0..closes.len() {
            if let (Some(upper), Some(lower), Some(d)) =
                (bands.upper[i], bands.lower[i], deviation[i])
            {
                assert!(((upper - lower) - 4.0 * d).abs() < 1e-9, "row {}", i);
            }
        }
    }

    #[test]
    fn bollinger_symmetric_around_middle() {
        let closes: Vec<f64> = (0..25).map(|i| 50.0 + (i % 7) as f64).collect();
        let bands = calculate_bollinger_default(&closes);
        for i in 0..closes.len() {
            if let (Some(u), Some(m), Some(l)) = (bands.upper[i], bands.middle[i], bands.lower[i])
            {
                assert!(((u - m) - (m - l)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn bollinger_empty_input() {
        let bands = calculate_bollinger_default(&[]);
        assert!(bands.upper.is_empty());
        assert!(bands.middle.is_empty());
        assert!(bands.lower.is_empty());
    }
}
