//! Rolling standard deviation.
//!
//! Sample standard deviation (divides by n-1) over an n-row trailing window,
//! consistent with the 20-row SMA window the Bollinger bands share.
//! Warmup: first (n-1) rows are undefined; n must be at least 2.

pub fn calculate_stddev(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period < 2 {
        return out;
    }

    for i in (period - 1)..values.len() {
        let window = &values[i + 1 - period..=i];
        let mean = window.iter().sum::<f64>() / period as f64;
        let variance = window
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / (period - 1) as f64;
        out[i] = Some(variance.sqrt());
    }

    out
}
