//! Exponential Moving Average.
//!
//! α = 2/(span+1), seeded at row 0 with the first value:
//! EMA[0] = V[0], EMA[i] = V[i]*α + EMA[i-1]*(1-α).
//! Defined from row 0 onward; there is no warm-up window.

pub fn calculate_ema(values: &[f64], span: usize) -> Vec<f64> {
    if span == 0 || values.is_empty() {
        return Vec::new();
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut ema = values[0];
    out.push(ema);

    for &v in &values[1..] {
        ema = v * alpha + ema * (1.0 - alpha);
        out.push(ema);
    }

    out
}
