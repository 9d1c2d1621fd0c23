//! RSI (Relative Strength Index).
//!
//! Simple rolling-mean variant: per-row delta, gains and losses averaged over
//! a plain n-row window (no recursive smoothing).
//!
//! RSI = 100 - 100/(1 + avg_gain/avg_loss)
//!
//! Degenerate windows resolve to fixed values instead of dividing by zero:
//! avg_loss == 0 → 100, avg_gain == 0 → 0, both zero → 50.
//!
//! Warmup: row 0 has no delta, so a full n-delta window first exists at
//! row n; the first n rows are undefined.

pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() < 2 {
        return out;
    }

    // gains[j] / losses[j] correspond to the delta into close index j+1
    let mut gains = Vec::with_capacity(closes.len() - 1);
    let mut losses = Vec::with_capacity(closes.len() - 1);
    for pair in closes.windows(2) {
        let delta = pair[1] - pair[0];
        gains.push(delta.max(0.0));
        losses.push((-delta).max(0.0));
    }

    for i in period..closes.len() {
        let window_gains = &gains[i - period..i];
        let window_losses = &losses[i - period..i];
        let avg_gain = window_gains.iter().sum::<f64>() / period as f64;
        let avg_loss = window_losses.iter().sum::<f64>() / period as f64;

        let rsi = if avg_gain == 0.0 && avg_loss == 0.0 {
            50.0
        } else if avg_loss == 0.0 {
            100.0
        } else if avg_gain == 0.0 {
            0.0
        } else {
            100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
        };
        out[i] = Some(rsi);
    }

    out
}
