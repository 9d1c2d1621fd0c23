//! Chart rendering port trait.

use crate::domain::error::StocklensError;
use crate::domain::indicator::AnalyzedSeries;

/// Renders one indicator-augmented series as an overlay chart
/// (close, Bollinger bounds, the three moving averages).
pub trait ChartPort {
    fn render(
        &self,
        analyzed: &AnalyzedSeries,
        period: &str,
        interval: &str,
    ) -> Result<(), StocklensError>;
}
