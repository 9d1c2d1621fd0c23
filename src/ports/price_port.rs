//! Price retrieval port trait.

use crate::domain::error::StocklensError;
use crate::domain::series::PriceSeries;

/// Supplies OHLCV series per (symbol, period, interval).
///
/// Several providers may be configured at once; [`source_name`] tags each
/// series so their recommendations can be reported separately.
///
/// [`source_name`]: PricePort::source_name
pub trait PricePort {
    fn source_name(&self) -> &str;

    /// `Ok(None)` means the provider has nothing for this request; errors
    /// are reserved for malformed data.
    fn fetch_series(
        &self,
        symbol: &str,
        period: &str,
        interval: &str,
    ) -> Result<Option<PriceSeries>, StocklensError>;
}
