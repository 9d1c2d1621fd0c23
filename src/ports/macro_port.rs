//! Macroeconomic data port trait.

use crate::domain::macro_sentiment::MacroReading;

/// Supplies the latest macro indicator readings, fetched once per process.
///
/// Infallible by design: a provider failure for any individual indicator
/// leaves that field absent instead of aborting the rest.
pub trait MacroPort {
    fn fetch_reading(&self) -> MacroReading;
}
