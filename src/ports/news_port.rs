//! News headline retrieval port trait.

use crate::domain::error::StocklensError;

pub trait NewsPort {
    /// Ordered headlines for a symbol; empty when none are available.
    fn fetch_headlines(&self, symbol: &str) -> Result<Vec<String>, StocklensError>;
}
