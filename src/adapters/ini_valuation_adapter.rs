//! Valuation ratios from a `[valuation]` config section, keyed by symbol.

use crate::ports::config_port::ConfigPort;
use crate::ports::valuation_port::ValuationPort;

pub const VALUATION_SECTION: &str = "valuation";

pub struct IniValuationAdapter<'a> {
    config: &'a dyn ConfigPort,
}

impl<'a> IniValuationAdapter<'a> {
    pub fn new(config: &'a dyn ConfigPort) -> Self {
        Self { config }
    }
}

impl ValuationPort for IniValuationAdapter<'_> {
    fn fetch_ratio(&self, symbol: &str) -> Option<f64> {
        // config keys are lower-cased by the INI layer
        self.config
            .get_double(VALUATION_SECTION, &symbol.to_lowercase())
    }
}
