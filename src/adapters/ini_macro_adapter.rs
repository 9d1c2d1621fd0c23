//! Macro readings from a `[macro]` config section.
//!
//! Each indicator key is read independently; a missing or unparsable value
//! leaves that field absent without touching the others.

use crate::domain::macro_sentiment::MacroReading;
use crate::ports::config_port::ConfigPort;
use crate::ports::macro_port::MacroPort;

pub const MACRO_SECTION: &str = "macro";

pub struct IniMacroAdapter<'a> {
    config: &'a dyn ConfigPort,
}

impl<'a> IniMacroAdapter<'a> {
    pub fn new(config: &'a dyn ConfigPort) -> Self {
        Self { config }
    }

    fn value(&self, key: &str) -> Option<f64> {
        self.config.get_double(MACRO_SECTION, key)
    }
}

impl MacroPort for IniMacroAdapter<'_> {
    fn fetch_reading(&self) -> MacroReading {
        MacroReading {
            gdp: self.value("gdp"),
            cpi: self.value("cpi"),
            ppi: self.value("ppi"),
            unemployment: self.value("unemployment"),
            fed_funds_rate: self.value("fed_funds_rate"),
            consumer_confidence: self.value("consumer_confidence"),
            pmi: self.value("pmi"),
        }
    }
}
