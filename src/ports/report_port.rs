//! Report output port trait.

use crate::domain::analysis::SymbolReport;
use crate::domain::error::StocklensError;

/// Port for presenting one symbol's full analysis.
pub trait ReportPort {
    fn write(&self, report: &SymbolReport) -> Result<(), StocklensError>;
}
