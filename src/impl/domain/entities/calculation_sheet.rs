use chrono::NaiveDate;

use super::calculation_input::CalculationInput;

/// Inputs loaded from a file or string, with optional labelling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculationSheet {
    pub name: Option<String>,
    pub fiscal_year_end: Option<NaiveDate>,
    pub input: CalculationInput,
}

/// Text format of a calculation sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetFormat {
    /// Two columns, `field,value`, one row per input field.
    Csv,
    /// A single struct literal with snake_case field names.
    Ron,
}
