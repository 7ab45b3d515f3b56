use serde_derive::Serialize;

use super::{
    calculation_result::CalculationResult,
    calculator_options::{CalculationMode, TreasuryStockBookValue},
    goodwill_deduction::GoodwillDeduction,
};

/// A calculation result together with the intermediate figures that explain
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculationBreakdown {
    pub result: CalculationResult,
    pub goodwill: GoodwillDeduction,
    pub net_assets: i64,
    pub mode: CalculationMode,
    pub treasury_stock_book_value: TreasuryStockBookValue,
}
