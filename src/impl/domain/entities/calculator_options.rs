/// Minimum net assets a company must retain. Any shortfall is deducted from
/// the distributable amount.
pub const MIN_NET_ASSETS: i64 = 3_000_000;

/// How the treasury stock deduction is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde_derive::Serialize)]
pub enum TreasuryStockBookValue {
    /// Full book value of treasury stock held at the fiscal year end.
    #[default]
    Gross,
    /// Book value at the fiscal year end, less the book value of treasury
    /// stock disposed of after the year end.
    NetOfDisposal,
}

/// Which inputs take part in the calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde_derive::Serialize)]
pub enum CalculationMode {
    /// Year-end balances only. Post-year-end changes and the interim
    /// settlement are ignored even if provided.
    Basic,
    #[default]
    Detailed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CalculatorOptions {
    pub treasury_stock_book_value: TreasuryStockBookValue,
    pub mode: CalculationMode,
}
