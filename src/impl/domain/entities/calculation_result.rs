use serde_derive::Serialize;

/// The ten adjustment terms and the resulting distributable amount.
///
/// Terms are stored with the sign they were computed with; see
/// [`CalculationResult::terms`] for each term's contribution to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalculationResult {
    pub surplus_amount: i64,
    pub treasury_stock_adjustments: i64,
    pub capital_reserve_adjustments: i64,
    pub dividend_adjustments: i64,
    /// Subtracted from the total.
    pub treasury_stock_abs: i64,
    pub additional_treasury_adjustments: i64,
    pub interim_settlement_adjustments: i64,
    /// Subtracted from the total.
    pub goodwill_deferred_deduction: i64,
    pub valuation_adjustments: i64,
    /// Subtracted from the total.
    pub net_assets_adjustment: i64,
    pub distributable_amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BreakdownTerm {
    SurplusAmount,
    TreasuryStockAdjustments,
    CapitalReserveAdjustments,
    DividendAdjustments,
    TreasuryStockBookValue,
    TreasuryStockDisposalConsideration,
    InterimSettlementAdjustments,
    GoodwillDeferredDeduction,
    ValuationAdjustments,
    NetAssetsAdjustment,
}

impl BreakdownTerm {
    /// True for terms driven by changes after the fiscal year end. These are
    /// always zero in basic mode.
    pub fn is_post_year_end(&self) -> bool {
        matches!(
            self,
            BreakdownTerm::TreasuryStockAdjustments
                | BreakdownTerm::CapitalReserveAdjustments
                | BreakdownTerm::DividendAdjustments
                | BreakdownTerm::TreasuryStockDisposalConsideration
                | BreakdownTerm::InterimSettlementAdjustments
        )
    }
}

impl CalculationResult {
    /// Each term paired with its signed contribution to the distributable
    /// amount, in calculation order.
    pub fn terms(&self) -> [(BreakdownTerm, i64); 10] {
        [
            (BreakdownTerm::SurplusAmount, self.surplus_amount),
            (
                BreakdownTerm::TreasuryStockAdjustments,
                self.treasury_stock_adjustments,
            ),
            (
                BreakdownTerm::CapitalReserveAdjustments,
                self.capital_reserve_adjustments,
            ),
            (BreakdownTerm::DividendAdjustments, self.dividend_adjustments),
            (
                BreakdownTerm::TreasuryStockBookValue,
                self.treasury_stock_abs.saturating_neg(),
            ),
            (
                BreakdownTerm::TreasuryStockDisposalConsideration,
                self.additional_treasury_adjustments,
            ),
            (
                BreakdownTerm::InterimSettlementAdjustments,
                self.interim_settlement_adjustments,
            ),
            (
                BreakdownTerm::GoodwillDeferredDeduction,
                self.goodwill_deferred_deduction.saturating_neg(),
            ),
            (BreakdownTerm::ValuationAdjustments, self.valuation_adjustments),
            (
                BreakdownTerm::NetAssetsAdjustment,
                self.net_assets_adjustment.saturating_neg(),
            ),
        ]
    }

    /// True if any amount may be distributed.
    pub fn is_distributable(&self) -> bool {
        self.distributable_amount > 0
    }
}
