use crate::entities::{BreakdownTerm, CalculationMode, GoodwillDeductionTier, TreasuryStockBookValue};

impl BreakdownTerm {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            BreakdownTerm::SurplusAmount => "Surplus at fiscal year end",
            BreakdownTerm::TreasuryStockAdjustments => "Treasury stock disposal/cancellation",
            BreakdownTerm::CapitalReserveAdjustments => "Capital and reserve changes",
            BreakdownTerm::DividendAdjustments => "Dividends after year end",
            BreakdownTerm::TreasuryStockBookValue => "Treasury stock book value",
            BreakdownTerm::TreasuryStockDisposalConsideration => {
                "Treasury stock disposal consideration"
            }
            BreakdownTerm::InterimSettlementAdjustments => "Interim settlement",
            BreakdownTerm::GoodwillDeferredDeduction => "Goodwill and deferred assets",
            BreakdownTerm::ValuationAdjustments => "Valuation and translation differences",
            BreakdownTerm::NetAssetsAdjustment => "Minimum net assets",
        }
    }

    pub(crate) fn citation(&self) -> &'static str {
        match self {
            BreakdownTerm::SurplusAmount
            | BreakdownTerm::TreasuryStockAdjustments
            | BreakdownTerm::CapitalReserveAdjustments
            | BreakdownTerm::DividendAdjustments => "Companies Act art. 446",
            BreakdownTerm::TreasuryStockBookValue => "Companies Act art. 461(2)(iii)",
            BreakdownTerm::TreasuryStockDisposalConsideration => "Companies Act art. 461(2)(iv)",
            BreakdownTerm::InterimSettlementAdjustments => "Companies Act art. 461(2)(ii),(v)",
            BreakdownTerm::GoodwillDeferredDeduction => "Accounting Ordinance art. 158(i)",
            BreakdownTerm::ValuationAdjustments => "Accounting Ordinance art. 158(ii),(iii)",
            BreakdownTerm::NetAssetsAdjustment => "Accounting Ordinance art. 158(vi)",
        }
    }
}

impl CalculationMode {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            CalculationMode::Basic => "basic (year-end balances only)",
            CalculationMode::Detailed => "detailed",
        }
    }
}

impl TreasuryStockBookValue {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            TreasuryStockBookValue::Gross => "gross book value",
            TreasuryStockBookValue::NetOfDisposal => "net of post-year-end disposals",
        }
    }
}

impl GoodwillDeductionTier {
    /// Explanation of the rule, with `{{Key}}` placeholders for the figures
    /// involved.
    pub(crate) fn explanation_template(&self) -> &'static str {
        match self {
            GoodwillDeductionTier::NoDeduction => {
                "Half of goodwill plus deferred assets ({{GoodwillDeferredTotal}}) does not \
                 exceed capital stock and legal reserves ({{CapitalReserveTotal}}), so no \
                 deduction is required."
            }
            GoodwillDeductionTier::ExceedsCapitalReserves => {
                "Half of goodwill plus deferred assets ({{GoodwillDeferredTotal}}) exceeds \
                 capital stock and legal reserves ({{CapitalReserveTotal}}) but not that total \
                 plus other capital surplus ({{CapitalSurplusThreshold}}). Only the excess is \
                 deducted: {{GoodwillDeferredTotal}} - {{CapitalReserveTotal}} = {{Deduction}}."
            }
            GoodwillDeductionTier::HalfGoodwillCovered => {
                "Half of goodwill plus deferred assets ({{GoodwillDeferredTotal}}) exceeds \
                 capital stock, legal reserves and other capital surplus \
                 ({{CapitalSurplusThreshold}}), but half of goodwill alone \
                 ({{GoodwillHalf}}) does not. The excess over capital stock and legal \
                 reserves is deducted: {{GoodwillDeferredTotal}} - {{CapitalReserveTotal}} = \
                 {{Deduction}}."
            }
            GoodwillDeductionTier::HalfGoodwillExceeds => {
                "Half of goodwill alone ({{GoodwillHalf}}) exceeds capital stock, legal \
                 reserves and other capital surplus ({{CapitalSurplusThreshold}}). The goodwill \
                 deduction is capped at other capital surplus, plus all deferred assets: \
                 {{OtherCapitalSurplus}} + {{DeferredAssets}} = {{Deduction}}."
            }
        }
    }
}
