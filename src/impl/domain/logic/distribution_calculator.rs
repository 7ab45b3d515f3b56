use tracing::debug;

use crate::entities::{
    CalculationBreakdown, CalculationInput, CalculationMode, CalculationResult,
    CalculatorOptions, TreasuryStockBookValue, MIN_NET_ASSETS,
};

use crate::domain::entities::calculation_input::saturate;

use super::goodwill_ladder::goodwill_deduction;

/// Computes the distributable amount from a set of inputs.
///
/// Stateless: the same input always yields the same result, and a single
/// calculator can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistributionCalculator {
    options: CalculatorOptions,
}

impl DistributionCalculator {
    pub fn new(options: CalculatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CalculatorOptions {
        &self.options
    }

    pub fn compute(&self, input: &CalculationInput) -> CalculationResult {
        self.compute_breakdown(input).result
    }

    pub fn compute_breakdown(&self, input: &CalculationInput) -> CalculationBreakdown {
        let input = match self.options.mode {
            CalculationMode::Basic => input.year_end_only(),
            CalculationMode::Detailed => *input,
        };

        let wide = |amount: i64| i128::from(amount);

        // Surplus at year end, and changes to it after the year end.
        let surplus_amount =
            wide(input.other_capital_surplus) + wide(input.other_retained_earnings);
        let treasury_stock_adjustments = wide(input.disposal_consideration)
            - wide(input.disposal_treasury_stock)
            - wide(input.canceled_treasury_stock);
        let capital_reserve_adjustments = wide(input.capital_reduction)
            + wide(input.reserve_reduction)
            - wide(input.surplus_to_capital);
        let dividend_adjustments = -(wide(input.dividend_amount) + wide(input.dividend_reserve));

        // Treasury stock.
        let treasury_stock_abs = match self.options.treasury_stock_book_value {
            TreasuryStockBookValue::Gross => wide(input.treasury_stock).abs(),
            TreasuryStockBookValue::NetOfDisposal => {
                wide(input.treasury_stock).abs() - wide(input.disposal_treasury_stock)
            }
        };
        let additional_treasury_adjustments = -wide(input.disposal_consideration);

        let interim_settlement_adjustments = if input.interim_settlement {
            wide(input.interim_profit) - wide(input.interim_loss)
                + wide(input.interim_treasury_disposal)
        } else {
            0
        };

        let goodwill = goodwill_deduction(&input);

        // Unrealised losses reduce the amount; unrealised gains are ignored.
        let valuation_adjustments =
            wide(input.securities_valuation.min(0)) + wide(input.land_revaluation.min(0));

        let net_assets = input.net_assets_wide();
        let net_assets_adjustment = (wide(MIN_NET_ASSETS) - net_assets).max(0);

        // Terms are clamped to i64 first so that they always add up to the
        // total unless the total itself saturates.
        let mut result = CalculationResult {
            surplus_amount: saturate(surplus_amount),
            treasury_stock_adjustments: saturate(treasury_stock_adjustments),
            capital_reserve_adjustments: saturate(capital_reserve_adjustments),
            dividend_adjustments: saturate(dividend_adjustments),
            treasury_stock_abs: saturate(treasury_stock_abs),
            additional_treasury_adjustments: saturate(additional_treasury_adjustments),
            interim_settlement_adjustments: saturate(interim_settlement_adjustments),
            goodwill_deferred_deduction: goodwill.amount,
            valuation_adjustments: saturate(valuation_adjustments),
            net_assets_adjustment: saturate(net_assets_adjustment),
            distributable_amount: 0,
        };
        result.distributable_amount = saturate(
            result
                .terms()
                .iter()
                .map(|(_, contribution)| wide(*contribution))
                .sum(),
        );

        debug!(
            goodwill_tier = ?goodwill.tier,
            net_assets = saturate(net_assets),
            distributable_amount = result.distributable_amount,
            "computed distributable amount"
        );

        CalculationBreakdown {
            result,
            goodwill,
            net_assets: saturate(net_assets),
            mode: self.options.mode,
            treasury_stock_book_value: self.options.treasury_stock_book_value,
        }
    }
}

/// Computes the distributable amount with default options.
pub fn compute(input: &CalculationInput) -> CalculationResult {
    DistributionCalculator::default().compute(input)
}
