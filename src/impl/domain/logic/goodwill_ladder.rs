use crate::domain::entities::calculation_input::saturate;
use crate::entities::{CalculationInput, GoodwillDeduction, GoodwillDeductionTier};

/// Amount of goodwill and deferred assets that must be deducted from the
/// distributable amount.
///
/// Half of goodwill (rounded down) plus deferred assets is compared, in order
/// and inclusively, against capital stock plus legal reserves, then against
/// that total plus other capital surplus. Tiers 2 and 3 share a formula but
/// are kept apart so the applied rule can be reported.
pub(crate) fn goodwill_deduction(input: &CalculationInput) -> GoodwillDeduction {
    let goodwill_half = i128::from(input.goodwill).div_euclid(2);
    let goodwill_deferred_total = goodwill_half + i128::from(input.deferred_assets);
    let capital_reserve_total = input.capital_reserve_total_wide();
    let capital_surplus_threshold =
        capital_reserve_total + i128::from(input.other_capital_surplus);

    let (tier, amount) = match () {
        _ if goodwill_deferred_total <= capital_reserve_total => {
            (GoodwillDeductionTier::NoDeduction, 0)
        }
        _ if goodwill_deferred_total <= capital_surplus_threshold => (
            GoodwillDeductionTier::ExceedsCapitalReserves,
            goodwill_deferred_total - capital_reserve_total,
        ),
        _ if goodwill_half <= capital_surplus_threshold => (
            GoodwillDeductionTier::HalfGoodwillCovered,
            goodwill_deferred_total - capital_reserve_total,
        ),
        _ => (
            GoodwillDeductionTier::HalfGoodwillExceeds,
            i128::from(input.other_capital_surplus) + i128::from(input.deferred_assets),
        ),
    };

    GoodwillDeduction {
        goodwill_half: saturate(goodwill_half),
        goodwill_deferred_total: saturate(goodwill_deferred_total),
        capital_reserve_total: saturate(capital_reserve_total),
        capital_surplus_threshold: saturate(capital_surplus_threshold),
        tier,
        amount: saturate(amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Capital stock and legal reserves of 17M, other capital surplus of 3M.
    fn base(goodwill: i64, deferred_assets: i64) -> CalculationInput {
        CalculationInput {
            capital_stock: 10_000_000,
            capital_reserve: 5_000_000,
            earned_reserve: 2_000_000,
            other_capital_surplus: 3_000_000,
            other_retained_earnings: 20_000_000,
            goodwill,
            deferred_assets,
            ..Default::default()
        }
    }

    #[test]
    fn covered_by_capital_and_reserves() {
        let d = goodwill_deduction(&base(20_000_000, 5_000_000));
        assert_eq!(d.goodwill_deferred_total, 15_000_000);
        assert_eq!(d.tier, GoodwillDeductionTier::NoDeduction);
        assert_eq!(d.amount, 0);
    }

    #[test]
    fn excess_within_other_capital_surplus() {
        let d = goodwill_deduction(&base(30_000_000, 5_000_000));
        assert_eq!(d.tier, GoodwillDeductionTier::ExceedsCapitalReserves);
        assert_eq!(d.amount, 3_000_000);
    }

    #[test]
    fn half_goodwill_covered() {
        let d = goodwill_deduction(&base(30_000_000, 10_000_000));
        assert_eq!(d.tier, GoodwillDeductionTier::HalfGoodwillCovered);
        assert_eq!(d.amount, 8_000_000);
    }

    #[test]
    fn half_goodwill_exceeds() {
        let d = goodwill_deduction(&base(50_000_000, 10_000_000));
        assert_eq!(d.goodwill_half, 25_000_000);
        assert_eq!(d.capital_surplus_threshold, 20_000_000);
        assert_eq!(d.tier, GoodwillDeductionTier::HalfGoodwillExceeds);
        assert_eq!(d.amount, 13_000_000);
    }

    #[test]
    fn boundaries_are_inclusive() {
        // Exactly equal to capital stock and reserves.
        let d = goodwill_deduction(&CalculationInput {
            capital_stock: 5_000_000,
            capital_reserve: 3_000_000,
            earned_reserve: 2_000_000,
            other_capital_surplus: 3_000_000,
            goodwill: 20_000_000,
            ..Default::default()
        });
        assert_eq!(d.tier, GoodwillDeductionTier::NoDeduction);
        assert_eq!(d.amount, 0);

        // Exactly equal to the threshold including other capital surplus.
        let d = goodwill_deduction(&base(40_000_000, 0));
        assert_eq!(d.tier, GoodwillDeductionTier::ExceedsCapitalReserves);
        assert_eq!(d.amount, 3_000_000);

        // Half of goodwill exactly equal to the threshold.
        let d = goodwill_deduction(&base(40_000_000, 1));
        assert_eq!(d.tier, GoodwillDeductionTier::HalfGoodwillCovered);
        assert_eq!(d.amount, 3_000_001);
    }

    #[test]
    fn odd_goodwill_rounds_down() {
        let d = goodwill_deduction(&base(3, 0));
        assert_eq!(d.goodwill_half, 1);
    }

    #[test]
    fn extreme_amounts_choose_tier_without_overflow() {
        let d = goodwill_deduction(&CalculationInput {
            capital_stock: i64::MAX,
            capital_reserve: i64::MAX,
            goodwill: i64::MAX,
            deferred_assets: i64::MAX,
            ..Default::default()
        });
        // Half of goodwill plus deferred assets is below twice i64::MAX.
        assert_eq!(d.tier, GoodwillDeductionTier::NoDeduction);
        assert_eq!(d.capital_reserve_total, i64::MAX);
        assert_eq!(d.goodwill_deferred_total, i64::MAX);
        assert_eq!(d.amount, 0);
    }
}
