use serde_derive::Serialize;

/// Branch of the goodwill / deferred asset deduction rule that applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GoodwillDeductionTier {
    /// Half of goodwill plus deferred assets is covered by capital stock and
    /// legal reserves.
    NoDeduction,
    /// The excess over capital stock and legal reserves is covered by other
    /// capital surplus.
    ExceedsCapitalReserves,
    /// The excess is not covered by other capital surplus, but half of goodwill
    /// alone is.
    HalfGoodwillCovered,
    /// Half of goodwill alone exceeds capital stock, legal reserves and other
    /// capital surplus.
    HalfGoodwillExceeds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GoodwillDeduction {
    pub goodwill_half: i64,
    pub goodwill_deferred_total: i64,
    pub capital_reserve_total: i64,
    /// Capital stock, legal reserves and other capital surplus.
    pub capital_surplus_threshold: i64,
    pub tier: GoodwillDeductionTier,
    pub amount: i64,
}
