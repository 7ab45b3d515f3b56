use serde_derive::{Deserialize, Serialize};

/// Balance-sheet figures and post-year-end changes from which the
/// distributable amount is derived.
///
/// All amounts are whole currency units (no implied decimals). Sheets loaded
/// through the data layer are limited to magnitudes of at most
/// [`MAX_AMOUNT_MAGNITUDE`], where every sum the calculator forms is exact.
/// The calculator itself accepts any value: it works in 128-bit integers and
/// saturates at the `i64` range, so extreme inputs still give a deterministic
/// (clamped) result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationInput {
    // Net assets section at the last fiscal year end.
    // ---
    pub capital_stock: i64,
    pub capital_reserve: i64,
    pub other_capital_surplus: i64,
    pub earned_reserve: i64,
    /// May be negative (accumulated deficit).
    pub other_retained_earnings: i64,
    /// Book value of treasury stock, recorded as a negative (contra-equity)
    /// amount or zero.
    pub treasury_stock: i64,

    // Intangibles.
    // ---
    pub goodwill: i64,
    pub deferred_assets: i64,

    // Valuation and translation differences. Only negative values reduce the
    // distributable amount.
    // ---
    pub securities_valuation: i64,
    pub land_revaluation: i64,

    // Changes after the fiscal year end.
    // ---
    pub disposal_treasury_stock: i64,
    pub disposal_consideration: i64,
    pub canceled_treasury_stock: i64,
    pub capital_reduction: i64,
    pub reserve_reduction: i64,
    pub surplus_to_capital: i64,
    pub dividend_amount: i64,
    pub dividend_reserve: i64,

    // Interim settlement (only consulted if `interim_settlement` is set).
    // ---
    pub interim_settlement: bool,
    pub interim_profit: i64,
    pub interim_loss: i64,
    pub interim_treasury_disposal: i64,
}

impl CalculationInput {
    /// Copy of the input with all post-fiscal-year-end changes and the interim
    /// settlement cleared, leaving only the year-end balances.
    pub fn year_end_only(&self) -> Self {
        Self {
            capital_stock: self.capital_stock,
            capital_reserve: self.capital_reserve,
            other_capital_surplus: self.other_capital_surplus,
            earned_reserve: self.earned_reserve,
            other_retained_earnings: self.other_retained_earnings,
            treasury_stock: self.treasury_stock,
            goodwill: self.goodwill,
            deferred_assets: self.deferred_assets,
            securities_valuation: self.securities_valuation,
            land_revaluation: self.land_revaluation,
            ..Default::default()
        }
    }

    /// Capital stock plus legal reserves (capital reserve and earned reserve).
    pub fn capital_reserve_total(&self) -> i64 {
        saturate(self.capital_reserve_total_wide())
    }

    /// Total of the shareholders' equity section at the fiscal year end,
    /// treasury stock included at its (negative) book value.
    pub fn net_assets(&self) -> i64 {
        saturate(self.net_assets_wide())
    }

    pub(crate) fn capital_reserve_total_wide(&self) -> i128 {
        i128::from(self.capital_stock)
            + i128::from(self.capital_reserve)
            + i128::from(self.earned_reserve)
    }

    pub(crate) fn net_assets_wide(&self) -> i128 {
        self.capital_reserve_total_wide()
            + i128::from(self.other_capital_surplus)
            + i128::from(self.other_retained_earnings)
            + i128::from(self.treasury_stock)
    }
}

/// Largest magnitude of a single amount accepted when loading a sheet. About
/// twenty such amounts are combined per calculation, which stays far inside
/// the `i64` range.
pub const MAX_AMOUNT_MAGNITUDE: i64 = 1_000_000_000_000_000;

/// Clamps a widened intermediate back into the `i64` range.
pub(crate) fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}
