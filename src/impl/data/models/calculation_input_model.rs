use fractic_server_error::ServerError;

use crate::{
    entities::{CalculationInput, CalculationSheet, MAX_AMOUNT_MAGNITUDE},
    errors::InputOutOfRange,
};

use super::iso_date_model::ISODateModel;

/// Lowest value accepted for fields that may be negative.
const SIGNED_FIELD_LOWER_BOUND: i64 = -1_000_000_000;

/// Unvalidated calculation sheet, as read from CSV or RON.
#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct CalculationInputModel {
    pub name: Option<String>,
    pub fiscal_year_end: Option<ISODateModel>,

    pub capital_stock: i64,
    pub capital_reserve: i64,
    pub other_capital_surplus: i64,
    pub earned_reserve: i64,
    pub other_retained_earnings: i64,
    pub treasury_stock: i64,
    pub goodwill: i64,
    pub deferred_assets: i64,
    pub securities_valuation: i64,
    pub land_revaluation: i64,
    pub disposal_treasury_stock: i64,
    pub disposal_consideration: i64,
    pub canceled_treasury_stock: i64,
    pub capital_reduction: i64,
    pub reserve_reduction: i64,
    pub surplus_to_capital: i64,
    pub dividend_amount: i64,
    pub dividend_reserve: i64,
    pub interim_settlement: bool,
    pub interim_profit: i64,
    pub interim_loss: i64,
    pub interim_treasury_disposal: i64,
}

fn non_negative(field: &str, value: i64) -> Result<i64, ServerError> {
    if !(0..=MAX_AMOUNT_MAGNITUDE).contains(&value) {
        return Err(InputOutOfRange::new(
            field,
            value,
            "0 ..= 1,000,000,000,000,000",
        ));
    }
    Ok(value)
}

fn signed(field: &str, value: i64) -> Result<i64, ServerError> {
    if !(SIGNED_FIELD_LOWER_BOUND..=MAX_AMOUNT_MAGNITUDE).contains(&value) {
        return Err(InputOutOfRange::new(
            field,
            value,
            "-1,000,000,000 ..= 1,000,000,000,000,000",
        ));
    }
    Ok(value)
}

impl CalculationInputModel {
    /// Checks the bounds the input form enforces and builds the domain sheet.
    /// Every amount is also capped at [`MAX_AMOUNT_MAGNITUDE`].
    ///
    /// Treasury stock is a contra-equity amount, so it must additionally be
    /// zero or negative.
    pub(crate) fn validate(self) -> Result<CalculationSheet, ServerError> {
        let treasury_stock = signed("treasury_stock", self.treasury_stock)?;
        if treasury_stock > 0 {
            return Err(InputOutOfRange::new("treasury_stock", treasury_stock, "<= 0"));
        }

        let input = CalculationInput {
            capital_stock: non_negative("capital_stock", self.capital_stock)?,
            capital_reserve: non_negative("capital_reserve", self.capital_reserve)?,
            other_capital_surplus: non_negative(
                "other_capital_surplus",
                self.other_capital_surplus,
            )?,
            earned_reserve: non_negative("earned_reserve", self.earned_reserve)?,
            other_retained_earnings: signed(
                "other_retained_earnings",
                self.other_retained_earnings,
            )?,
            treasury_stock,
            goodwill: non_negative("goodwill", self.goodwill)?,
            deferred_assets: non_negative("deferred_assets", self.deferred_assets)?,
            securities_valuation: signed("securities_valuation", self.securities_valuation)?,
            land_revaluation: signed("land_revaluation", self.land_revaluation)?,
            disposal_treasury_stock: non_negative(
                "disposal_treasury_stock",
                self.disposal_treasury_stock,
            )?,
            disposal_consideration: non_negative(
                "disposal_consideration",
                self.disposal_consideration,
            )?,
            canceled_treasury_stock: non_negative(
                "canceled_treasury_stock",
                self.canceled_treasury_stock,
            )?,
            capital_reduction: non_negative("capital_reduction", self.capital_reduction)?,
            reserve_reduction: non_negative("reserve_reduction", self.reserve_reduction)?,
            surplus_to_capital: non_negative("surplus_to_capital", self.surplus_to_capital)?,
            dividend_amount: non_negative("dividend_amount", self.dividend_amount)?,
            dividend_reserve: non_negative("dividend_reserve", self.dividend_reserve)?,
            interim_settlement: self.interim_settlement,
            interim_profit: non_negative("interim_profit", self.interim_profit)?,
            interim_loss: non_negative("interim_loss", self.interim_loss)?,
            interim_treasury_disposal: non_negative(
                "interim_treasury_disposal",
                self.interim_treasury_disposal,
            )?,
        };

        Ok(CalculationSheet {
            name: self.name,
            fiscal_year_end: self.fiscal_year_end.map(Into::into),
            input,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_model_becomes_sheet() {
        let sheet = CalculationInputModel {
            name: Some("FY2024".to_string()),
            capital_stock: 10_000_000,
            other_retained_earnings: -8_000_000,
            treasury_stock: -1_000_000,
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(sheet.name.as_deref(), Some("FY2024"));
        assert_eq!(sheet.input.capital_stock, 10_000_000);
        assert_eq!(sheet.input.other_retained_earnings, -8_000_000);
    }

    #[test]
    fn negative_balance_rejected() {
        let model = CalculationInputModel {
            goodwill: -1,
            ..Default::default()
        };
        assert!(model.validate().is_err());
    }

    #[test]
    fn positive_treasury_stock_rejected() {
        let model = CalculationInputModel {
            treasury_stock: 1_000,
            ..Default::default()
        };
        assert!(model.validate().is_err());
    }

    #[test]
    fn signed_lower_bound() {
        let at_bound = CalculationInputModel {
            land_revaluation: -1_000_000_000,
            ..Default::default()
        };
        assert!(at_bound.validate().is_ok());

        let below = CalculationInputModel {
            land_revaluation: -1_000_000_001,
            ..Default::default()
        };
        assert!(below.validate().is_err());
    }

    #[test]
    fn upper_bound_applies_to_every_amount() {
        let at_bound = CalculationInputModel {
            capital_stock: 1_000_000_000_000_000,
            other_retained_earnings: 1_000_000_000_000_000,
            ..Default::default()
        };
        assert!(at_bound.validate().is_ok());

        let above = CalculationInputModel {
            capital_stock: 1_000_000_000_000_001,
            ..Default::default()
        };
        assert!(above.validate().is_err());

        let above = CalculationInputModel {
            securities_valuation: 1_000_000_000_000_001,
            ..Default::default()
        };
        assert!(above.validate().is_err());

        let max = CalculationInputModel {
            capital_stock: i64::MAX,
            capital_reserve: 1,
            ..Default::default()
        };
        assert!(max.validate().is_err());
    }
}
