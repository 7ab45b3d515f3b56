use std::{collections::HashSet, str::FromStr as _};

use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::{
        accounting_amount_model::AccountingAmountModel,
        calculation_input_model::CalculationInputModel, input_field_model::InputFieldModel,
        iso_date_model::ISODateModel,
    },
    errors::{DuplicateInputField, InvalidCsv, InvalidCsvContent, InvalidFlag, InvalidRon},
};

pub(crate) trait SheetCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<CalculationInputModel, ServerError>;
}

pub(crate) struct SheetCsvDatasourceImpl;

impl SheetCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl SheetCsvDatasource for SheetCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<CalculationInputModel, ServerError> {
        let mut model = CalculationInputModel::default();
        let mut seen = HashSet::new();
        for r in csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(s.as_bytes())
            .records()
        {
            let r = r.map_err(|e| InvalidCsv::with_debug(&e))?;

            // Extract from CSV record.
            let raw_field = r.get(0).unwrap_or("");
            let raw_value = r.get(1).unwrap_or("");
            if raw_field.is_empty() {
                return Err(InvalidCsvContent::new("row without field name"));
            }

            // Parse.
            let field: InputFieldModel =
                from_str(raw_field).map_err(|e| InvalidRon::with_debug("InputField", &e))?;
            if !seen.insert(field) {
                return Err(DuplicateInputField::new(raw_field));
            }
            set_field(&mut model, field, raw_field, raw_value)?;
        }
        Ok(model)
    }
}

fn parse_flag(field: &str, value: &str) -> Result<bool, ServerError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" | "" => Ok(false),
        _ => Err(InvalidFlag::new(field, value)),
    }
}

fn set_field(
    model: &mut CalculationInputModel,
    field: InputFieldModel,
    raw_field: &str,
    raw_value: &str,
) -> Result<(), ServerError> {
    let amount = || AccountingAmountModel::from_str(raw_value).map(Into::<i64>::into);
    match field {
        InputFieldModel::Name => {
            model.name = Some(raw_value.to_string()).filter(|n| !n.is_empty())
        }
        InputFieldModel::FiscalYearEnd => {
            model.fiscal_year_end = Some(ISODateModel::from_str(raw_value)?)
        }
        InputFieldModel::CapitalStock => model.capital_stock = amount()?,
        InputFieldModel::CapitalReserve => model.capital_reserve = amount()?,
        InputFieldModel::OtherCapitalSurplus => model.other_capital_surplus = amount()?,
        InputFieldModel::EarnedReserve => model.earned_reserve = amount()?,
        InputFieldModel::OtherRetainedEarnings => model.other_retained_earnings = amount()?,
        InputFieldModel::TreasuryStock => model.treasury_stock = amount()?,
        InputFieldModel::Goodwill => model.goodwill = amount()?,
        InputFieldModel::DeferredAssets => model.deferred_assets = amount()?,
        InputFieldModel::SecuritiesValuation => model.securities_valuation = amount()?,
        InputFieldModel::LandRevaluation => model.land_revaluation = amount()?,
        InputFieldModel::DisposalTreasuryStock => model.disposal_treasury_stock = amount()?,
        InputFieldModel::DisposalConsideration => model.disposal_consideration = amount()?,
        InputFieldModel::CanceledTreasuryStock => model.canceled_treasury_stock = amount()?,
        InputFieldModel::CapitalReduction => model.capital_reduction = amount()?,
        InputFieldModel::ReserveReduction => model.reserve_reduction = amount()?,
        InputFieldModel::SurplusToCapital => model.surplus_to_capital = amount()?,
        InputFieldModel::DividendAmount => model.dividend_amount = amount()?,
        InputFieldModel::DividendReserve => model.dividend_reserve = amount()?,
        InputFieldModel::InterimSettlement => {
            model.interim_settlement = parse_flag(raw_field, raw_value)?
        }
        InputFieldModel::InterimProfit => model.interim_profit = amount()?,
        InputFieldModel::InterimLoss => model.interim_loss = amount()?,
        InputFieldModel::InterimTreasuryDisposal => {
            model.interim_treasury_disposal = amount()?
        }
    }
    Ok(())
}
