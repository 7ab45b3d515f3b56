use std::collections::HashMap;

use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::entities::{
    BreakdownTerm, CalculationBreakdown, CalculationMode, CalculationSheet, GoodwillDeduction,
};

use super::{
    template::replace_all_placeholders_in_string,
    utils::{format_amount, format_signed_amount},
};

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub currency: Currency,
    /// Column at which explanatory paragraphs are wrapped.
    pub width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            currency: Currency::JPY,
            width: 78,
        }
    }
}

pub(crate) struct ReportPrinter;

impl ReportPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_report(
        &self,
        sheet: &CalculationSheet,
        breakdown: &CalculationBreakdown,
        options: &ReportOptions,
    ) -> Result<String, ServerError> {
        let mut report = String::new();
        self.print_header(&mut report, sheet, breakdown);
        report.push('\n');
        self.print_terms(&mut report, breakdown, options);
        report.push('\n');
        self.print_status(&mut report, breakdown, options);
        report.push('\n');
        self.print_goodwill_explanation(&mut report, &breakdown.goodwill, options)?;
        Ok(report)
    }

    fn print_header(
        &self,
        report: &mut String,
        sheet: &CalculationSheet,
        breakdown: &CalculationBreakdown,
    ) {
        report.push_str(&format!(
            "Distributable amount: {}\n",
            sheet.name.as_deref().unwrap_or("(unnamed)")
        ));
        if let Some(fiscal_year_end) = sheet.fiscal_year_end {
            report.push_str(&format!(
                "Fiscal year end: {}\n",
                fiscal_year_end.format("%Y-%m-%d")
            ));
        }
        report.push_str(&format!(
            "Mode: {}; treasury stock at {}\n",
            breakdown.mode.label(),
            breakdown.treasury_stock_book_value.label()
        ));
    }

    fn print_terms(
        &self,
        report: &mut String,
        breakdown: &CalculationBreakdown,
        options: &ReportOptions,
    ) {
        for (term, contribution) in breakdown.result.terms() {
            if breakdown.mode == CalculationMode::Basic && term.is_post_year_end() {
                continue;
            }
            if term == BreakdownTerm::InterimSettlementAdjustments && contribution == 0 {
                report.push_str(&format!(
                    "  {:40} {:>22}  ({})\n",
                    term.label(),
                    "not performed",
                    term.citation(),
                ));
                continue;
            }
            report.push_str(&format!(
                "  {:40} {:>22}  ({})\n",
                term.label(),
                format_signed_amount(contribution, options.currency),
                term.citation(),
            ));
        }
        report.push_str(&format!("  {}\n", "-".repeat(64)));
        report.push_str(&format!(
            "  {:40} {:>22}\n",
            "Distributable amount",
            format_amount(breakdown.result.distributable_amount, options.currency),
        ));
    }

    fn print_status(
        &self,
        report: &mut String,
        breakdown: &CalculationBreakdown,
        options: &ReportOptions,
    ) {
        let amount = breakdown.result.distributable_amount;
        let status = if amount > 0 {
            "Dividends and paid acquisitions of treasury stock are permitted up to the \
             distributable amount."
        } else if amount == 0 {
            "The distributable amount is zero. No distribution is permitted."
        } else {
            "No distribution is permitted. Distributions in excess of the distributable \
             amount may be reclaimed from shareholders, and the directors involved may be \
             liable to the company (Companies Act art. 462, 463)."
        };
        for line in textwrap::wrap(status, options.width) {
            report.push_str(&format!("{}\n", line));
        }
    }

    fn print_goodwill_explanation(
        &self,
        report: &mut String,
        goodwill: &GoodwillDeduction,
        options: &ReportOptions,
    ) -> Result<(), ServerError> {
        let fmt = |amount: i64| format_amount(amount, options.currency);
        let other_capital_surplus = goodwill
            .capital_surplus_threshold
            .saturating_sub(goodwill.capital_reserve_total);
        let deferred_assets = goodwill
            .goodwill_deferred_total
            .saturating_sub(goodwill.goodwill_half);
        let placeholders = HashMap::from([
            ("GoodwillHalf", fmt(goodwill.goodwill_half)),
            ("GoodwillDeferredTotal", fmt(goodwill.goodwill_deferred_total)),
            ("CapitalReserveTotal", fmt(goodwill.capital_reserve_total)),
            ("CapitalSurplusThreshold", fmt(goodwill.capital_surplus_threshold)),
            ("OtherCapitalSurplus", fmt(other_capital_surplus)),
            ("DeferredAssets", fmt(deferred_assets)),
            ("Deduction", fmt(goodwill.amount)),
        ]);
        let explanation = replace_all_placeholders_in_string(
            goodwill.tier.explanation_template(),
            &placeholders,
        )?;

        report.push_str("Goodwill and deferred assets:\n");
        let wrap_options = textwrap::Options::new(options.width)
            .initial_indent("  ")
            .subsequent_indent("  ");
        for line in textwrap::wrap(&explanation, wrap_options) {
            report.push_str(&format!("{}\n", line));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        entities::{CalculationInput, CalculatorOptions},
        DistributionCalculator,
    };

    fn render(input: CalculationInput) -> String {
        render_with(DistributionCalculator::default(), input)
    }

    fn render_with(calculator: DistributionCalculator, input: CalculationInput) -> String {
        let sheet = CalculationSheet {
            name: Some("Example K.K.".to_string()),
            fiscal_year_end: NaiveDate::from_ymd_opt(2024, 3, 31),
            input,
        };
        let breakdown = calculator.compute_breakdown(&sheet.input);
        ReportPrinter::new()
            .print_report(
                &sheet,
                &breakdown,
                &ReportOptions {
                    width: 1000,
                    ..Default::default()
                },
            )
            .unwrap()
    }

    #[test]
    fn report_lists_terms_and_total() {
        let report = render(CalculationInput {
            capital_stock: 10_000_000,
            capital_reserve: 5_000_000,
            other_capital_surplus: 3_000_000,
            earned_reserve: 2_000_000,
            other_retained_earnings: 20_000_000,
            treasury_stock: -2_000_000,
            ..Default::default()
        });
        assert!(report.contains("Distributable amount: Example K.K."));
        assert!(report.contains("Fiscal year end: 2024-03-31"));
        assert!(report.contains("+23,000,000 ¥"));
        assert!(report.contains("-2,000,000 ¥"));
        assert!(report.contains("21,000,000 ¥"));
        assert!(report.contains("Companies Act art. 461(2)(iii)"));
        assert!(report.contains("are permitted"));
        assert!(report.contains("no deduction is required"));
    }

    #[test]
    fn report_explains_capped_goodwill_deduction() {
        let report = render(CalculationInput {
            goodwill: 50_000_000,
            deferred_assets: 10_000_000,
            capital_stock: 10_000_000,
            capital_reserve: 5_000_000,
            earned_reserve: 2_000_000,
            other_capital_surplus: 3_000_000,
            ..Default::default()
        });
        assert!(report.contains("No distribution is permitted."));
        assert!(report.contains("3,000,000 ¥ + 10,000,000 ¥ = 13,000,000 ¥"));
        assert!(!report.contains("{{"));
    }

    #[test]
    fn zero_amount_has_no_liability_warning() {
        let report = render(CalculationInput {
            capital_stock: 3_000_000,
            ..Default::default()
        });
        assert!(report.contains("The distributable amount is zero."));
        assert!(!report.contains("art. 462"));

        let report = render(CalculationInput {
            capital_stock: 2_999_999,
            ..Default::default()
        });
        assert!(report.contains("No distribution is permitted. Distributions in excess"));
        assert!(report.contains("art. 462"));
    }

    #[test]
    fn basic_mode_omits_post_year_end_terms() {
        let input = CalculationInput {
            capital_stock: 10_000_000,
            other_retained_earnings: 5_000_000,
            dividend_amount: 2_000_000,
            ..Default::default()
        };
        let basic = DistributionCalculator::new(CalculatorOptions {
            mode: CalculationMode::Basic,
            ..Default::default()
        });
        let report = render_with(basic, input);
        assert!(!report.contains("Dividends after year end"));
        assert!(!report.contains("Capital and reserve changes"));
        assert!(!report.contains("Interim settlement"));
        assert!(report.contains("Surplus at fiscal year end"));
        assert!(report.contains("Treasury stock book value"));

        let report = render(input);
        assert!(report.contains("Dividends after year end"));
        assert!(report.contains("Interim settlement"));
        assert!(report.contains("not performed"));
    }
}
