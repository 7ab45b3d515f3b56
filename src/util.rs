use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::distribution_calculator::DistributionCalculator,
        usecases::calculate_usecase::{CalculateUsecase as _, CalculateUsecaseImpl},
    },
    entities::{
        CalculationBreakdown, CalculationInput, CalculationResult, CalculationSheet,
        CalculatorOptions, SheetFormat,
    },
    presentation::{
        json_exporter::JsonExporter,
        report_printer::{ReportOptions, ReportPrinter},
    },
};

pub type Report = String;

/// Loads calculation sheets, computes the distributable amount, and renders
/// the result.
pub struct DistributableAmountUtil {
    calculator: DistributionCalculator,
    calculate_usecase: CalculateUsecaseImpl,
    printer: ReportPrinter,
    exporter: JsonExporter,
    report_options: ReportOptions,
}

impl DistributableAmountUtil {
    pub fn new() -> Self {
        Self::with_options(CalculatorOptions::default(), ReportOptions::default())
    }

    pub fn with_options(options: CalculatorOptions, report_options: ReportOptions) -> Self {
        let calculator = DistributionCalculator::new(options);
        Self {
            calculator,
            calculate_usecase: CalculateUsecaseImpl::new(calculator),
            printer: ReportPrinter::new(),
            exporter: JsonExporter::new(),
            report_options,
        }
    }

    pub fn compute(&self, input: &CalculationInput) -> CalculationResult {
        self.calculator.compute(input)
    }

    pub fn compute_breakdown(&self, input: &CalculationInput) -> CalculationBreakdown {
        self.calculator.compute_breakdown(input)
    }

    pub async fn from_string(
        &self,
        content: &str,
        format: SheetFormat,
    ) -> Result<(CalculationSheet, CalculationBreakdown, Report), ServerError> {
        let (sheet, breakdown) = self.calculate_usecase.from_string(content, format).await?;
        let report = self.print_report(&sheet, &breakdown)?;
        Ok((sheet, breakdown, report))
    }

    pub async fn from_file<P>(
        &self,
        path: P,
    ) -> Result<(CalculationSheet, CalculationBreakdown, Report), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let (sheet, breakdown) = self.calculate_usecase.from_file(path).await?;
        let report = self.print_report(&sheet, &breakdown)?;
        Ok((sheet, breakdown, report))
    }

    pub async fn from_files<P>(
        &self,
        paths: Vec<P>,
    ) -> Result<Vec<(CalculationSheet, CalculationBreakdown, Report)>, ServerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        self.calculate_usecase
            .from_files(paths)
            .await?
            .into_iter()
            .map(|(sheet, breakdown)| -> Result<_, ServerError> {
                let report = self.print_report(&sheet, &breakdown)?;
                Ok((sheet, breakdown, report))
            })
            .collect()
    }

    pub fn print_report(
        &self,
        sheet: &CalculationSheet,
        breakdown: &CalculationBreakdown,
    ) -> Result<Report, ServerError> {
        self.printer.print_report(sheet, breakdown, &self.report_options)
    }

    pub fn export_json(&self, breakdown: &CalculationBreakdown) -> Result<String, ServerError> {
        self.exporter.export(breakdown)
    }
}

impl Default for DistributableAmountUtil {
    fn default() -> Self {
        Self::new()
    }
}
