use async_trait::async_trait;
use fractic_server_error::ServerError;
use futures::{stream, StreamExt as _, TryStreamExt as _};
use tracing::info;

use crate::{
    data::repositories::sheets_repository_impl::SheetsRepositoryImpl,
    domain::{
        logic::distribution_calculator::DistributionCalculator,
        repositories::sheets_repository::SheetsRepository,
    },
    entities::{CalculationBreakdown, CalculationSheet, SheetFormat},
};

/// Maximum number of sheets read concurrently in a batch.
const BATCH_CONCURRENCY: usize = 8;

#[async_trait]
pub trait CalculateUsecase: Send + Sync {
    async fn from_string(
        &self,
        content: &str,
        format: SheetFormat,
    ) -> Result<(CalculationSheet, CalculationBreakdown), ServerError>;

    async fn from_file<P>(
        &self,
        path: P,
    ) -> Result<(CalculationSheet, CalculationBreakdown), ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    /// Results are returned in the order of `paths`. The first failure aborts
    /// the batch.
    async fn from_files<P>(
        &self,
        paths: Vec<P>,
    ) -> Result<Vec<(CalculationSheet, CalculationBreakdown)>, ServerError>
    where
        P: AsRef<std::path::Path> + Send + Sync;
}

pub(crate) struct CalculateUsecaseImpl<
    R1 = SheetsRepositoryImpl, // Default.
> where
    R1: SheetsRepository,
{
    sheets_repository: R1,
    calculator: DistributionCalculator,
}

#[async_trait]
impl<R1> CalculateUsecase for CalculateUsecaseImpl<R1>
where
    R1: SheetsRepository,
{
    async fn from_string(
        &self,
        content: &str,
        format: SheetFormat,
    ) -> Result<(CalculationSheet, CalculationBreakdown), ServerError> {
        let sheet = self.sheets_repository.from_string(content, format)?;
        Ok(self.compute(sheet))
    }

    async fn from_file<P>(
        &self,
        path: P,
    ) -> Result<(CalculationSheet, CalculationBreakdown), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let sheet = self.sheets_repository.from_file(path).await?;
        Ok(self.compute(sheet))
    }

    async fn from_files<P>(
        &self,
        paths: Vec<P>,
    ) -> Result<Vec<(CalculationSheet, CalculationBreakdown)>, ServerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        info!(count = paths.len(), "computing batch of calculation sheets");
        stream::iter(paths)
            .map(|path| async move { self.from_file(path).await })
            .buffered(BATCH_CONCURRENCY)
            .try_collect()
            .await
    }
}

impl<R1: SheetsRepository> CalculateUsecaseImpl<R1> {
    fn compute(&self, sheet: CalculationSheet) -> (CalculationSheet, CalculationBreakdown) {
        let breakdown = self.calculator.compute_breakdown(&sheet.input);
        info!(
            sheet = sheet.name.as_deref().unwrap_or("(unnamed)"),
            distributable_amount = breakdown.result.distributable_amount,
            "computed calculation sheet"
        );
        (sheet, breakdown)
    }
}

impl CalculateUsecaseImpl {
    pub(crate) fn new(calculator: DistributionCalculator) -> Self {
        CalculateUsecaseImpl {
            sheets_repository: SheetsRepositoryImpl::new(),
            calculator,
        }
    }
}
