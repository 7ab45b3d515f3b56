use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{CalculationSheet, SheetFormat};

#[async_trait]
pub(crate) trait SheetsRepository: Send + Sync {
    fn from_string(&self, content: &str, format: SheetFormat)
        -> Result<CalculationSheet, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<CalculationSheet, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
