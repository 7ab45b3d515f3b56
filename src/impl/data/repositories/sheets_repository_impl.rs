use std::path::Path;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::{debug, warn};

use crate::{
    data::datasources::{
        sheet_csv_datasource::{SheetCsvDatasource, SheetCsvDatasourceImpl},
        sheet_ron_datasource::{SheetRonDatasource, SheetRonDatasourceImpl},
    },
    domain::repositories::sheets_repository::SheetsRepository,
    entities::{CalculationSheet, SheetFormat},
    errors::{ReadError, UnsupportedSheetFormat},
};

pub(crate) fn sheet_format_from_path(path: &Path) -> Result<SheetFormat, ServerError> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("csv") => Ok(SheetFormat::Csv),
        Some("ron") => Ok(SheetFormat::Ron),
        _ => Err(UnsupportedSheetFormat::new(&path.display().to_string())),
    }
}

pub(crate) struct SheetsRepositoryImpl<
    DS1 = SheetCsvDatasourceImpl, // Default.
    DS2 = SheetRonDatasourceImpl, // Default.
> where
    DS1: SheetCsvDatasource,
    DS2: SheetRonDatasource,
{
    csv_datasource: DS1,
    ron_datasource: DS2,
}

#[async_trait]
impl<DS1, DS2> SheetsRepository for SheetsRepositoryImpl<DS1, DS2>
where
    DS1: SheetCsvDatasource,
    DS2: SheetRonDatasource,
{
    fn from_string(
        &self,
        content: &str,
        format: SheetFormat,
    ) -> Result<CalculationSheet, ServerError> {
        let model = match format {
            SheetFormat::Csv => self.csv_datasource.from_string(content)?,
            SheetFormat::Ron => self.ron_datasource.from_string(content)?,
        };
        model.validate().map_err(|e| {
            warn!(?format, "calculation sheet failed validation");
            e
        })
    }

    async fn from_file<P>(&self, path: P) -> Result<CalculationSheet, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let path = path.as_ref();
        let format = sheet_format_from_path(path)?;
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        debug!(path = %path.display(), ?format, "read calculation sheet");
        self.from_string(&content, format)
    }
}

impl SheetsRepositoryImpl {
    pub(crate) fn new() -> Self {
        SheetsRepositoryImpl {
            csv_datasource: SheetCsvDatasourceImpl::new(),
            ron_datasource: SheetRonDatasourceImpl::new(),
        }
    }
}
