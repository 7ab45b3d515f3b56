use fractic_server_error::ServerError;
use ron::from_str;

use crate::{data::models::calculation_input_model::CalculationInputModel, errors::InvalidRon};

pub(crate) trait SheetRonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<CalculationInputModel, ServerError>;
}

pub(crate) struct SheetRonDatasourceImpl;

impl SheetRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl SheetRonDatasource for SheetRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<CalculationInputModel, ServerError> {
        from_str(s).map_err(|e| InvalidRon::with_debug("CalculationSheet", &e))
    }
}
