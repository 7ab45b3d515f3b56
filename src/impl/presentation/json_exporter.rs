use fractic_server_error::ServerError;

use crate::{entities::CalculationBreakdown, errors::JsonExportFailed};

pub(crate) struct JsonExporter;

impl JsonExporter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn export(&self, breakdown: &CalculationBreakdown) -> Result<String, ServerError> {
        serde_json::to_string_pretty(breakdown).map_err(|e| JsonExportFailed::with_debug(&e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entities::CalculationInput, DistributionCalculator};

    #[test]
    fn exports_result_and_goodwill_details() {
        let breakdown = DistributionCalculator::default().compute_breakdown(&CalculationInput {
            capital_stock: 10_000_000,
            other_capital_surplus: 3_000_000,
            other_retained_earnings: 1_000_000,
            goodwill: 24_000_000,
            deferred_assets: 4_000_000,
            ..Default::default()
        });
        let json: serde_json::Value =
            serde_json::from_str(&JsonExporter::new().export(&breakdown).unwrap()).unwrap();
        assert_eq!(json["result"]["distributable_amount"], -2_000_000);
        assert_eq!(json["result"]["goodwill_deferred_deduction"], 6_000_000);
        assert_eq!(json["goodwill"]["tier"], "HalfGoodwillCovered");
        assert_eq!(json["mode"], "Detailed");
        assert_eq!(json["net_assets"], 14_000_000);
    }
}
