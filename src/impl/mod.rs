// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod sheet_csv_datasource;
        pub(crate) mod sheet_ron_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod accounting_amount_model;
        pub(crate) mod calculation_input_model;
        pub(crate) mod input_field_model;
        pub(crate) mod iso_date_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod sheets_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod calculation_breakdown;
        pub(crate) mod calculation_input;
        pub(crate) mod calculation_result;
        pub(crate) mod calculation_sheet;
        pub(crate) mod calculator_options;
        pub(crate) mod goodwill_deduction;
    }
    pub(crate) mod logic {
        pub(crate) mod distribution_calculator;
        mod goodwill_ladder;
    }
    pub(crate) mod repositories {
        pub(crate) mod sheets_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod calculate_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod breakdown_fmt;
    pub(crate) mod json_exporter;
    pub(crate) mod report_printer;
    mod template;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::calculation_breakdown::*;
        pub use crate::domain::entities::calculation_input::*;
        pub use crate::domain::entities::calculation_result::*;
        pub use crate::domain::entities::calculation_sheet::*;
        pub use crate::domain::entities::calculator_options::*;
        pub use crate::domain::entities::goodwill_deduction::*;
    }

    pub use crate::domain::logic::distribution_calculator::{compute, DistributionCalculator};
    pub use crate::presentation::report_printer::ReportOptions;
}
