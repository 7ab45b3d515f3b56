use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidCsvContent, "Invalid CSV content: {details}.", { details: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(
    InvalidAccountingAmount,
    "Invalid accounting amount: '{value}'.",
    { value: &str }
);
define_client_error!(
    InvalidFlag,
    "Invalid flag value for '{field}': '{value}'. Expected 'true' or 'false'.",
    { field: &str, value: &str }
);
define_client_error!(
    UnsupportedSheetFormat,
    "Unsupported calculation sheet format: '{path}'. Expected a .csv or .ron file.",
    { path: &str }
);

// Input validation.
define_client_error!(
    DuplicateInputField,
    "Input field '{field}' is specified more than once.",
    { field: &str }
);
define_client_error!(
    InputOutOfRange,
    "Input field '{field}' is out of range ({value}); expected {expected}.",
    { field: &str, value: i64, expected: &str }
);

// Presentation.
define_internal_error!(
    UnreplacedPlaceholdersRemain,
    "Report template contains unknown placeholders: {keys:?}.",
    { keys: &Vec<String> }
);
define_internal_error!(JsonExportFailed, "Failed to export calculation as JSON.");
