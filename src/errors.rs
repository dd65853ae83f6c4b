use chrono::NaiveDate;
use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidCsvContent, "Invalid CSV content: {details}.", { details: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(
    InvalidAccountingAmount,
    "Invalid accounting amount: '{value}'.",
    { value: &str }
);
define_client_error!(
    InvalidAccountAttribute,
    "Invalid {attribute}: '{value}'.",
    { attribute: &str, value: &str }
);

// Chart-related.
define_client_error!(
    DuplicateAccountNumber,
    "Account number '{number}' appears more than once in the chart of accounts.",
    { number: &str }
);
define_client_error!(
    UnbalancedTotaling,
    "End Total account '{number}' has no matching Begin Total account before it.",
    { number: &str }
);
define_internal_error!(
    InvalidTotaling,
    "Invalid totaling range: '{totaling}'. Expected '<start>..<end>'.",
    { totaling: &str }
);
define_client_error!(
    InvalidReportingPeriod,
    "Invalid reporting period: start date ({start}) is after end date ({end}).",
    { start: &NaiveDate, end: &NaiveDate }
);

// Output-related.
define_internal_error!(SerializationFailed, "Failed to serialize chart of accounts.");
