use super::{account::Account, transaction_aggregate::JournalLine};

/// Raw inputs of a chart-of-accounts report, before filtering and leveling.
pub struct LedgerRecords {
    pub accounts: Vec<Account>,
    pub journal_lines: Vec<JournalLine>,
}
