use chrono::NaiveDate;

use super::account::{AccountClass, AccountType, IncomeBalance};

/// How account numbers are compared when sorting the chart and when testing
/// membership in a totaling range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberOrdering {
    /// Plain string comparison ("1000" < "900").
    #[default]
    Lexical,
    /// Digit runs compared by numeric value ("900" < "1000").
    Natural,
}

/// Which accounts a rollup account sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RollupMode {
    /// Every account whose number lies within the totaling range.
    #[default]
    NumberRange,
    /// Every row between the matching Begin Total and End Total, regardless
    /// of numbering.
    Structural,
}

#[derive(Debug, Clone, Default)]
pub struct ChartQuery {
    /// Restrict the chart to balance sheet or income statement accounts.
    pub income_balance: Option<IncomeBalance>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub ordering: NumberOrdering,
    pub rollup: RollupMode,
}

#[derive(Debug, Clone, Default)]
pub struct AccountListQuery {
    pub account_type: Option<AccountType>,
    pub income_balance: Option<IncomeBalance>,
    /// Empty means any class.
    pub classes: Vec<AccountClass>,
    /// Case-insensitive substring of the account name.
    pub search: Option<String>,
}
