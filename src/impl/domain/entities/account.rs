use serde_derive::Serialize;

/// A general-ledger account as it appears in the chart of accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique account number. Defines the traversal order of the chart and
    /// the membership of totaling ranges.
    pub number: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub class: Option<AccountClass>,
    pub income_balance: Option<IncomeBalance>,
    pub account_category_id: Option<String>,
    pub account_subcategory_id: Option<String>,
    pub consolidated_rate: Option<ConsolidatedRate>,
    pub direct_posting: bool,
    pub active: bool,
}

/// Controls how an account participates in leveling and totaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AccountType {
    /// Leaf account receiving transaction postings directly.
    Posting,
    /// Opens a totaling range for the accounts that follow.
    #[serde(rename = "Begin Total")]
    BeginTotal,
    /// Closes the most recently opened range and sums it.
    #[serde(rename = "End Total")]
    EndTotal,
    /// Zero-level divider row, no totaling semantics.
    Heading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AccountClass {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IncomeBalance {
    #[serde(rename = "Balance Sheet")]
    BalanceSheet,
    #[serde(rename = "Income Statement")]
    IncomeStatement,
}

/// Exchange rate used when consolidating the account across currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConsolidatedRate {
    Average,
    Current,
    Historical,
}

/// Number and name only, as returned by account list queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub number: String,
    pub name: String,
}

// Shorthand constructor.

impl Account {
    /// Active account with no descriptive attributes set.
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
    ) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            account_type,
            class: None,
            income_balance: None,
            account_category_id: None,
            account_subcategory_id: None,
            consolidated_rate: None,
            direct_posting: false,
            active: true,
        }
    }

    pub fn posting(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(number, name, AccountType::Posting)
    }

    pub fn begin_total(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(number, name, AccountType::BeginTotal)
    }

    pub fn end_total(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(number, name, AccountType::EndTotal)
    }

    pub fn heading(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(number, name, AccountType::Heading)
    }
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        AccountSummary {
            number: account.number.clone(),
            name: account.name.clone(),
        }
    }
}
