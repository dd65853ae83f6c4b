use std::collections::HashMap;

use chrono::NaiveDate;
use serde_derive::Serialize;

/// Per-account transaction metrics for a reporting period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionAggregate {
    pub net_change: f64,
    pub balance: f64,
    pub balance_at_date: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    NetChange,
    Balance,
    BalanceAtDate,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::NetChange, Metric::Balance, Metric::BalanceAtDate];
}

impl TransactionAggregate {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::NetChange => self.net_change,
            Metric::Balance => self.balance,
            Metric::BalanceAtDate => self.balance_at_date,
        }
    }
}

/// Aggregates keyed by account number. Absent accounts count as zero.
pub type TransactionsByAccount = HashMap<String, TransactionAggregate>;

/// A single posting against an account.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalLine {
    pub account_number: String,
    pub posting_date: NaiveDate,
    pub amount: f64,
}
