use chrono::{Months, NaiveDate};
use fractic_server_error::ServerError;
use serde_derive::Serialize;

use crate::errors::InvalidReportingPeriod;

use super::{leveled_account::LeveledAccount, transaction_aggregate::Metric};

/// A leveled account with its three computed totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountWithTotals {
    #[serde(flatten)]
    pub leveled: LeveledAccount,
    pub net_change: f64,
    pub balance: f64,
    pub balance_at_date: f64,
}

impl AccountWithTotals {
    pub fn total(&self, metric: Metric) -> f64 {
        match metric {
            Metric::NetChange => self.net_change,
            Metric::Balance => self.balance,
            Metric::BalanceAtDate => self.balance_at_date,
        }
    }

    pub fn number(&self) -> &str {
        &self.leveled.account.number
    }
}

/// Inclusive date range the net change is computed over. Balance at date is
/// taken as of `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportingPeriod {
    /// Without an explicit start, reports reach this far back.
    pub const DEFAULT_LOOKBACK_YEARS: u32 = 50;

    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ServerError> {
        if start > end {
            return Err(InvalidReportingPeriod::new(&start, &end));
        }
        Ok(Self { start, end })
    }

    /// Fills in missing bounds: the end defaults to `today`, the start to
    /// [`Self::DEFAULT_LOOKBACK_YEARS`] years before `today`.
    pub fn resolve(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self, ServerError> {
        let start = start.unwrap_or_else(|| {
            today
                .checked_sub_months(Months::new(12 * Self::DEFAULT_LOOKBACK_YEARS))
                .unwrap_or(NaiveDate::MIN)
        });
        Self::new(start, end.unwrap_or(today))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Result of a chart-of-accounts query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOfAccounts {
    pub period: ReportingPeriod,
    pub accounts: Vec<AccountWithTotals>,
}
