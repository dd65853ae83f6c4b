use std::collections::HashSet;

use tracing::{debug, warn};

use crate::entities::{JournalLine, ReportingPeriod, TransactionsByAccount};

/// Rolls journal lines up into per-account metrics for a reporting period.
pub(crate) struct JournalAggregator {
    period: ReportingPeriod,
}

impl JournalAggregator {
    pub(crate) fn new(period: ReportingPeriod) -> Self {
        Self { period }
    }

    /// Net change counts lines inside the period, balance at date counts
    /// every line up to the end of the period, and balance counts every line.
    pub(crate) fn aggregate<'a>(
        &self,
        lines: impl IntoIterator<Item = &'a JournalLine>,
    ) -> TransactionsByAccount {
        let mut line_count = 0usize;
        let by_account = lines
            .into_iter()
            .fold(TransactionsByAccount::new(), |mut acc, line| {
                line_count += 1;
                let aggregate = acc.entry(line.account_number.clone()).or_default();
                aggregate.balance += line.amount;
                if line.posting_date <= self.period.end {
                    aggregate.balance_at_date += line.amount;
                }
                if self.period.contains(line.posting_date) {
                    aggregate.net_change += line.amount;
                }
                acc
            });
        debug!(
            lines = line_count,
            accounts = by_account.len(),
            start = %self.period.start,
            end = %self.period.end,
            "aggregated journal lines by account"
        );
        by_account
    }
}

/// Logs aggregates posted to accounts missing from the chart. They never
/// contribute to any total.
pub(crate) fn warn_unknown_accounts<'a>(
    by_account: &TransactionsByAccount,
    known_numbers: impl IntoIterator<Item = &'a str>,
) {
    let known: HashSet<&str> = known_numbers.into_iter().collect();
    let unknown: Vec<&str> = by_account
        .keys()
        .map(String::as_str)
        .filter(|number| !known.contains(number))
        .collect();
    if !unknown.is_empty() {
        warn!(?unknown, "journal lines posted to accounts missing from the chart");
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn line(account_number: &str, posting_date: &str, amount: f64) -> JournalLine {
        JournalLine {
            account_number: account_number.to_string(),
            posting_date: date(posting_date),
            amount,
        }
    }

    #[test]
    fn test_metrics_follow_period_bounds() {
        let period = ReportingPeriod::new(date("2024-01-01"), date("2024-01-31")).unwrap();
        let lines = vec![
            line("1010", "2023-12-15", 100.0),
            line("1010", "2024-01-01", 20.0),
            line("1010", "2024-01-31", 3.0),
            line("1010", "2024-02-01", 1000.0),
            line("2010", "2024-01-10", -50.0),
        ];
        let by_account = JournalAggregator::new(period).aggregate(&lines);

        assert_eq!(by_account.len(), 2);
        let cash = by_account["1010"];
        assert_eq!(cash.net_change, 23.0);
        assert_eq!(cash.balance_at_date, 123.0);
        assert_eq!(cash.balance, 1123.0);
        let payables = by_account["2010"];
        assert_eq!(payables.net_change, -50.0);
        assert_eq!(payables.balance_at_date, -50.0);
        assert_eq!(payables.balance, -50.0);
    }

    #[test]
    fn test_no_lines_yields_no_aggregates() {
        let period = ReportingPeriod::new(date("2024-01-01"), date("2024-01-31")).unwrap();
        assert!(JournalAggregator::new(period).aggregate(&Vec::<JournalLine>::new()).is_empty());
    }
}
