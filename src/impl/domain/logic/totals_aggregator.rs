use fractic_server_error::ServerError;
use tracing::debug;

use crate::entities::{
    Account, AccountWithTotals, LeveledAccount, Metric, NumberOrdering, RollupMode,
    TransactionsByAccount,
};

use super::level_annotator::annotate;

/// Total of `metric` for a single annotated account, using lexical number
/// ranges. See [`TotalsAggregator`] for the other options.
pub fn compute_total(
    all_accounts: &[LeveledAccount],
    account: &LeveledAccount,
    metric: Metric,
    by_account: &TransactionsByAccount,
) -> Result<f64, ServerError> {
    TotalsAggregator::default().total(all_accounts, account, metric, by_account)
}

/// Levels the accounts and attaches their three totals. Accounts must be
/// ordered by number.
pub fn build_chart_of_accounts(
    accounts: Vec<Account>,
    by_account: &TransactionsByAccount,
) -> Result<Vec<AccountWithTotals>, ServerError> {
    TotalsAggregator::default().build(accounts, by_account)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TotalsAggregator {
    ordering: NumberOrdering,
    rollup: RollupMode,
}

impl TotalsAggregator {
    pub fn new(ordering: NumberOrdering, rollup: RollupMode) -> Self {
        Self { ordering, rollup }
    }

    /// Posting, Heading and Begin Total accounts report their own metric.
    /// Rollup accounts report the sum over their members; accounts with no
    /// aggregate contribute zero.
    pub fn total(
        &self,
        all_accounts: &[LeveledAccount],
        account: &LeveledAccount,
        metric: Metric,
        by_account: &TransactionsByAccount,
    ) -> Result<f64, ServerError> {
        let lookup = |a: &LeveledAccount| {
            by_account
                .get(&a.account.number)
                .map_or(0.0, |aggregate| aggregate.get(metric))
        };

        let Some(range) = account.totaling_range()? else {
            return Ok(lookup(account));
        };

        Ok(match (self.rollup, &account.members) {
            (RollupMode::Structural, Some(members)) => all_accounts
                .get(members.clone())
                .unwrap_or_default()
                .iter()
                .map(lookup)
                .sum(),
            _ => all_accounts
                .iter()
                .filter(|a| self.ordering.in_range(&a.account.number, &range))
                .map(lookup)
                .sum(),
        })
    }

    pub fn build(
        &self,
        accounts: Vec<Account>,
        by_account: &TransactionsByAccount,
    ) -> Result<Vec<AccountWithTotals>, ServerError> {
        let leveled = annotate(accounts)?;

        let totals = leveled
            .iter()
            .map(|account| {
                Ok([
                    self.total(&leveled, account, Metric::NetChange, by_account)?,
                    self.total(&leveled, account, Metric::Balance, by_account)?,
                    self.total(&leveled, account, Metric::BalanceAtDate, by_account)?,
                ])
            })
            .collect::<Result<Vec<_>, ServerError>>()?;

        let chart: Vec<AccountWithTotals> = leveled
            .into_iter()
            .zip(totals)
            .map(
                |(leveled, [net_change, balance, balance_at_date])| AccountWithTotals {
                    leveled,
                    net_change,
                    balance,
                    balance_at_date,
                },
            )
            .collect();
        debug!(
            accounts = chart.len(),
            rollups = chart.iter().filter(|a| a.leveled.is_rollup()).count(),
            ordering = ?self.ordering,
            rollup = ?self.rollup,
            "computed chart of accounts totals"
        );

        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::TransactionAggregate;

    fn aggregate(net_change: f64, balance: f64, balance_at_date: f64) -> TransactionAggregate {
        TransactionAggregate {
            net_change,
            balance,
            balance_at_date,
        }
    }

    fn by_account(entries: &[(&str, TransactionAggregate)]) -> TransactionsByAccount {
        entries
            .iter()
            .map(|(number, aggregate)| (number.to_string(), *aggregate))
            .collect()
    }

    fn find<'a>(chart: &'a [AccountWithTotals], number: &str) -> &'a AccountWithTotals {
        chart.iter().find(|a| a.number() == number).unwrap()
    }

    #[test]
    fn test_rollup_sums_accounts_in_range() {
        let chart = build_chart_of_accounts(
            vec![
                Account::begin_total("1000", "Assets"),
                Account::posting("1010", "Cash"),
                Account::posting("1020", "Bank"),
                Account::end_total("1999", "Total Assets"),
            ],
            &by_account(&[
                ("1010", aggregate(5.0, 50.0, 40.0)),
                ("1020", aggregate(7.0, 70.0, 60.0)),
            ]),
        )
        .unwrap();
        let total = find(&chart, "1999");
        assert_eq!(total.net_change, 12.0);
        assert_eq!(total.balance, 120.0);
        assert_eq!(total.balance_at_date, 100.0);
        assert_eq!(find(&chart, "1010").net_change, 5.0);
        assert_eq!(find(&chart, "1000").net_change, 0.0);
    }

    #[test]
    fn test_compute_total_for_single_account() {
        let leveled = annotate(vec![
            Account::begin_total("1000", "Assets"),
            Account::posting("1010", "Cash"),
            Account::posting("1020", "Bank"),
            Account::end_total("1999", "Total Assets"),
        ])
        .unwrap();
        let tx = by_account(&[
            ("1010", aggregate(5.0, 0.0, 0.0)),
            ("1020", aggregate(7.0, 0.0, 0.0)),
        ]);
        assert_eq!(
            compute_total(&leveled, &leveled[3], Metric::NetChange, &tx).unwrap(),
            12.0
        );
        assert_eq!(
            compute_total(&leveled, &leveled[1], Metric::NetChange, &tx).unwrap(),
            5.0
        );
    }

    #[test]
    fn test_missing_aggregate_defaults_to_zero() {
        let chart = build_chart_of_accounts(
            vec![
                Account::posting("1010", "Cash"),
                Account::begin_total("2000", "Liabilities"),
                Account::end_total("2999", "Total Liabilities"),
            ],
            &TransactionsByAccount::new(),
        )
        .unwrap();
        for account in &chart {
            for metric in Metric::ALL {
                assert_eq!(account.total(metric), 0.0);
            }
        }
    }

    #[test]
    fn test_nested_totals_are_independent() {
        let chart = build_chart_of_accounts(
            vec![
                Account::begin_total("1000", "Assets"),
                Account::begin_total("1100", "Current Assets"),
                Account::posting("1110", "Cash"),
                Account::posting("1120", "Bank"),
                Account::end_total("1200", "Total Current Assets"),
                Account::posting("1300", "Equipment"),
                Account::end_total("1500", "Total Assets"),
            ],
            &by_account(&[
                ("1110", aggregate(1.0, 10.0, 100.0)),
                ("1120", aggregate(2.0, 20.0, 200.0)),
                ("1300", aggregate(4.0, 40.0, 400.0)),
            ]),
        )
        .unwrap();
        assert_eq!(find(&chart, "1200").net_change, 3.0);
        assert_eq!(find(&chart, "1200").balance_at_date, 300.0);
        assert_eq!(find(&chart, "1500").net_change, 7.0);
        assert_eq!(find(&chart, "1500").balance, 70.0);
    }

    #[test]
    fn test_malformed_totaling_is_rejected() {
        let account = LeveledAccount {
            account: Account::end_total("1999", "Total Assets"),
            level: 0,
            totaling: "1000-1999".to_string(),
            members: None,
        };
        let result = compute_total(
            std::slice::from_ref(&account),
            &account,
            Metric::Balance,
            &TransactionsByAccount::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unbalanced_chart_is_rejected() {
        let result = build_chart_of_accounts(
            vec![Account::end_total("1999", "Total Assets")],
            &TransactionsByAccount::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_structural_rollup_follows_nesting_not_numbering() {
        // Lexically "950" falls outside "1000".."1999", though it is nested
        // inside the range.
        let accounts = vec![
            Account::begin_total("1000", "Assets"),
            Account::posting("950", "Petty Cash"),
            Account::posting("1010", "Cash"),
            Account::end_total("1999", "Total Assets"),
        ];
        let tx = by_account(&[
            ("950", aggregate(3.0, 0.0, 0.0)),
            ("1010", aggregate(5.0, 0.0, 0.0)),
        ]);

        let by_range = TotalsAggregator::new(NumberOrdering::Lexical, RollupMode::NumberRange)
            .build(accounts.clone(), &tx)
            .unwrap();
        assert_eq!(find(&by_range, "1999").net_change, 5.0);

        let structural = TotalsAggregator::new(NumberOrdering::Lexical, RollupMode::Structural)
            .build(accounts, &tx)
            .unwrap();
        assert_eq!(find(&structural, "1999").net_change, 8.0);
    }

    #[test]
    fn test_structural_rollup_matches_range_rollup_for_sorted_chart() {
        let accounts = vec![
            Account::begin_total("1000", "Assets"),
            Account::posting("1010", "Cash"),
            Account::end_total("1999", "Total Assets"),
            Account::posting("2010", "Payables"),
        ];
        let tx = by_account(&[
            ("1010", aggregate(5.0, 6.0, 7.0)),
            ("2010", aggregate(1.0, 1.0, 1.0)),
        ]);
        let by_range = TotalsAggregator::default().build(accounts.clone(), &tx).unwrap();
        let structural = TotalsAggregator::new(NumberOrdering::Lexical, RollupMode::Structural)
            .build(accounts, &tx)
            .unwrap();
        assert_eq!(by_range, structural);
    }

    #[test]
    fn test_natural_ordering_includes_shorter_numbers() {
        let accounts = vec![
            Account::begin_total("100", "Assets"),
            Account::posting("150", "Cash"),
            Account::end_total("999", "Total Assets"),
            Account::posting("1000", "Payables"),
        ];
        let tx = by_account(&[
            ("150", aggregate(5.0, 0.0, 0.0)),
            ("1000", aggregate(9.0, 0.0, 0.0)),
        ]);

        let lexical = TotalsAggregator::default().build(accounts.clone(), &tx).unwrap();
        assert_eq!(find(&lexical, "999").net_change, 14.0);

        let natural = TotalsAggregator::new(NumberOrdering::Natural, RollupMode::NumberRange)
            .build(accounts, &tx)
            .unwrap();
        assert_eq!(find(&natural, "999").net_change, 5.0);
    }
}
