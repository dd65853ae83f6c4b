use fractic_server_error::ServerError;
use tracing::{debug, warn};

use crate::{
    entities::{Account, AccountType, LeveledAccount, TotalingRange},
    errors::UnbalancedTotaling,
};

/// Assigns each account its nesting level and, for End Total accounts, the
/// totaling range closed by it.
///
/// Input must already be ordered by account number; it is never re-sorted.
pub fn annotate(accounts: Vec<Account>) -> Result<Vec<LeveledAccount>, ServerError> {
    LevelAnnotator::new(accounts).process()
}

pub(crate) struct LevelAnnotator {
    accounts: Vec<Account>,
}

struct OpenRange {
    number: String,
    index: usize,
}

struct LevelState {
    /// Begin Total accounts not yet closed, innermost last.
    open_ranges: Vec<OpenRange>,
    /// Once any Heading has been seen, every later non-heading row sits one
    /// level deeper.
    has_heading: bool,
    leveled: Vec<LeveledAccount>,
}

impl LevelState {
    fn new(capacity: usize) -> Self {
        Self {
            open_ranges: Vec::new(),
            has_heading: false,
            leveled: Vec::with_capacity(capacity),
        }
    }

    /// Update current state with the next account in the chart.
    fn step(self, account: Account) -> Result<Self, ServerError> {
        let mut open_ranges = self.open_ranges;
        let mut has_heading = self.has_heading;
        let mut leveled = self.leveled;

        let index = leveled.len();
        let depth = open_ranges.len() + usize::from(has_heading);
        let (level, totaling, members) = match account.account_type {
            AccountType::Posting => (depth, String::new(), None),
            AccountType::BeginTotal => {
                open_ranges.push(OpenRange {
                    number: account.number.clone(),
                    index,
                });
                (depth, String::new(), None)
            }
            AccountType::Heading => {
                has_heading = true;
                (0, String::new(), None)
            }
            AccountType::EndTotal => {
                let Some(start) = open_ranges.pop() else {
                    return Err(UnbalancedTotaling::new(&account.number));
                };
                // Closing row sits at the same level as its Begin Total.
                let totaling = TotalingRange::new(start.number, account.number.as_str());
                (depth - 1, totaling.to_string(), Some(start.index..=index))
            }
        };

        leveled.push(LeveledAccount {
            account,
            level,
            totaling,
            members,
        });

        Ok(Self {
            open_ranges,
            has_heading,
            leveled,
        })
    }
}

impl LevelAnnotator {
    pub(crate) fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    pub(crate) fn process(self) -> Result<Vec<LeveledAccount>, ServerError> {
        let count = self.accounts.len();
        let state = self
            .accounts
            .into_iter()
            .try_fold(LevelState::new(count), LevelState::step)?;

        if !state.open_ranges.is_empty() {
            let unclosed: Vec<&str> = state
                .open_ranges
                .iter()
                .map(|r| r.number.as_str())
                .collect();
            warn!(?unclosed, "chart of accounts ends with unclosed Begin Total accounts");
        }
        debug!(accounts = count, "annotated chart of accounts levels");

        Ok(state.leveled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(leveled: &[LeveledAccount]) -> Vec<usize> {
        leveled.iter().map(|a| a.level).collect()
    }

    fn totalings(leveled: &[LeveledAccount]) -> Vec<&str> {
        leveled.iter().map(|a| a.totaling.as_str()).collect()
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(annotate(vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_order_and_accounts_are_preserved() {
        let accounts = vec![
            Account::heading("0000", "Balance Sheet"),
            Account::begin_total("1000", "Assets"),
            Account::posting("1010", "Cash"),
            Account::end_total("1999", "Total Assets"),
            Account::posting("2010", "Payables"),
        ];
        let leveled = annotate(accounts.clone()).unwrap();
        assert_eq!(leveled.len(), accounts.len());
        for (leveled, account) in leveled.iter().zip(&accounts) {
            assert_eq!(&leveled.account, account);
        }
    }

    #[test]
    fn test_end_total_pairs_with_begin_total() {
        let leveled = annotate(vec![
            Account::begin_total("1000", "Assets"),
            Account::posting("1010", "Cash"),
            Account::end_total("1999", "Total Assets"),
        ])
        .unwrap();
        assert_eq!(totalings(&leveled), vec!["", "", "1000..1999"]);
        assert_eq!(levels(&leveled), vec![0, 1, 0]);
        assert_eq!(leveled[2].members, Some(0..=2));
    }

    #[test]
    fn test_heading_shifts_later_rows_one_level_deeper() {
        let leveled = annotate(vec![
            Account::heading("0000", "Balance Sheet"),
            Account::posting("0100", "Suspense"),
            Account::posting("0200", "Clearing"),
            Account::begin_total("1000", "Assets"),
            Account::posting("1010", "Cash"),
            Account::begin_total("1100", "Receivables"),
            Account::posting("1110", "Trade Receivables"),
            Account::end_total("1199", "Total Receivables"),
            Account::end_total("1999", "Total Assets"),
        ])
        .unwrap();
        assert_eq!(levels(&leveled), vec![0, 1, 1, 1, 2, 2, 3, 2, 1]);
    }

    #[test]
    fn test_heading_is_always_level_zero() {
        let leveled = annotate(vec![
            Account::begin_total("1000", "Assets"),
            Account::heading("1001", "Current Assets"),
            Account::posting("1010", "Cash"),
            Account::end_total("1999", "Total Assets"),
        ])
        .unwrap();
        assert_eq!(levels(&leveled), vec![0, 0, 2, 1]);
        assert_eq!(leveled[3].totaling, "1000..1999");
    }

    #[test]
    fn test_nested_ranges_close_innermost_first() {
        let leveled = annotate(vec![
            Account::begin_total("1000", "Assets"),
            Account::begin_total("1100", "Current Assets"),
            Account::posting("1110", "Cash"),
            Account::end_total("1200", "Total Current Assets"),
            Account::posting("1300", "Equipment"),
            Account::end_total("1500", "Total Assets"),
        ])
        .unwrap();
        assert_eq!(
            totalings(&leveled),
            vec!["", "", "", "1100..1200", "", "1000..1500"]
        );
        assert_eq!(levels(&leveled), vec![0, 1, 2, 1, 1, 0]);
        assert_eq!(leveled[3].members, Some(1..=3));
        assert_eq!(leveled[5].members, Some(0..=5));
    }

    #[test]
    fn test_end_total_without_begin_total_is_rejected() {
        let result = annotate(vec![
            Account::posting("1010", "Cash"),
            Account::end_total("1999", "Total Assets"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unclosed_begin_total_is_tolerated() {
        let leveled = annotate(vec![
            Account::begin_total("1000", "Assets"),
            Account::posting("1010", "Cash"),
        ])
        .unwrap();
        assert_eq!(levels(&leveled), vec![0, 1]);
        assert_eq!(totalings(&leveled), vec!["", ""]);
    }
}
