use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use fractic_server_error::ServerError;
use tracing::{info, instrument};

use crate::{
    data::repositories::ledger_repository_impl::LedgerRepositoryImpl,
    domain::{
        logic::{
            journal_aggregator::{warn_unknown_accounts, JournalAggregator},
            totals_aggregator::TotalsAggregator,
        },
        repositories::ledger_repository::LedgerRepository,
    },
    entities::{
        Account, AccountListQuery, AccountSummary, ChartOfAccounts, ChartQuery, LedgerRecords,
        NumberOrdering, ReportingPeriod,
    },
    errors::ReadError,
};

#[async_trait]
pub trait ChartUsecase: Send + Sync {
    fn chart_from_string(
        &self,
        accounts_csv: &str,
        journal_lines_csv: &str,
        query: &ChartQuery,
    ) -> Result<ChartOfAccounts, ServerError>;

    async fn chart_from_file<P>(
        &self,
        accounts_csv: P,
        journal_lines_csv: P,
        query: &ChartQuery,
    ) -> Result<ChartOfAccounts, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn list_from_string(
        &self,
        accounts_csv: &str,
        query: &AccountListQuery,
    ) -> Result<Vec<AccountSummary>, ServerError>;

    async fn list_from_file<P>(
        &self,
        accounts_csv: P,
        query: &AccountListQuery,
    ) -> Result<Vec<AccountSummary>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ChartUsecaseImpl<
    R1 = LedgerRepositoryImpl, // Default.
> where
    R1: LedgerRepository,
{
    ledger_repository: R1,
    /// Supplies "today" when a query leaves the period open.
    clock: fn() -> NaiveDate,
}

#[async_trait]
impl<R1> ChartUsecase for ChartUsecaseImpl<R1>
where
    R1: LedgerRepository,
{
    #[instrument(skip_all)]
    fn chart_from_string(
        &self,
        accounts_csv: &str,
        journal_lines_csv: &str,
        query: &ChartQuery,
    ) -> Result<ChartOfAccounts, ServerError> {
        let records = self
            .ledger_repository
            .from_string(accounts_csv, journal_lines_csv)?;
        self.build_chart(records, query)
    }

    #[instrument(skip_all)]
    async fn chart_from_file<P>(
        &self,
        accounts_csv: P,
        journal_lines_csv: P,
        query: &ChartQuery,
    ) -> Result<ChartOfAccounts, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let records = self
            .ledger_repository
            .from_file(accounts_csv, journal_lines_csv)
            .await?;
        self.build_chart(records, query)
    }

    #[instrument(skip_all)]
    fn list_from_string(
        &self,
        accounts_csv: &str,
        query: &AccountListQuery,
    ) -> Result<Vec<AccountSummary>, ServerError> {
        let records = self.ledger_repository.from_string(accounts_csv, "")?;
        Ok(list_accounts(&records.accounts, query))
    }

    #[instrument(skip_all)]
    async fn list_from_file<P>(
        &self,
        accounts_csv: P,
        query: &AccountListQuery,
    ) -> Result<Vec<AccountSummary>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let accounts_csv = tokio::fs::read_to_string(accounts_csv)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.list_from_string(&accounts_csv, query)
    }
}

impl ChartUsecaseImpl {
    pub(crate) fn new() -> Self {
        ChartUsecaseImpl {
            ledger_repository: LedgerRepositoryImpl::new(),
            clock: || Local::now().date_naive(),
        }
    }
}

impl<R1: LedgerRepository> ChartUsecaseImpl<R1> {
    #[cfg(test)]
    pub(crate) fn with_clock(ledger_repository: R1, clock: fn() -> NaiveDate) -> Self {
        ChartUsecaseImpl {
            ledger_repository,
            clock,
        }
    }

    fn build_chart(
        &self,
        records: LedgerRecords,
        query: &ChartQuery,
    ) -> Result<ChartOfAccounts, ServerError> {
        let LedgerRecords {
            accounts,
            journal_lines,
        } = records;

        let today = (self.clock)();
        let period = ReportingPeriod::resolve(query.start_date, query.end_date, today)?;

        let mut accounts: Vec<Account> = accounts
            .into_iter()
            .filter(|a| a.active)
            .filter(|a| query.income_balance.is_none() || a.income_balance == query.income_balance)
            .collect();
        sort_by_number(&mut accounts, query.ordering);

        let by_account = JournalAggregator::new(period).aggregate(&journal_lines);
        warn_unknown_accounts(&by_account, accounts.iter().map(|a| a.number.as_str()));

        let accounts =
            TotalsAggregator::new(query.ordering, query.rollup).build(accounts, &by_account)?;
        info!(
            accounts = accounts.len(),
            journal_lines = journal_lines.len(),
            start = %period.start,
            end = %period.end,
            "built chart of accounts"
        );

        Ok(ChartOfAccounts { period, accounts })
    }
}

fn sort_by_number(accounts: &mut [Account], ordering: NumberOrdering) {
    accounts.sort_by(|a, b| ordering.compare(&a.number, &b.number));
}

fn list_accounts(accounts: &[Account], query: &AccountListQuery) -> Vec<AccountSummary> {
    let search = query.search.as_deref().map(str::to_lowercase);
    let mut matching: Vec<&Account> = accounts
        .iter()
        .filter(|a| a.active)
        .filter(|a| query.account_type.map_or(true, |t| a.account_type == t))
        .filter(|a| query.income_balance.is_none() || a.income_balance == query.income_balance)
        .filter(|a| {
            query.classes.is_empty() || a.class.is_some_and(|c| query.classes.contains(&c))
        })
        .filter(|a| {
            search
                .as_deref()
                .map_or(true, |s| a.name.to_lowercase().contains(s))
        })
        .collect();
    matching.sort_by(|a, b| a.number.cmp(&b.number));
    matching.into_iter().map(AccountSummary::from).collect()
}
