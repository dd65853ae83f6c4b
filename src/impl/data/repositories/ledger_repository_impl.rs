use std::collections::HashSet;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        accounts_csv_datasource::{AccountsCsvDatasource, AccountsCsvDatasourceImpl},
        journal_lines_csv_datasource::{
            JournalLinesCsvDatasource, JournalLinesCsvDatasourceImpl,
        },
    },
    domain::repositories::ledger_repository::LedgerRepository,
    entities::{Account, LedgerRecords},
    errors::{DuplicateAccountNumber, ReadError},
};

pub(crate) struct LedgerRepositoryImpl<
    DS1 = AccountsCsvDatasourceImpl, // Default.
    DS2 = JournalLinesCsvDatasourceImpl,
>
where
    DS1: AccountsCsvDatasource,
    DS2: JournalLinesCsvDatasource,
{
    accounts_datasource: DS1,
    journal_lines_datasource: DS2,
}

#[async_trait]
impl<DS1, DS2> LedgerRepository for LedgerRepositoryImpl<DS1, DS2>
where
    DS1: AccountsCsvDatasource,
    DS2: JournalLinesCsvDatasource,
{
    fn from_string(
        &self,
        accounts_csv: &str,
        journal_lines_csv: &str,
    ) -> Result<LedgerRecords, ServerError> {
        let accounts = self.accounts_datasource.from_string(accounts_csv)?;
        ensure_unique_numbers(&accounts)?;
        Ok(LedgerRecords {
            accounts,
            journal_lines: self.journal_lines_datasource.from_string(journal_lines_csv)?,
        })
    }

    async fn from_file<P>(
        &self,
        accounts_csv: P,
        journal_lines_csv: P,
    ) -> Result<LedgerRecords, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let accounts_csv = read_to_string(accounts_csv).await?;
        let journal_lines_csv = read_to_string(journal_lines_csv).await?;
        self.from_string(&accounts_csv, &journal_lines_csv)
    }
}

impl LedgerRepositoryImpl {
    pub(crate) fn new() -> Self {
        LedgerRepositoryImpl {
            accounts_datasource: AccountsCsvDatasourceImpl::new(),
            journal_lines_datasource: JournalLinesCsvDatasourceImpl::new(),
        }
    }
}

async fn read_to_string<P>(path: P) -> Result<String, ServerError>
where
    P: AsRef<std::path::Path>,
{
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ReadError::with_debug(&e))
}

fn ensure_unique_numbers(accounts: &[Account]) -> Result<(), ServerError> {
    let mut seen = HashSet::with_capacity(accounts.len());
    for account in accounts {
        if !seen.insert(account.number.as_str()) {
            return Err(DuplicateAccountNumber::new(&account.number));
        }
    }
    Ok(())
}
