use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::LedgerRecords;

#[async_trait]
pub trait LedgerRepository: Send + Sync {
    fn from_string(
        &self,
        accounts_csv: &str,
        journal_lines_csv: &str,
    ) -> Result<LedgerRecords, ServerError>;

    async fn from_file<P>(
        &self,
        accounts_csv: P,
        journal_lines_csv: P,
    ) -> Result<LedgerRecords, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
