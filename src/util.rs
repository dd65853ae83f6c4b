use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    domain::usecases::chart_usecase::{ChartUsecase as _, ChartUsecaseImpl},
    entities::{AccountListQuery, AccountSummary, ChartOfAccounts, ChartQuery},
    presentation::chart_printer::ChartPrinter,
};

pub type Report = String;

pub struct ChartOfAccountsUtil {
    chart_usecase: ChartUsecaseImpl,
    printer: ChartPrinter,
}

impl ChartOfAccountsUtil {
    /// Amounts in reports are formatted for `base_currency`.
    pub fn new(base_currency: Currency) -> Self {
        Self {
            chart_usecase: ChartUsecaseImpl::new(),
            printer: ChartPrinter::new(base_currency),
        }
    }

    pub fn from_string(
        &self,
        accounts_csv: &str,
        journal_lines_csv: &str,
        query: &ChartQuery,
    ) -> Result<(ChartOfAccounts, Report), ServerError> {
        let chart = self
            .chart_usecase
            .chart_from_string(accounts_csv, journal_lines_csv, query)?;
        let report = self.printer.print_report(&chart);
        Ok((chart, report))
    }

    pub async fn from_file<T>(
        &self,
        accounts_csv: T,
        journal_lines_csv: T,
        query: &ChartQuery,
    ) -> Result<(ChartOfAccounts, Report), ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        let chart = self
            .chart_usecase
            .chart_from_file(accounts_csv, journal_lines_csv, query)
            .await?;
        let report = self.printer.print_report(&chart);
        Ok((chart, report))
    }

    pub fn list_from_string(
        &self,
        accounts_csv: &str,
        query: &AccountListQuery,
    ) -> Result<Vec<AccountSummary>, ServerError> {
        self.chart_usecase.list_from_string(accounts_csv, query)
    }

    pub async fn list_from_file<T>(
        &self,
        accounts_csv: T,
        query: &AccountListQuery,
    ) -> Result<Vec<AccountSummary>, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.chart_usecase.list_from_file(accounts_csv, query).await
    }

    /// Chart as pretty-printed JSON with camelCase keys.
    pub fn to_json(&self, chart: &ChartOfAccounts) -> Result<String, ServerError> {
        self.printer.print_json(chart)
    }
}
