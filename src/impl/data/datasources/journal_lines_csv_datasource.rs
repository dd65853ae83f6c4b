use std::str::FromStr as _;

use fractic_server_error::ServerError;

use crate::{
    data::models::{accounting_amount_model::AccountingAmountModel, iso_date_model::ISODateModel},
    entities::JournalLine,
    errors::{InvalidCsv, InvalidCsvContent},
};

pub(crate) trait JournalLinesCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<JournalLine>, ServerError>;
}

pub(crate) struct JournalLinesCsvDatasourceImpl;

impl JournalLinesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl JournalLinesCsvDatasource for JournalLinesCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<JournalLine>, ServerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .enumerate()
            .map(|(i, r)| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_account_number = r.get(0).unwrap_or("").trim();
                    let raw_posting_date = r.get(1).unwrap_or("");
                    let raw_amount = r.get(2).unwrap_or("0");

                    if raw_account_number.is_empty() {
                        return Err(InvalidCsvContent::new(&format!(
                            "missing account number in journal line {}",
                            i + 1
                        )));
                    }

                    // Parse.
                    let posting_date = ISODateModel::from_str(raw_posting_date)?;
                    let amount = AccountingAmountModel::from_str(raw_amount)?;

                    // Build.
                    Ok(JournalLine {
                        account_number: raw_account_number.into(),
                        posting_date: posting_date.into(),
                        amount: amount.into(),
                    })
                })
            })
            .collect()
    }
}
