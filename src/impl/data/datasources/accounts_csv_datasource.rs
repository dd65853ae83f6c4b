use std::str::FromStr as _;

use fractic_server_error::ServerError;

use crate::{
    data::models::account_attributes_model::{
        parse_optional, AccountClassModel, AccountTypeModel, BooleanModel, ConsolidatedRateModel,
        IncomeBalanceModel,
    },
    entities::{Account, AccountType},
    errors::{InvalidCsv, InvalidCsvContent},
};

pub(crate) trait AccountsCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<Account>, ServerError>;
}

pub(crate) struct AccountsCsvDatasourceImpl;

impl AccountsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl AccountsCsvDatasource for AccountsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Account>, ServerError> {
        // Trailing optional columns may be left off entirely.
        csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(s.as_bytes())
            .records()
            .enumerate()
            .map(|(i, r)| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_number = r.get(0).unwrap_or("").trim();
                    let raw_name = r.get(1).unwrap_or("").trim();
                    let raw_type = r.get(2).unwrap_or("");
                    let raw_class = r.get(3).unwrap_or("");
                    let raw_income_balance = r.get(4).unwrap_or("");
                    let raw_category_id = r.get(5).unwrap_or("").trim();
                    let raw_subcategory_id = r.get(6).unwrap_or("").trim();
                    let raw_consolidated_rate = r.get(7).unwrap_or("");
                    let raw_direct_posting = r.get(8).unwrap_or("");
                    let raw_active = r.get(9).unwrap_or("");

                    if raw_number.is_empty() {
                        return Err(InvalidCsvContent::new(&format!(
                            "missing account number in row {}",
                            i + 1
                        )));
                    }

                    // Parse.
                    let account_type: AccountType =
                        parse_optional::<AccountTypeModel, _>(raw_type)?
                            .unwrap_or(AccountType::Posting);
                    let class = parse_optional::<AccountClassModel, _>(raw_class)?;
                    let income_balance =
                        parse_optional::<IncomeBalanceModel, _>(raw_income_balance)?;
                    let consolidated_rate =
                        parse_optional::<ConsolidatedRateModel, _>(raw_consolidated_rate)?;
                    let direct_posting: bool =
                        parse_optional::<BooleanModel, _>(raw_direct_posting)?.unwrap_or(false);
                    let active: bool =
                        parse_optional::<BooleanModel, _>(raw_active)?.unwrap_or(true);

                    // Build.
                    Ok(Account {
                        number: raw_number.into(),
                        name: raw_name.into(),
                        account_type,
                        class,
                        income_balance,
                        account_category_id: non_empty(raw_category_id),
                        account_subcategory_id: non_empty(raw_subcategory_id),
                        consolidated_rate,
                        direct_posting,
                        active,
                    })
                })
            })
            .collect()
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
