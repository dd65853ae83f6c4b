use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidAccountingAmount;

/// Amount as written in a journal export: optional thousands separators, and
/// negatives either signed or in parentheses.
#[derive(Debug)]
pub(crate) struct AccountingAmountModel(pub f64);

impl FromStr for AccountingAmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(',', "");
        let raw = raw.trim();
        let is_negative = raw.starts_with('(') && raw.ends_with(')');
        let numeric_part = raw.trim_matches(|c| c == '(' || c == ')').trim();
        let amount = numeric_part
            .parse::<f64>()
            .map_err(|_| InvalidAccountingAmount::new(s))?;
        Ok(AccountingAmountModel(if is_negative { -amount } else { amount }))
    }
}

impl From<AccountingAmountModel> for f64 {
    fn from(model: AccountingAmountModel) -> Self {
        model.0
    }
}
