use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{
    entities::{AccountClass, AccountType, ConsolidatedRate, IncomeBalance},
    errors::InvalidAccountAttribute,
};

// Account attributes are exported with their display labels ("Begin Total",
// "Balance Sheet", ...), not with the enum variant names.

macro_rules! impl_label_model {
    ($model:ident, $entity:ident, $attribute:literal, { $($label:literal => $variant:ident),+ $(,)? }) => {
        #[derive(Debug)]
        pub(crate) struct $model(pub(crate) $entity);

        impl FromStr for $model {
            type Err = ServerError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($label => Ok($model($entity::$variant)),)+
                    _ => Err(InvalidAccountAttribute::new($attribute, s)),
                }
            }
        }

        impl From<$model> for $entity {
            fn from(model: $model) -> Self {
                model.0
            }
        }
    };
}

impl_label_model!(AccountTypeModel, AccountType, "account type", {
    "Posting" => Posting,
    "Begin Total" => BeginTotal,
    "End Total" => EndTotal,
    "Heading" => Heading,
});

impl_label_model!(AccountClassModel, AccountClass, "account class", {
    "Asset" => Asset,
    "Liability" => Liability,
    "Equity" => Equity,
    "Revenue" => Revenue,
    "Expense" => Expense,
});

impl_label_model!(IncomeBalanceModel, IncomeBalance, "income/balance", {
    "Balance Sheet" => BalanceSheet,
    "Income Statement" => IncomeStatement,
});

impl_label_model!(ConsolidatedRateModel, ConsolidatedRate, "consolidated rate", {
    "Average" => Average,
    "Current" => Current,
    "Historical" => Historical,
});

#[derive(Debug)]
pub(crate) struct BooleanModel(pub(crate) bool);

impl FromStr for BooleanModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(BooleanModel(true)),
            "false" | "no" | "0" => Ok(BooleanModel(false)),
            _ => Err(InvalidAccountAttribute::new("boolean", s)),
        }
    }
}

impl From<BooleanModel> for bool {
    fn from(model: BooleanModel) -> Self {
        model.0
    }
}

/// Parses a CSV cell, treating a blank cell as absent.
pub(crate) fn parse_optional<M, T>(raw: &str) -> Result<Option<T>, ServerError>
where
    M: FromStr<Err = ServerError> + Into<T>,
{
    match raw.trim() {
        "" => Ok(None),
        s => Ok(Some(M::from_str(s)?.into())),
    }
}
