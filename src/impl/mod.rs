// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod accounts_csv_datasource;
        pub(crate) mod journal_lines_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod account_attributes_model;
        pub(crate) mod accounting_amount_model;
        pub(crate) mod iso_date_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod ledger_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod account;
        pub(crate) mod chart_of_accounts;
        pub(crate) mod chart_query;
        pub(crate) mod ledger_records;
        pub(crate) mod leveled_account;
        pub(crate) mod transaction_aggregate;
    }
    pub(crate) mod logic {
        pub(crate) mod journal_aggregator;
        pub(crate) mod level_annotator;
        pub(crate) mod number_ordering;
        pub(crate) mod totals_aggregator;
    }
    pub(crate) mod repositories {
        pub(crate) mod ledger_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod chart_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod chart_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::account::*;
        pub use crate::domain::entities::chart_of_accounts::*;
        pub use crate::domain::entities::chart_query::*;
        pub use crate::domain::entities::ledger_records::*;
        pub use crate::domain::entities::leveled_account::*;
        pub use crate::domain::entities::transaction_aggregate::*;
    }

    pub mod chart {
        pub use crate::domain::logic::level_annotator::annotate;
        pub use crate::domain::logic::totals_aggregator::{
            build_chart_of_accounts, compute_total, TotalsAggregator,
        };
    }
}
