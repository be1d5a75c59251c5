/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Emplacements
//!
//! An emplacement ties an API model to the database table holding its test
//! data and lists the deployment environments where that table is expected
//! to be populated. Implementations are markers: they set the constants and
//! keep every default.

use crate::error::AppError;
use crate::model::fees::{ApiFee, ApiFeeSummary};
use crate::model::ledger::{ApiLedgerAccount, ApiLedgerEntry};
use crate::model::settlement::ApiSettlementAction;
use crate::storage::environment::Environment;
use once_cell::sync::Lazy;
use pretty_simple_display::DisplaySimple;
use regex::Regex;
use serde::Serialize;

/// Environments expected to carry test data unless an emplacement says otherwise
pub const DEFAULT_ENVIRONMENTS: &[Environment] = &[
    Environment::Local,
    Environment::Development,
    Environment::Staging,
];

static TABLE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z_][a-z0-9_]{0,62}(\.[a-z_][a-z0-9_]{0,62})?$").expect("valid table name regex")
});

/// Checks that `table` is a plain, optionally schema-qualified, lowercase SQL identifier
pub fn validate_table_name(table: &str) -> Result<(), AppError> {
    if TABLE_NAME.is_match(table) {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!("invalid table name: {table:?}")))
    }
}

/// Marker associating a model with its table of expected test data
pub trait Emplacement {
    /// Name of the model
    const MODEL: &'static str;
    /// Table holding the model's rows
    const TABLE: &'static str;
    /// Environments where the table must hold test data
    const ENVIRONMENTS: &'static [Environment] = DEFAULT_ENVIRONMENTS;
    /// Rows needed to consider the table populated
    const MIN_ROWS: u64 = 1;

    /// True when test data is expected in `environment`
    fn expects_data(environment: Environment) -> bool {
        Self::ENVIRONMENTS.contains(&environment)
    }

    /// Runtime description of this emplacement
    fn descriptor() -> EmplacementDescriptor {
        EmplacementDescriptor {
            model: Self::MODEL,
            table: Self::TABLE,
            environments: Self::ENVIRONMENTS,
            min_rows: Self::MIN_ROWS,
        }
    }
}

/// Runtime form of an [`Emplacement`]
#[derive(Debug, DisplaySimple, Clone, PartialEq, Eq, Serialize)]
pub struct EmplacementDescriptor {
    /// Name of the model
    pub model: &'static str,
    /// Table holding the model's rows
    pub table: &'static str,
    /// Environments where the table must hold test data
    pub environments: &'static [Environment],
    /// Rows needed to consider the table populated
    pub min_rows: u64,
}

impl EmplacementDescriptor {
    /// True when test data is expected in `environment`
    #[must_use]
    pub fn expects_data(&self, environment: Environment) -> bool {
        self.environments.contains(&environment)
    }
}

impl Emplacement for ApiFee {
    const MODEL: &'static str = "ApiFee";
    const TABLE: &'static str = "fees";
}

impl Emplacement for ApiFeeSummary {
    const MODEL: &'static str = "ApiFeeSummary";
    const TABLE: &'static str = "fee_summaries";
}

impl Emplacement for ApiLedgerAccount {
    const MODEL: &'static str = "ApiLedgerAccount";
    const TABLE: &'static str = "ledger_accounts";
}

impl Emplacement for ApiLedgerEntry {
    const MODEL: &'static str = "ApiLedgerEntry";
    const TABLE: &'static str = "ledger_entries";
}

impl Emplacement for ApiSettlementAction {
    const MODEL: &'static str = "ApiSettlementAction";
    const TABLE: &'static str = "settlement_actions";
    const ENVIRONMENTS: &'static [Environment] = &[Environment::Local, Environment::Development];
}
