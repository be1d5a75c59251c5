/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::fees::{ApiFee, ApiFeeSummary};
use crate::model::ledger::{ApiLedgerAccount, ApiLedgerEntry};
use crate::model::settlement::ApiSettlementAction;
use crate::storage::emplacement::{Emplacement, EmplacementDescriptor, validate_table_name};
use crate::storage::environment::Environment;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use pretty_simple_display::DisplaySimple;
use serde::Serialize;
use sqlx::PgPool;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Set of emplacements, keyed by table
#[derive(Debug, Clone, Default)]
pub struct EmplacementRegistry {
    entries: BTreeMap<&'static str, EmplacementDescriptor>,
}

impl EmplacementRegistry {
    /// Creates an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the emplacement of model `E`
    pub fn register<E: Emplacement>(&mut self) -> Result<(), AppError> {
        self.register_descriptor(E::descriptor())
    }

    /// Registers a descriptor
    ///
    /// Registering the same model and table twice is a no-op. Claiming a
    /// table already registered for another model is an error.
    pub fn register_descriptor(&mut self, descriptor: EmplacementDescriptor) -> Result<(), AppError> {
        validate_table_name(descriptor.table)?;
        if let Some(existing) = self.entries.get(descriptor.table) {
            if existing.model != descriptor.model {
                return Err(AppError::InvalidInput(format!(
                    "table {} already registered for {}",
                    descriptor.table, existing.model
                )));
            }
        }
        self.entries.insert(descriptor.table, descriptor);
        Ok(())
    }

    /// Descriptor registered for `table`
    #[must_use]
    pub fn find(&self, table: &str) -> Option<&EmplacementDescriptor> {
        self.entries.get(table)
    }

    /// Descriptors of the tables expected to hold data in `environment`, sorted by table
    #[must_use]
    pub fn expected_tables(&self, environment: Environment) -> Vec<&EmplacementDescriptor> {
        self.entries
            .values()
            .filter(|d| d.expects_data(environment))
            .collect()
    }

    /// Iterates over every descriptor, sorted by table
    pub fn iter(&self) -> impl Iterator<Item = &EmplacementDescriptor> {
        self.entries.values()
    }

    /// Number of registered emplacements
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static DEFAULT_REGISTRY: Lazy<EmplacementRegistry> = Lazy::new(|| {
    let mut registry = EmplacementRegistry::new();
    let descriptors = [
        ApiFee::descriptor(),
        ApiFeeSummary::descriptor(),
        ApiLedgerAccount::descriptor(),
        ApiLedgerEntry::descriptor(),
        ApiSettlementAction::descriptor(),
    ];
    for descriptor in descriptors {
        if let Err(e) = registry.register_descriptor(descriptor) {
            warn!("Skipping built-in emplacement: {e}");
        }
    }
    registry
});

/// Registry holding the emplacements of every model shipped with the crate
#[must_use]
pub fn default_registry() -> &'static EmplacementRegistry {
    &DEFAULT_REGISTRY
}

/// Source of table row counts
#[async_trait]
pub trait RowCounter: Send + Sync {
    /// Number of rows in `table`
    async fn count_rows(&self, table: &str) -> Result<u64, AppError>;
}

#[async_trait]
impl RowCounter for PgPool {
    async fn count_rows(&self, table: &str) -> Result<u64, AppError> {
        // Identifiers cannot be bound, so the name is checked before interpolation
        validate_table_name(table)?;
        let sql = format!("SELECT COUNT(*) FROM {table}");
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(self).await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}

/// Outcome of checking one emplacement
#[derive(Debug, DisplaySimple, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum EmplacementStatus {
    /// Data expected and present
    Satisfied,
    /// Data expected but fewer rows than required
    Missing,
    /// No data expected in this environment; the table was not queried
    NotExpected,
    /// The table could not be counted
    Error(String),
}

/// Result of checking one table
#[derive(Debug, DisplaySimple, Clone, PartialEq, Eq, Serialize)]
pub struct EmplacementCheck {
    /// Model name
    pub model: &'static str,
    /// Table name
    pub table: &'static str,
    /// Whether data was expected
    pub expected: bool,
    /// Rows found, when the table was queried successfully
    pub rows: Option<u64>,
    /// Outcome
    pub status: EmplacementStatus,
}

impl EmplacementCheck {
    /// True unless expected data is missing or the table could not be counted
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(
            self.status,
            EmplacementStatus::Satisfied | EmplacementStatus::NotExpected
        )
    }
}

/// Checks every emplacement of `registry` against `counter` for `environment`
///
/// Tables not expected in `environment` are reported without being queried.
/// A failure to count one table is recorded on that table's check and does
/// not stop the others.
pub async fn verify_expected_data<C: RowCounter + ?Sized>(
    counter: &C,
    registry: &EmplacementRegistry,
    environment: Environment,
) -> Vec<EmplacementCheck> {
    let mut checks = Vec::with_capacity(registry.len());

    for descriptor in registry.iter() {
        let expected = descriptor.expects_data(environment);
        if !expected {
            checks.push(EmplacementCheck {
                model: descriptor.model,
                table: descriptor.table,
                expected,
                rows: None,
                status: EmplacementStatus::NotExpected,
            });
            continue;
        }

        let check = match counter.count_rows(descriptor.table).await {
            Ok(rows) => {
                let status = if rows >= descriptor.min_rows {
                    EmplacementStatus::Satisfied
                } else {
                    warn!(
                        "{} has {} rows in {}, expected at least {}",
                        descriptor.table, rows, environment, descriptor.min_rows
                    );
                    EmplacementStatus::Missing
                };
                EmplacementCheck {
                    model: descriptor.model,
                    table: descriptor.table,
                    expected,
                    rows: Some(rows),
                    status,
                }
            }
            Err(e) => {
                warn!("Could not count rows of {}: {}", descriptor.table, e);
                EmplacementCheck {
                    model: descriptor.model,
                    table: descriptor.table,
                    expected,
                    rows: None,
                    status: EmplacementStatus::Error(e.to_string()),
                }
            }
        };
        checks.push(check);
    }

    let failing = checks.iter().filter(|c| !c.is_ok()).count();
    info!(
        "Checked {} emplacements for {}: {} failing",
        checks.len(),
        environment,
        failing
    );
    checks
}
