/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::constants::DEFAULT_DB_MAX_CONNECTIONS;
use crate::error::AppError;
use crate::storage::config::DatabaseConfig;
use crate::storage::environment::Environment;
use crate::storage::registry::{EmplacementCheck, default_registry, verify_expected_data};
use crate::utils::config::{get_env_or_default, get_env_required};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

/// Opens the PostgreSQL pool used to count emplacement rows
///
/// # Arguments
/// * `config` - Connection URL and pool size
///
/// # Returns
/// * `Ok(PgPool)` - Connected pool
/// * `Err(AppError::Db)` - If the database cannot be reached
pub async fn create_connection_pool(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    info!(
        "Connecting to the test data database ({} connections max)",
        config.max_connections
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    info!("Test data database reachable");
    Ok(pool)
}

/// Reads `DATABASE_URL` (required) and `DATABASE_MAX_CONNECTIONS`
pub fn create_database_config_from_env() -> Result<DatabaseConfig, AppError> {
    dotenv::dotenv().ok();
    let url = get_env_required("DATABASE_URL")?;
    let max_connections =
        get_env_or_default("DATABASE_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS);
    if max_connections == 0 {
        return Err(AppError::Config(
            "DATABASE_MAX_CONNECTIONS must be greater than zero".to_string(),
        ));
    }

    Ok(DatabaseConfig {
        url,
        max_connections,
    })
}

/// Connects with `config` and checks the built-in emplacements for `environment`
///
/// The pool is closed before returning.
pub async fn verify_database(
    config: &DatabaseConfig,
    environment: Environment,
) -> Result<Vec<EmplacementCheck>, AppError> {
    let pool = create_connection_pool(config).await?;
    let checks = verify_expected_data(&pool, default_registry(), environment).await;
    pool.close().await;

    for check in checks.iter().filter(|c| !c.is_ok()) {
        warn!("{} ({}): {}", check.table, check.model, check.status);
    }
    Ok(checks)
}
