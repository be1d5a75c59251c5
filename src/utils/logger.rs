/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global `tracing` subscriber
///
/// The level is read from the `LOGLEVEL` environment variable
/// (`ERROR`, `WARN`, `INFO`, `DEBUG` or `TRACE`, default `INFO`).
/// Calling it more than once is harmless: only the first call installs a
/// subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = level_from_env();
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::debug!("Global subscriber already installed, keeping it");
            return;
        }
        tracing::debug!("Log level set to: {}", level);
    });
}

/// Resolves the log level from `LOGLEVEL`
#[must_use]
pub fn level_from_env() -> Level {
    let raw = env::var("LOGLEVEL").unwrap_or_else(|_| "INFO".to_string());
    parse_level(&raw)
}

fn parse_level(raw: &str) -> Level {
    match raw.trim().to_uppercase().as_str() {
        "ERROR" => Level::ERROR,
        "WARN" => Level::WARN,
        "DEBUG" => Level::DEBUG,
        "TRACE" => Level::TRACE,
        _ => Level::INFO,
    }
}
