/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! # Ledger API Client
//!
//! Typed Rust client for the ledger, fees and settlement REST API.
//!
//! Every REST operation is represented by a request type implementing
//! [`api::Endpoint`]. The endpoint knows its URL template, its parameters and
//! which model each documented status code decodes into. Requests are sent
//! through either the async [`application::client::Client`] or the
//! [`application::blocking::BlockingClient`], each offering a parsed call
//! (`send`) and a detailed call (`send_detailed`) that also returns status
//! code, headers and raw content.
//!
//! ## Example
//!
//! ```ignore
//! use ledger_api_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let account = client.get_ledger_account("acc_123").await?;
//! match account {
//!     Some(GetLedgerAccountResponse::Ok(account)) => println!("{account}"),
//!     Some(GetLedgerAccountResponse::NotFound(err)) => println!("missing: {}", err.message),
//!     None => println!("undocumented status"),
//! }
//! ```
//!
//! The [`storage`] module carries the emplacement registry: which tables are
//! expected to hold test data in each deployment environment.

/// REST operations and the endpoint trait
pub mod api;
/// Client configuration, HTTP clients and service traits
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Schema models and transport helpers
pub mod model;
/// Table renderings for terminal output
pub mod presentation;
/// Commonly used re-exports
pub mod prelude;
/// Emplacement registry and database verification
pub mod storage;
/// Environment and logging utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
