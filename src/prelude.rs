/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Ledger API Client Prelude
//!
//! Brings the commonly used types and traits into scope with one import.
//!
//! ## Usage
//!
//! ```ignore
//! use ledger_api_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let health = client.get_health().await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// CLIENTS
// ============================================================================

/// Async and blocking clients
pub use crate::application::blocking::BlockingClient;
pub use crate::application::client::Client;

/// Authentication header
pub use crate::application::auth::Auth;

/// Client-side rate limiter
pub use crate::application::rate_limiter::RateLimiter;

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

pub use crate::application::services::{
    FeeService, HealthService, LedgerService, SettlementService,
};

// ============================================================================
// OPERATIONS
// ============================================================================

/// Endpoint trait
pub use crate::api::Endpoint;

pub use crate::api::fees::{GetFeeSummary, GetFeeSummaryResponse, ListFees, ListFeesResponse};
pub use crate::api::health::{GetHealth, GetHealthResponse};
pub use crate::api::ledger_accounts::{
    CreateLedgerAccount, CreateLedgerAccountResponse, GetLedgerAccount, GetLedgerAccountResponse,
    ListLedgerAccounts, ListLedgerAccountsResponse, ListLedgerEntries, ListLedgerEntriesResponse,
};
pub use crate::api::settlement_actions::{
    CancelSettlementAction, CancelSettlementActionResponse, CreateSettlementAction,
    CreateSettlementActionResponse, ListSettlementActions, ListSettlementActionsResponse,
};

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::common::{ApiError, ApiHealth, ApiPage};
pub use crate::model::fees::{ApiFee, ApiFeeLine, ApiFeeSummary, ApiFeeType};
pub use crate::model::ledger::{
    ApiAccountStatus, ApiCreateLedgerAccount, ApiEntryDirection, ApiLedgerAccount,
    ApiLedgerAccountType, ApiLedgerEntry,
};
pub use crate::model::response::Response;
pub use crate::model::settlement::{
    ApiSettlementAction, ApiSettlementActionRequest, ApiSettlementActionStatus,
    ApiSettlementActionType,
};
pub use crate::model::types::{AdditionalProperties, Nullable};

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

pub use crate::presentation::{
    fee_summary_table, ledger_accounts_table, settlement_actions_table,
};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::id::{idempotency_key, is_valid_idempotency_key};
pub use crate::utils::logger::setup_logger;

// ============================================================================
// STORAGE
// ============================================================================

pub use crate::storage::config::DatabaseConfig;
pub use crate::storage::emplacement::{DEFAULT_ENVIRONMENTS, Emplacement, EmplacementDescriptor};
pub use crate::storage::environment::Environment;
pub use crate::storage::registry::{
    EmplacementCheck, EmplacementRegistry, EmplacementStatus, RowCounter, default_registry,
    verify_expected_data,
};
pub use crate::storage::utils::{
    create_connection_pool, create_database_config_from_env, verify_database,
};

// ============================================================================
// CONSTANTS
// ============================================================================

pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

pub use chrono::{DateTime, Utc};
pub use rust_decimal::Decimal;
