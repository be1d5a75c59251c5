/// Fee operations on the async client
pub mod fee_service;
/// Health check on the async client
pub mod health_service;
/// Ledger operations on the async client
pub mod ledger_service;
/// Settlement operations on the async client
pub mod settlement_service;

pub use crate::application::interfaces::fees::*;
pub use crate::application::interfaces::health::*;
pub use crate::application::interfaces::ledger::*;
pub use crate::application::interfaces::settlement::*;
