/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
/// Error body, pagination and health models
pub mod common;
/// Fee models
pub mod fees;
/// HTTP transport with optional rate limiting
pub mod http;
/// Ledger account and entry models
pub mod ledger;
/// Detailed response wrapper
pub mod response;
/// Settlement action models
pub mod settlement;
/// Optional, nullable and extensible field representations
pub mod types;

pub use common::*;
pub use fees::*;
pub use ledger::*;
pub use response::*;
pub use settlement::*;
pub use types::*;
