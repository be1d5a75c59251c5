/// Fee service interface
pub mod fees;
/// Health service interface
pub mod health;
/// Ledger service interface
pub mod ledger;
/// Settlement service interface
pub mod settlement;
