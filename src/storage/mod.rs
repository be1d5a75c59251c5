/// Module containing database configuration structures
pub mod config;
/// Emplacement marker trait and its implementations for the API models
pub mod emplacement;
/// Deployment environments
pub mod environment;
/// Emplacement registry and verification
pub mod registry;
/// Connection helpers
pub mod utils;
