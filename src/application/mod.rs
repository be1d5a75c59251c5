/// Token authentication
pub mod auth;
/// Blocking client
pub mod blocking;
/// Async client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Service implementations on the async client
pub mod services;
