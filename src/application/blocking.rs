/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Blocking client for the ledger API
//!
//! Same operations and status handling as the async
//! [`Client`](crate::application::client::Client), for callers without an
//! async runtime. Do not use it from inside one: reqwest's blocking client
//! runs its own runtime on a background thread.

use crate::api::{Endpoint, build_response};
use crate::application::client::{client_headers, endpoint_url, redirect_policy, validate_base_url};
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{HttpRequest, build_headers, make_blocking_request};
use crate::model::response::Response;
use reqwest::blocking::Client as BlockingHttpClient;
use reqwest::header::HeaderMap;
use std::sync::Arc;
use tracing::debug;

/// Blocking client for the ledger API
#[derive(Debug, Clone)]
pub struct BlockingClient {
    http_client: BlockingHttpClient,
    config: Arc<Config>,
    headers: HeaderMap,
    rate_limiter: Option<RateLimiter>,
}

impl BlockingClient {
    /// Creates a blocking client from configuration
    pub fn new(config: Config) -> Result<Self, AppError> {
        validate_base_url(&config.rest_api.base_url)?;
        let headers = client_headers(&config)?;
        let rate_limiter = RateLimiter::from_config(&config.rate_limiter)?;

        let http_client = BlockingHttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(config.rest_api.timeout_duration())
            .danger_accept_invalid_certs(!config.rest_api.verify_ssl)
            .redirect(redirect_policy(config.rest_api.follow_redirects))
            .build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
            headers,
            rate_limiter,
        })
    }

    /// Current configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sends `endpoint` and returns the full response
    ///
    /// See [`Client::send_detailed`](crate::application::client::Client::send_detailed).
    pub fn send_detailed<E: Endpoint>(&self, endpoint: &E) -> Result<Response<E::Output>, AppError> {
        endpoint.validate()?;
        let body = endpoint.body()?;
        let query = endpoint.query();
        let headers = build_headers(&self.headers, &endpoint.headers(), body.is_some())?;

        debug!("Calling {} (blocking)", E::OPERATION_ID);
        let raw = make_blocking_request(
            &self.http_client,
            self.rate_limiter.as_ref(),
            HttpRequest {
                method: endpoint.method(),
                url: endpoint_url(&self.config.rest_api.base_url, &endpoint.path()),
                headers,
                query: &query,
                body: body.as_ref(),
            },
        )?;

        build_response(
            endpoint,
            raw,
            self.config.rest_api.raise_on_unexpected_status,
        )
    }

    /// Sends `endpoint` and returns only the parsed body
    pub fn send<E: Endpoint>(&self, endpoint: &E) -> Result<Option<E::Output>, AppError> {
        Ok(self.send_detailed(endpoint)?.parsed)
    }
}
