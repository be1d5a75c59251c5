/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Async client for the ledger API
//!
//! The client owns the connection pool, the authentication header and the
//! optional rate limiter. Operations are sent with [`Client::send`] (parsed
//! body only) or [`Client::send_detailed`] (status, headers, raw content and
//! parsed body).
//!
//! # Example
//! ```ignore
//! use ledger_api_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let response = client.send_detailed(&GetLedgerAccount::new("acc_1")).await?;
//! println!("{} -> {:?}", response.status_code, response.parsed);
//! ```

use crate::api::{Endpoint, build_response};
use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{HttpRequest, build_headers, make_http_request};
use crate::model::response::Response;
use reqwest::Client as HttpInternalClient;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Async client for the ledger API
#[derive(Debug, Clone)]
pub struct Client {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    headers: HeaderMap,
    rate_limiter: Option<RateLimiter>,
}

impl Client {
    /// Creates a client from configuration
    ///
    /// No request is sent; the API is contacted on the first operation.
    ///
    /// # Returns
    /// * `Ok(Client)` - Ready to use client
    /// * `Err(AppError)` - If the base URL, headers or rate limiter settings are invalid
    pub fn new(config: Config) -> Result<Self, AppError> {
        validate_base_url(&config.rest_api.base_url)?;
        let headers = client_headers(&config)?;
        let rate_limiter = RateLimiter::from_config(&config.rate_limiter)?;

        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(config.rest_api.timeout_duration())
            .danger_accept_invalid_certs(!config.rest_api.verify_ssl)
            .redirect(redirect_policy(config.rest_api.follow_redirects))
            .build()?;

        info!(
            "Ledger API client ready for {} ({})",
            config.rest_api.base_url, config.environment
        );

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

    /// Base URL operations are resolved against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.rest_api.base_url
    }

    /// Whether undocumented statuses fail the call
    #[must_use]
    pub fn raise_on_unexpected_status(&self) -> bool {
        self.config.rest_api.raise_on_unexpected_status
    }

    /// Returns a copy of this client that also sends `headers`
    pub fn with_headers<I, K, V>(&self, headers: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut config = (*self.config).clone();
        config
            .rest_api
            .headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        Self::new(config)
    }

    /// Returns a copy of this client with a different timeout in seconds
    pub fn with_timeout(&self, timeout_secs: u64) -> Result<Self, AppError> {
        let mut config = (*self.config).clone();
        config.rest_api.timeout = timeout_secs;
        Self::new(config)
    }

    /// Sends `endpoint` and returns the full response
    ///
    /// # Returns
    /// * `Ok(Response)` - `parsed` is set for documented statuses
    /// * `Err(AppError::UnexpectedStatus)` - Undocumented status with `raise_on_unexpected_status` set
    /// * `Err(AppError)` - Invalid parameters, transport or decoding failure
    pub async fn send_detailed<E: Endpoint>(
        &self,
        endpoint: &E,
    ) -> Result<Response<E::Output>, AppError> {
        endpoint.validate()?;
        let body = endpoint.body()?;
        let query = endpoint.query();
        let headers = build_headers(&self.headers, &endpoint.headers(), body.is_some())?;

        debug!("Calling {}", E::OPERATION_ID);
        let raw = make_http_request(
            &self.http_client,
            self.rate_limiter.as_ref(),
            HttpRequest {
                method: endpoint.method(),
                url: endpoint_url(self.base_url(), &endpoint.path()),
                headers,
                query: &query,
                body: body.as_ref(),
            },
        )
        .await?;

        build_response(endpoint, raw, self.raise_on_unexpected_status())
    }

    /// Sends `endpoint` and returns only the parsed body
    ///
    /// `Ok(None)` means the server answered with an undocumented status and
    /// the client does not raise on those.
    pub async fn send<E: Endpoint>(&self, endpoint: &E) -> Result<Option<E::Output>, AppError> {
        Ok(self.send_detailed(endpoint).await?.parsed)
    }
}

/// Joins the base URL and an operation path with exactly one slash
pub(crate) fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Rejects base URLs reqwest could not resolve paths against
pub(crate) fn validate_base_url(base_url: &str) -> Result<(), AppError> {
    let url = reqwest::Url::parse(base_url)
        .map_err(|e| AppError::Config(format!("invalid base url {base_url:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::Config(format!(
            "unsupported scheme {other:?} in base url"
        ))),
    }
}

/// Client-wide headers: configured extras plus authentication
pub(crate) fn client_headers(config: &Config) -> Result<HeaderMap, AppError> {
    let mut headers = headers_from_map(&config.rest_api.headers)?;
    Auth::new(config).apply(&mut headers)?;
    Ok(headers)
}

fn headers_from_map(map: &BTreeMap<String, String>) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::with_capacity(map.len());
    for (name, value) in map {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AppError::Config(format!("invalid header name {name:?}: {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| AppError::Config(format!("invalid value for header {name:?}: {e}")))?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

pub(crate) fn redirect_policy(follow_redirects: bool) -> Policy {
    if follow_redirects {
        Policy::default()
    } else {
        Policy::none()
    }
}
