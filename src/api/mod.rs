/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! REST operations
//!
//! One request type per operation. Each implements [`Endpoint`], which holds
//! everything that differs between operations: method, URL template,
//! parameters and the status code to model mapping. Sending, decoding and
//! the unexpected-status policy are shared by the clients.

use crate::error::AppError;
use crate::model::http::RawResponse;
use crate::model::response::Response;
use chrono::{DateTime, SecondsFormat, Utc};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

/// Fee operations
pub mod fees;
/// Health check operation
pub mod health;
/// Ledger account and entry operations
pub mod ledger_accounts;
/// Settlement action operations
pub mod settlement_actions;

/// Characters escaped inside a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A single REST operation
pub trait Endpoint: Send + Sync {
    /// Decoded body, usually an enum with one variant per documented status
    type Output: Send;

    /// The operationId in the API document
    const OPERATION_ID: &'static str;

    /// HTTP method
    fn method(&self) -> Method;

    /// Path relative to the base URL, path parameters already encoded
    fn path(&self) -> String;

    /// Query parameters; unset parameters are left out
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Operation specific headers
    fn headers(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// JSON body
    fn body(&self) -> Result<Option<Value>, AppError> {
        Ok(None)
    }

    /// Checks parameters before anything is sent
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }

    /// Decodes `content` for a documented `status`, `None` otherwise
    fn parse(&self, status: StatusCode, content: &[u8]) -> Result<Option<Self::Output>, AppError>;
}

/// Percent-encodes a path parameter so it stays a single segment
#[must_use]
pub fn encode_path(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Decodes a JSON body
pub fn decode<T: DeserializeOwned>(content: &[u8]) -> Result<T, AppError> {
    Ok(serde_json::from_slice(content)?)
}

/// Formats a timestamp for a query string
#[must_use]
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Appends `name=value` to `query` when `value` is set
pub fn push_query<T: ToString>(
    query: &mut Vec<(&'static str, String)>,
    name: &'static str,
    value: Option<T>,
) {
    if let Some(v) = value {
        query.push((name, v.to_string()));
    }
}

/// Rejects empty path parameters
pub fn require_path_param(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{name} must not be empty")));
    }
    Ok(())
}

/// Applies the status mapping of `endpoint` to a raw response
///
/// Documented statuses are decoded. For any other status the call fails with
/// [`AppError::UnexpectedStatus`] when `raise_on_unexpected_status` is set,
/// otherwise the response is returned with `parsed = None`.
pub fn build_response<E: Endpoint>(
    endpoint: &E,
    raw: RawResponse,
    raise_on_unexpected_status: bool,
) -> Result<Response<E::Output>, AppError> {
    let parsed = endpoint.parse(raw.status, &raw.content)?;

    if parsed.is_none() {
        if raise_on_unexpected_status {
            error!(
                "{} returned undocumented status {}: {}",
                E::OPERATION_ID,
                raw.status,
                String::from_utf8_lossy(&raw.content)
            );
            return Err(AppError::UnexpectedStatus {
                status: raw.status,
                content: raw.content,
            });
        }
        debug!(
            "{} returned undocumented status {}, leaving body unparsed",
            E::OPERATION_ID,
            raw.status
        );
    }

    Ok(Response::new(raw.status, raw.headers, raw.content, parsed))
}
