/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::rate_limiter::RateLimiter;
use crate::error::AppError;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::debug;

/// Status, headers and body of a response, before any decoding
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub content: Vec<u8>,
}

/// Everything needed to send one request
#[derive(Debug, Clone)]
pub struct HttpRequest<'a> {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Headers, authentication included
    pub headers: HeaderMap,
    /// Query parameters
    pub query: &'a [(&'static str, String)],
    /// JSON body
    pub body: Option<&'a Value>,
}

/// Builds the header map for a request
///
/// Starts from the JSON `Accept`/`Content-Type` pair, then layers the
/// client-wide headers and finally the operation headers, later values
/// replacing earlier ones.
pub fn build_headers(
    client_headers: &HeaderMap,
    operation_headers: &[(&'static str, String)],
    has_body: bool,
) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if has_body {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    for (name, value) in client_headers {
        headers.insert(name.clone(), value.clone());
    }
    for (name, value) in operation_headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AppError::InvalidInput(format!("invalid header name {name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| AppError::InvalidInput(format!("invalid value for header {name}: {e}")))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

/// Sends a request with the async client
///
/// Waits on the rate limiter first when one is configured. The response is
/// returned whatever its status: status handling belongs to the caller.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Optional limiter to wait on before sending
/// * `request` - Method, URL, headers, query and body
///
/// # Returns
///
/// * `Ok(RawResponse)` - Status, headers and body
/// * `Err(AppError::Http)` - If the request could not be sent or the body read
pub async fn make_http_request(
    client: &reqwest::Client,
    rate_limiter: Option<&RateLimiter>,
    request: HttpRequest<'_>,
) -> Result<RawResponse, AppError> {
    if let Some(limiter) = rate_limiter {
        limiter.wait().await;
    }

    debug!("{} {}", request.method, request.url);

    let mut builder = client
        .request(request.method, &request.url)
        .headers(request.headers);
    if !request.query.is_empty() {
        builder = builder.query(request.query);
    }
    if let Some(body) = request.body {
        builder = builder.json(body);
    }

    let response = builder.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    let headers = response.headers().clone();
    let content = response.bytes().await?.to_vec();

    Ok(RawResponse {
        status,
        headers,
        content,
    })
}

/// Sends a request with the blocking client
///
/// Same contract as [`make_http_request`]. Must not be called from inside an
/// async runtime.
pub fn make_blocking_request(
    client: &reqwest::blocking::Client,
    rate_limiter: Option<&RateLimiter>,
    request: HttpRequest<'_>,
) -> Result<RawResponse, AppError> {
    if let Some(limiter) = rate_limiter {
        limiter.wait_blocking();
    }

    debug!("{} {}", request.method, request.url);

    let mut builder = client
        .request(request.method, &request.url)
        .headers(request.headers);
    if !request.query.is_empty() {
        builder = builder.query(request.query);
    }
    if let Some(body) = request.body {
        builder = builder.json(body);
    }

    let response = builder.send()?;
    let status = response.status();
    debug!("Response status: {}", status);

    let headers = response.headers().clone();
    let content = response.bytes()?.to_vec();

    Ok(RawResponse {
        status,
        headers,
        content,
    })
}
