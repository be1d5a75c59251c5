/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/26
******************************************************************************/
use crate::application::config::{Config, Credentials};
use crate::error::AppError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::fmt;

/// Static token authentication
///
/// Renders the authorization header described by [`Credentials`]. The token
/// never shows up in `Debug` output.
#[derive(Clone, Default)]
pub struct Auth {
    credentials: Credentials,
}

impl Auth {
    /// Creates the authenticator from the client configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            credentials: config.credentials.clone(),
        }
    }

    /// True when a token is configured
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.token.is_some()
    }

    /// Header name and value to attach, if a token is configured
    #[must_use]
    pub fn header(&self) -> Option<(String, String)> {
        let token = self.credentials.token.as_ref()?;
        let value = if self.credentials.prefix.is_empty() {
            token.clone()
        } else {
            format!("{} {}", self.credentials.prefix, token)
        };
        Some((self.credentials.auth_header_name.clone(), value))
    }

    /// Adds the authorization header to `headers`
    ///
    /// The value is marked sensitive so it is redacted by reqwest's `Debug`.
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<(), AppError> {
        if let Some((name, value)) = self.header() {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| AppError::Config(format!("invalid auth header name: {e}")))?;
            let mut value = HeaderValue::from_str(&value)
                .map_err(|e| AppError::Config(format!("invalid auth header value: {e}")))?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }
        Ok(())
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("auth_header_name", &self.credentials.auth_header_name)
            .field("prefix", &self.credentials.prefix)
            .field("token", &self.credentials.token.as_ref().map(|_| "***"))
            .finish()
    }
}
