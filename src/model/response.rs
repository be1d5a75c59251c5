/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

/// Full result of an API call
///
/// Returned by the `send_detailed` call paths. `parsed` is `None` when the
/// status code is not one the operation documents and the client was not
/// configured to fail on unexpected statuses.
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// HTTP status code returned by the server
    pub status_code: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body
    pub content: Vec<u8>,
    /// Body decoded according to the operation's status mapping
    pub parsed: Option<T>,
}

impl<T> Response<T> {
    /// Creates a response from its parts
    #[must_use]
    pub fn new(
        status_code: StatusCode,
        headers: HeaderMap,
        content: Vec<u8>,
        parsed: Option<T>,
    ) -> Self {
        Self {
            status_code,
            headers,
            content,
            parsed,
        }
    }

    /// Consumes the response, keeping only the parsed body
    #[must_use]
    pub fn into_parsed(self) -> Option<T> {
        self.parsed
    }

    /// Raw body as text, invalid UTF-8 replaced
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }

    /// Value of a response header, if present and valid ASCII
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Maps the parsed body, keeping status, headers and content
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Response<U> {
        Response {
            status_code: self.status_code,
            headers: self.headers,
            content: self.content,
            parsed: self.parsed.map(f),
        }
    }
}
