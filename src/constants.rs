/// User agent string sent with every request
pub const USER_AGENT: &str = "ledger-api-client/0.3.0";
/// Default base URL when `LEDGER_API_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default prefix placed before the token in the authorization header
pub const DEFAULT_TOKEN_PREFIX: &str = "Bearer";
/// Default name of the header carrying the token
pub const DEFAULT_AUTH_HEADER_NAME: &str = "Authorization";
/// Header used to make settlement action creation idempotent
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";
/// Length of generated idempotency keys
pub const IDEMPOTENCY_KEY_LENGTH: usize = 24;
/// Polling interval in milliseconds while waiting on the rate limiter
pub const RATE_LIMIT_POLL_MS: u64 = 10;
/// Default maximum number of connections used when verifying emplacements
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
