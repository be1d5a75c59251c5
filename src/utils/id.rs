use crate::constants::IDEMPOTENCY_KEY_LENGTH;

const KEY_ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Generates an idempotency key for mutating requests
///
/// The key is made of uppercase letters and digits, generated with `nanoid`,
/// so retries of the same logical request by the caller can reuse it.
///
/// # Examples
/// ```
/// use ledger_api_client::utils::id::idempotency_key;
/// let key = idempotency_key();
/// assert_eq!(key.len(), 24);
/// ```
#[must_use]
pub fn idempotency_key() -> String {
    nanoid::nanoid!(IDEMPOTENCY_KEY_LENGTH, &KEY_ALPHABET)
}

/// Returns true when `key` looks like something the API accepts as an
/// idempotency key: 1 to 255 visible ASCII characters.
#[must_use]
pub fn is_valid_idempotency_key(key: &str) -> bool {
    !key.is_empty() && key.len() <= 255 && key.chars().all(|c| c.is_ascii_graphic())
}
