/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::error::AppError;
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
///
/// Empty values are treated as missing.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => val.trim().parse::<T>().ok(),
        _ => None,
    }
}

/// Reads a boolean flag from the environment
///
/// Accepts `true/false`, `1/0`, `yes/no` and `on/off` in any case. Anything
/// else falls back to `default`.
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    let Ok(val) = env::var(env_var) else {
        return default;
    };
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        other => {
            error!("Failed to parse {} as a flag: {}, using default", env_var, other);
            default
        }
    }
}

/// Gets a mandatory environment variable
///
/// # Returns
/// * `Ok(String)` - The value, trimmed
/// * `Err(AppError::Config)` - If the variable is missing or empty
pub fn get_env_required(env_var: &str) -> Result<String, AppError> {
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => Ok(val.trim().to_string()),
        _ => Err(AppError::Config(format!(
            "{env_var} environment variable is required"
        ))),
    }
}
