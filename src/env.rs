// Environment-backed configuration helpers

use tracing::warn;

/// Load `.env` once; missing file is fine.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Parse an environment variable, logging a warning if the value is present but invalid.
pub fn parse_env_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(v) => match v.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(var = name, value = %v, "Invalid env var value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

/// Read a string environment variable, falling back to `default` when unset.
pub fn string_env_var(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
