//! Environment-based defaults for the load-test binary.

/// Env var overriding the default target host.
pub const HOST_ENV: &str = "DRINKLOG_HOST";

/// Fallback target when neither `DRINKLOG_HOST` nor `--host` is given; the
/// development server listens on 3001.
pub const DEFAULT_HOST: &str = "http://localhost:3001";

/// Default host handed to the goose attack.
pub fn default_host() -> String {
    std::env::var(HOST_ENV).unwrap_or_else(|_| DEFAULT_HOST.to_string())
}
