//! Centralized configuration (environment variables + defaults).

/// Database URL must be provided (no default) for safety; startup fails fast
/// without it.
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set")
}

/// HTTP listen address.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
