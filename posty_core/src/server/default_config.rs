pub const DEFAULT_SERVER_BACKEND_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_BACKEND_PORT: &str = "3000";
pub const DEFAULT_SERVER_BACKEND_PROTOCOL: &str = "http";

pub const DEFAULT_DATABASE_URL: &str = "sqlite://posty.db?mode=rwc";

/// Artificial latency of the mock generator, in milliseconds.
pub const DEFAULT_GENERATION_LATENCY_MS: u64 = 1500;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Base URL of the backend built from the `SERVER_BACKEND_*` variables.
pub fn backend_base_url() -> String {
    let host = std::env::var("SERVER_BACKEND_HOST")
        .unwrap_or(String::from(DEFAULT_SERVER_BACKEND_HOST));
    let port = std::env::var("SERVER_BACKEND_PORT")
        .unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PORT));
    let protocol = std::env::var("SERVER_BACKEND_PROTOCOL")
        .unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PROTOCOL));
    format!("{protocol}://{host}:{port}")
}

/// Mock generator latency from `POSTY_GENERATION_LATENCY_MS`; unparsable values fall back to the default.
pub fn generation_latency() -> std::time::Duration {
    let millis = std::env::var("POSTY_GENERATION_LATENCY_MS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_GENERATION_LATENCY_MS);
    std::time::Duration::from_millis(millis)
}
