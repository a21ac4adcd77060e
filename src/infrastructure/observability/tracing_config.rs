/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string()),
            level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info,garcon=debug,tower_http=debug".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}
