use std::env;

/// Seconds before an in-flight backend call is abandoned by the HTTP
/// layer. The workflow core itself has no timeout logic.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            backend_base_url: env::var("BACKEND_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
