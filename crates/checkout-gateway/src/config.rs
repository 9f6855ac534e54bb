//! Backend API Configuration

use std::env;

/// Where the checkout backend lives and how long to wait for it
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Defaults overridable through `CHECKOUT_API_URL` and
    /// `CHECKOUT_API_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("CHECKOUT_API_URL").unwrap_or(defaults.base_url),
            timeout_secs: env::var("CHECKOUT_API_TIMEOUT_SECS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}
