use std::env;
use crate::common::models::DEFAULT_LOCATION;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend_host: String,
    pub backend_port: u16,
    /// Full base URL; wins over host/port when set.
    pub base_url_override: Option<String>,
    pub default_location: String,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_host: "127.0.0.1".to_string(),
            backend_port: 8000,
            base_url_override: None,
            default_location: DEFAULT_LOCATION.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from any variable source; unset or unparsable values fall back to defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            backend_host: var("RECOMMENDER_HOST").unwrap_or(defaults.backend_host),
            backend_port: var("RECOMMENDER_PORT").and_then(|p| p.parse().ok()).unwrap_or(defaults.backend_port),
            base_url_override: var("RECOMMENDER_BASE_URL").filter(|u| !u.trim().is_empty()),
            default_location: var("DEFAULT_LOCATION").unwrap_or(defaults.default_location),
            log_level: var("LOG_LEVEL").filter(|l| !l.trim().is_empty()).unwrap_or(defaults.log_level),
        }
    }

    /// Base URL of the backend, without trailing slash.
    pub fn base_url(&self) -> String {
        match &self.base_url_override {
            Some(url) => url.trim().trim_end_matches('/').to_string(),
            None => format!("http://{}:{}", self.backend_host, self.backend_port),
        }
    }
}
