use serde::{Deserialize, Serialize};
use std::env;

pub const PACKAGIST_URL_ENV: &str = "COMPOSER_MCP_PACKAGIST_URL";
pub const GITHUB_API_URL_ENV: &str = "COMPOSER_MCP_GITHUB_API_URL";
pub const GITLAB_URL_ENV: &str = "COMPOSER_MCP_GITLAB_URL";
pub const HTTP_TIMEOUT_MS_ENV: &str = "COMPOSER_MCP_HTTP_TIMEOUT_MS";

/// Endpoints and HTTP settings for the registry and README stages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Packagist base URL (package metadata lives under `/packages/<id>.json`)
    pub packagist_url: String,

    /// GitHub REST API base URL
    pub github_api_url: String,

    /// GitLab base URL (API lives under `/api/v4`)
    pub gitlab_url: String,

    /// User-Agent header sent with every request (GitHub rejects requests without one)
    pub user_agent: String,

    /// Per-request timeout; `None` leaves requests unbounded
    pub timeout_ms: Option<u64>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            packagist_url: "https://packagist.org".to_string(),
            github_api_url: "https://api.github.com".to_string(),
            gitlab_url: "https://gitlab.com".to_string(),
            user_agent: concat!("composer-mcp/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_ms: None,
        }
    }
}

impl RegistryConfig {
    /// Defaults overlaid with `COMPOSER_MCP_*` environment variables. Blank values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = env_value(PACKAGIST_URL_ENV) {
            config.packagist_url = url;
        }
        if let Some(url) = env_value(GITHUB_API_URL_ENV) {
            config.github_api_url = url;
        }
        if let Some(url) = env_value(GITLAB_URL_ENV) {
            config.gitlab_url = url;
        }
        if let Some(raw) = env_value(HTTP_TIMEOUT_MS_ENV) {
            match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => config.timeout_ms = Some(ms),
                _ => log::warn!("Ignoring invalid {HTTP_TIMEOUT_MS_ENV}={raw}"),
            }
        }
        config.normalized()
    }

    /// Strip trailing slashes from base URLs so paths can be appended verbatim.
    pub fn normalized(mut self) -> Self {
        for url in [
            &mut self.packagist_url,
            &mut self.github_api_url,
            &mut self.gitlab_url,
        ] {
            let trimmed = url.trim_end_matches('/').len();
            url.truncate(trimmed);
        }
        self
    }
}

fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
