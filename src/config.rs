//! Client configuration
//!
//! Values come from built-in defaults, then the environment, then explicit
//! overrides (CLI flags). Authentication is deliberately absent.

use std::time::Duration;

/// Default GitHub API base URL
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Client identifier sent as `User-Agent` (GitHub rejects requests without one)
pub const DEFAULT_USER_AGENT: &str = "levitate-release-dl";

pub const ENV_API_BASE: &str = "RELEASE_DL_API_BASE";
pub const ENV_USER_AGENT: &str = "RELEASE_DL_USER_AGENT";
pub const ENV_HTTP_TIMEOUT: &str = "RELEASE_DL_HTTP_TIMEOUT";

const MIN_TIMEOUT_SECS: u64 = 5;
const MAX_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the releases API, without trailing slash
    pub api_base: String,
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Request timeout; `None` keeps the HTTP client's defaults
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Build a config from `RELEASE_DL_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// Unset, blank, or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base) = lookup(ENV_API_BASE).filter(|s| !s.trim().is_empty()) {
            config = config.with_api_base(&base);
        }
        if let Some(agent) = lookup(ENV_USER_AGENT).filter(|s| !s.trim().is_empty()) {
            config.user_agent = agent;
        }
        if let Some(secs) = lookup(ENV_HTTP_TIMEOUT).and_then(|s| s.trim().parse::<u64>().ok()) {
            config = config.with_timeout_secs(secs);
        }

        config
    }

    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout, clamped to 5-300 seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(
            secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS),
        ));
        self
    }

    /// URL of the releases endpoint for `repo` (first page only).
    pub fn releases_url(&self, repo: &str) -> String {
        format!("{}/repos/{}/releases", self.api_base, repo)
    }
}
