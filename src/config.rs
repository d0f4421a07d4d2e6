//! Configuration loaded once at startup.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SweepError};

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable consulted when the file carries no token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Account credentials and API settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Personal access token sent as `Authorization: token <...>`.
    #[serde(default)]
    pub access_token: String,
    /// Account whose repositories are listed; also sent as the User-Agent.
    pub github_username: String,
    /// API base URL, without a trailing slash.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Timeout applied to every request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Create a configuration for the public GitHub API.
    pub fn new(access_token: impl Into<String>, github_username: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            github_username: github_username.into(),
            api_url: default_api_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Use a custom API base URL (GitHub Enterprise or a test server).
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Load the configuration file and fall back to `GITHUB_TOKEN` for the token.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::from_file(path)?;
        config.with_token_fallback(std::env::var(TOKEN_ENV_VAR).ok())
    }

    /// Read and validate a configuration file without consulting the environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|_| SweepError::ConfigNotFound {
            path: path.to_path_buf(),
            template: template_path(path),
        })?;

        let mut config: Config = serde_json::from_str(&data)?;
        while config.api_url.ends_with('/') {
            config.api_url.pop();
        }

        if config.github_username.trim().is_empty() {
            return Err(SweepError::InvalidConfig(
                "github_username must not be empty".into(),
            ));
        }
        if config.timeout_secs == 0 {
            return Err(SweepError::InvalidConfig(
                "timeout_secs must be greater than zero".into(),
            ));
        }

        Ok(config)
    }

    /// Fill an empty token from `env_token`; fails if neither provides one.
    pub fn with_token_fallback(mut self, env_token: Option<String>) -> Result<Self> {
        if self.access_token.trim().is_empty() {
            match env_token.filter(|t| !t.trim().is_empty()) {
                Some(token) => self.access_token = token,
                None => {
                    return Err(SweepError::InvalidConfig(format!(
                        "access_token is empty and {} is not set",
                        TOKEN_ENV_VAR
                    )));
                }
            }
        }
        Ok(self)
    }
}

/// `config.json` -> `config.json.tpl`
pub fn template_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tpl");
    PathBuf::from(name)
}
