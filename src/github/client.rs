//! GitHub API client.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};

use crate::config::Config;
use crate::error::{Result, SweepError};

/// REST API version pinned on every request.
pub const API_VERSION: &str = "2022-11-28";

/// Blocking client for the GitHub REST API.
#[derive(Clone)]
pub struct GitHubClient {
    pub(crate) base_url: String,
    headers: HeaderMap,
    client: Client,
}

impl GitHubClient {
    /// Create a client from the loaded configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            headers: default_headers(config)?,
            client,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers sent with every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Make a GET request and decode the JSON body.
    pub(crate) fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url(endpoint);
        log::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(query)
            .send()?;

        let body = check_status(response)?.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Make a DELETE request, discarding any body.
    pub(crate) fn delete(&self, endpoint: &str) -> Result<()> {
        let url = self.url(endpoint);
        log::debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .headers(self.headers.clone())
            .send()?;

        check_status(response)?;
        Ok(())
    }
}

fn default_headers(config: &Config) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        header_value(&format!("token {}", config.access_token), "access_token")?,
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    headers.insert(
        USER_AGENT,
        header_value(&config.github_username, "github_username")?,
    );
    headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));
    Ok(headers)
}

fn header_value(value: &str, field: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| {
        SweepError::InvalidConfig(format!("{} contains characters not allowed in a header", field))
    })
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(SweepError::GitHub {
        status: status.as_u16(),
        message: format!("API request failed: {}", body.trim()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let config = Config::new("secret", "octocat");
        let client = GitHubClient::new(&config).unwrap();
        let headers = client.headers();

        assert_eq!(headers[AUTHORIZATION], "token secret");
        assert_eq!(headers[ACCEPT], "application/vnd.github+json");
        assert_eq!(headers[USER_AGENT], "octocat");
        assert_eq!(headers["X-GitHub-Api-Version"], API_VERSION);
    }

    #[test]
    fn test_enterprise_url() {
        let config = Config::new("secret", "octocat").api_url("https://ghe.example.com/api/v3/");
        let client = GitHubClient::new(&config).unwrap();

        assert_eq!(client.base_url(), "https://ghe.example.com/api/v3");
        assert_eq!(
            client.url("/repos/octocat/hello"),
            "https://ghe.example.com/api/v3/repos/octocat/hello"
        );
    }

    #[test]
    fn test_invalid_token_is_config_error() {
        let config = Config::new("bad\ntoken", "octocat");

        assert!(matches!(
            GitHubClient::new(&config),
            Err(SweepError::InvalidConfig(_))
        ));
    }
}
