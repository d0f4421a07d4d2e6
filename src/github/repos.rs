//! GitHub repository operations.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::Result;
use crate::github::GitHubClient;

/// Repository information from the GitHub API.
///
/// Serialized with the API's own field names, so the persisted list reads
/// like a trimmed-down API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    /// `owner/name`, the identity used for deletion.
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(rename = "html_url")]
    pub url: String,
    #[serde(rename = "private", default)]
    pub is_private: bool,
    #[serde(rename = "fork", default)]
    pub is_fork: bool,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] - {}", self.full_name, self.description)
    }
}

/// The remote operations the fetch and delete pipelines need.
pub trait RepoOps {
    /// Fetch one page of a user's repositories. An empty page means there are no more.
    fn list_user_repos_page(&self, user: &str, page: u32) -> Result<Vec<Repository>>;

    /// Delete a repository by its `owner/name`.
    fn delete_repo(&self, full_name: &str) -> Result<()>;
}

impl RepoOps for GitHubClient {
    fn list_user_repos_page(&self, user: &str, page: u32) -> Result<Vec<Repository>> {
        let endpoint = format!("/users/{}/repos", user);
        self.get(&endpoint, &[("page", page.to_string())])
    }

    fn delete_repo(&self, full_name: &str) -> Result<()> {
        let endpoint = format!("/repos/{}", full_name);
        self.delete(&endpoint)
    }
}

/// Extension methods for filtering repository lists.
pub trait RepoFilterExt {
    /// Filter to forked repositories.
    fn forks_only(self) -> Self;
}

impl RepoFilterExt for Vec<Repository> {
    fn forks_only(self) -> Self {
        self.into_iter().filter(|r| r.is_fork).collect()
    }
}
