//! GitHub API integration.
//!
//! This module provides a blocking client for the two endpoints repo-sweep needs:
//! - Listing a user's repositories page by page
//! - Deleting a repository
//!
//! # Example
//!
//! ```rust,no_run
//! use repo_sweep::config::Config;
//! use repo_sweep::github::{GitHubClient, RepoOps};
//!
//! let config = Config::new("ghp_your_token_here", "octocat");
//! let client = GitHubClient::new(&config)?;
//!
//! for repo in client.list_user_repos_page("octocat", 1)? {
//!     println!("{}", repo);
//! }
//! # Ok::<(), repo_sweep::error::SweepError>(())
//! ```

mod client;
mod repos;

pub use client::{API_VERSION, GitHubClient};
pub use repos::{RepoFilterExt, RepoOps, Repository};
