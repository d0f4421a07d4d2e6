//! # repo-sweep
//!
//! Fetch the repositories a GitHub account owns, keep the list on disk, and
//! delete them in bulk or one by one after confirmation.
//!
//! This crate provides:
//! - A blocking GitHub client for listing and deleting repositories
//! - A paginated fetch that stops at the first empty page
//! - A JSON file store for the fetched list
//! - Two interactive selection policies feeding a continue-on-error delete loop
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use repo_sweep::prelude::*;
//!
//! let config = Config::load("config.json")?;
//! let client = GitHubClient::new(&config)?;
//!
//! let repos = fetch_repositories(&client, &config.github_username, RepoFilter::ForksOnly)?;
//! RepoStore::default().save(&repos)?;
//! # Ok::<(), repo_sweep::error::SweepError>(())
//! ```
//!
//! ## Deleting
//!
//! ```rust,no_run
//! use repo_sweep::prelude::*;
//!
//! let config = Config::load("config.json")?;
//! let client = GitHubClient::new(&config)?;
//! let repos = RepoStore::default().load()?;
//!
//! let stdin = std::io::stdin();
//! if let Selection::Delete(selected) = confirm_all(&repos, stdin.lock(), std::io::stdout())? {
//!     let report = delete_repositories(&client, &selected);
//!     for failure in &report.failed {
//!         eprintln!("{}: {}", failure.full_name, failure.error);
//!     }
//! }
//! # Ok::<(), repo_sweep::error::SweepError>(())
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod github;
pub mod output;
pub mod remove;
pub mod store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Result, SweepError};
    pub use crate::fetch::{RepoFilter, fetch_repositories};
    pub use crate::github::{GitHubClient, RepoFilterExt, RepoOps, Repository};
    pub use crate::remove::{
        DeleteFailure, DeleteReport, Selection, check_each, confirm_all, delete_repositories,
    };
    pub use crate::store::RepoStore;
}

pub use prelude::*;
