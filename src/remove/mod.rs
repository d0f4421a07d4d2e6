//! Choosing repositories to delete and deleting them.
//!
//! Two selection policies are available:
//! - [`confirm_all`] lists every candidate and asks a single yes/no question
//! - [`check_each`] asks about each candidate, with `s` to stop early and
//!   `q` to abort without deleting anything
//!
//! Either produces a [`Selection`], which is handed to [`delete_repositories`].
//!
//! ```rust,no_run
//! use repo_sweep::prelude::*;
//!
//! let config = Config::load("config.json")?;
//! let client = GitHubClient::new(&config)?;
//! let candidates = RepoStore::default().load()?;
//!
//! let stdin = std::io::stdin();
//! if let Selection::Delete(repos) = check_each(&candidates, stdin.lock(), std::io::stdout())? {
//!     let report = delete_repositories(&client, &repos);
//!     println!("{} deleted", report.deleted.len());
//! }
//! # Ok::<(), repo_sweep::error::SweepError>(())
//! ```

mod check;
mod delete;
mod prompt;

pub use check::{Action, Answer, CheckState, CheckWalk, step};
pub use delete::{DeleteFailure, DeleteReport, delete_repositories};
pub use prompt::{check_each, confirm_all};

use crate::github::Repository;

/// What an interactive policy decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Delete these repositories.
    Delete(Vec<Repository>),
    /// The user backed out; delete nothing.
    Cancelled,
}
