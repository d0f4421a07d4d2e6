//! Paginated repository fetch.

use crate::error::Result;
use crate::github::{RepoFilterExt, RepoOps, Repository};

/// Which fetched repositories to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepoFilter {
    /// Keep every repository.
    #[default]
    All,
    /// Keep only forks.
    ForksOnly,
}

impl RepoFilter {
    /// Apply the filter to one page of results.
    pub fn apply(self, repos: Vec<Repository>) -> Vec<Repository> {
        match self {
            RepoFilter::All => repos,
            RepoFilter::ForksOnly => repos.forks_only(),
        }
    }
}

/// Fetch every repository owned by `user`, one page at a time.
///
/// Pages are requested from 1 upward until the first empty page. Any error
/// aborts the whole fetch and nothing fetched so far is returned.
pub fn fetch_repositories(
    ops: &impl RepoOps,
    user: &str,
    filter: RepoFilter,
) -> Result<Vec<Repository>> {
    let mut repositories = Vec::new();
    let mut page = 1;

    loop {
        let repos = ops.list_user_repos_page(user, page)?;
        log::debug!("page {}: {} repositories", page, repos.len());

        if repos.is_empty() {
            break;
        }

        repositories.extend(filter.apply(repos));
        page += 1;
    }

    Ok(repositories)
}
