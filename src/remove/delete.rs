//! The delete loop.

use crate::error::SweepError;
use crate::github::{RepoOps, Repository};

/// A repository that could not be deleted.
#[derive(Debug)]
pub struct DeleteFailure {
    pub full_name: String,
    pub error: SweepError,
}

/// Outcome of a batch delete.
#[derive(Debug, Default)]
pub struct DeleteReport {
    pub deleted: Vec<String>,
    pub failed: Vec<DeleteFailure>,
}

impl DeleteReport {
    /// Number of DELETE requests issued.
    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Delete each repository in order. A failure is logged and recorded, and
/// the remaining repositories are still attempted.
pub fn delete_repositories(ops: &impl RepoOps, repos: &[Repository]) -> DeleteReport {
    let mut report = DeleteReport::default();

    for repo in repos {
        match ops.delete_repo(&repo.full_name) {
            Ok(()) => {
                log::debug!("deleted {}", repo.full_name);
                report.deleted.push(repo.full_name.clone());
            }
            Err(error) => {
                log::warn!("Remove {} error: {}", repo.full_name, error);
                report.failed.push(DeleteFailure {
                    full_name: repo.full_name.clone(),
                    error,
                });
            }
        }
    }

    report
}
