//! Job link generation error.

use thiserror::Error;

use crate::routes::RouteError;

/// Job route resolution failed. Carries enough identity (repo, pull, project,
/// workspace) to find the misconfigured route from a log line alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("creating job url for {repo_full_name}/{pull_number}/{project}/{workspace}")]
pub struct JobUrlError {
    pub repo_full_name: String,
    pub pull_number: u64,
    pub project: String,
    pub workspace: String,
    #[source]
    pub source: RouteError,
}
