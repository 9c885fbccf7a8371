//! Link generation for the lock and project job views.
//!
//! A [`UrlGenerator`] resolves a named route to a path and prefixes it with
//! the externally reachable base URL. It holds only immutable configuration,
//! so one instance can serve any number of threads.
//!
//! The two operations deliberately fail differently:
//! - lock links use a *silent fallback*: a resolution failure is logged and
//!   the link degrades to the bare base URL;
//! - job links use a *reported error*: the failure is returned as a
//!   [`JobUrlError`].

mod error;

pub use error::JobUrlError;

use crate::project::ProjectJobContext;
use crate::routes::RouteResolver;
use crate::url_model::{flatten_slashes, query_escape, BaseUrl};

/// Route names and base URL the generator composes links from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    pub lock_route_name: String,
    pub jobs_route_name: String,
    /// Placeholder name the lock route expects the lock ID under.
    pub lock_id_param: String,
    pub base_url: BaseUrl,
}

#[derive(Debug, Clone)]
pub struct UrlGenerator<R> {
    config: RouteConfig,
    resolver: R,
}

impl<R: RouteResolver> UrlGenerator<R> {
    pub fn new(config: RouteConfig, resolver: R) -> Self {
        Self { config, resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Fully qualified link to the lock view for `lock_id`.
    ///
    /// Silent fallback: never fails. If the lock route cannot be resolved the
    /// path is left empty and the base URL alone is returned; the failure is
    /// only logged.
    pub fn generate_lock_url(&self, lock_id: &str) -> String {
        let escaped = query_escape(lock_id);
        let path = self
            .resolver
            .resolve_path(
                &self.config.lock_route_name,
                &[(self.config.lock_id_param.as_str(), escaped.as_str())],
            )
            .unwrap_or_else(|err| {
                tracing::warn!(
                    route = %self.config.lock_route_name,
                    lock_id,
                    error = %err,
                    "lock route did not resolve; returning base URL"
                );
                String::new()
            });
        self.config.base_url.join_path(&path)
    }

    /// Fully qualified link to the job view for one project in a pull request.
    ///
    /// Reported error: a resolution failure is returned, wrapped with the
    /// repo, pull, project and workspace it was generated for.
    pub fn generate_project_job_url(&self, ctx: &ProjectJobContext) -> Result<String, JobUrlError> {
        // Nested owner/repo names become one segment each.
        let org = flatten_slashes(&ctx.pull_owner);
        let repo = flatten_slashes(&ctx.pull_repo_name);
        let pull = ctx.pull_number.to_string();

        let path = self
            .resolver
            .resolve_path(
                &self.config.jobs_route_name,
                &[
                    ("org", org.as_str()),
                    ("repo", repo.as_str()),
                    ("pull", pull.as_str()),
                    ("project", ctx.project.as_str()),
                    ("workspace", ctx.workspace.as_str()),
                ],
            )
            .map_err(|source| JobUrlError {
                repo_full_name: ctx.repo_full_name(),
                pull_number: ctx.pull_number,
                project: ctx.project.clone(),
                workspace: ctx.workspace.clone(),
                source,
            })?;
        Ok(self.config.base_url.join_path(&path))
    }
}
