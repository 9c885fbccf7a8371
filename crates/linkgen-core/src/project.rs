//! Pull request + project context a job link is generated for.

/// Identifies one project's job run within a pull request and workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectJobContext {
    /// Base repo owner; may be nested (`group/subgroup`).
    pub pull_owner: String,
    /// Base repo name; may be nested (`repo/sub-repo`).
    pub pull_repo_name: String,
    pub pull_number: u64,
    /// Opaque project identifier, see [`project_identifier`].
    pub project: String,
    pub workspace: String,
}

impl ProjectJobContext {
    /// Builds the context from pull and project fields, deriving the project
    /// identifier from `repo_rel_dir` and `project_name`.
    pub fn from_project(
        pull_owner: impl Into<String>,
        pull_repo_name: impl Into<String>,
        pull_number: u64,
        repo_rel_dir: &str,
        project_name: Option<&str>,
        workspace: impl Into<String>,
    ) -> Self {
        Self {
            pull_owner: pull_owner.into(),
            pull_repo_name: pull_repo_name.into(),
            pull_number,
            project: project_identifier(repo_rel_dir, project_name),
            workspace: workspace.into(),
        }
    }

    /// `owner/name`, unmodified.
    pub fn repo_full_name(&self) -> String {
        format!("{}/{}", self.pull_owner, self.pull_repo_name)
    }
}

/// Identifier for a project within a repo.
///
/// A non-empty project name wins. Otherwise the repo-relative dir is used with
/// `/` replaced by `-` and `.` by `_`, so the root dir `.` becomes `_`.
pub fn project_identifier(repo_rel_dir: &str, project_name: Option<&str>) -> String {
    match project_name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => repo_rel_dir
            .chars()
            .map(|c| match c {
                '/' => '-',
                '.' => '_',
                c => c,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_prefers_project_name() {
        assert_eq!(project_identifier("infra/prod", Some("network")), "network");
    }

    #[test]
    fn identifier_from_dir() {
        assert_eq!(project_identifier(".", None), "_");
        assert_eq!(project_identifier("infra/prod", None), "infra-prod");
        assert_eq!(project_identifier("./infra", Some("")), "_-infra");
    }

    #[test]
    fn from_project_and_full_name() {
        let ctx = ProjectJobContext::from_project("hashicorp", "terraform/modules", 7, ".", None, "prod");
        assert_eq!(ctx.project, "_");
        assert_eq!(ctx.workspace, "prod");
        assert_eq!(ctx.repo_full_name(), "hashicorp/terraform/modules");
    }
}
