//! `linkgen job` – print the project job view link.

use anyhow::Result;
use clap::Args;
use linkgen_core::generator::UrlGenerator;
use linkgen_core::project::ProjectJobContext;
use linkgen_core::routes::RouteTable;

#[derive(Debug, Args)]
pub struct JobArgs {
    /// Base repo owner (may be nested, e.g. group/subgroup).
    #[arg(long)]
    pub owner: String,
    /// Base repo name (may be nested, e.g. repo/sub-repo).
    #[arg(long)]
    pub repo: String,
    /// Pull request number.
    #[arg(long)]
    pub pull: u64,
    /// Project name; takes precedence over --dir.
    #[arg(long)]
    pub project_name: Option<String>,
    /// Project directory relative to the repo root.
    #[arg(long, default_value = ".")]
    pub dir: String,
    /// Workspace.
    #[arg(long, default_value = "default")]
    pub workspace: String,
}

impl JobArgs {
    pub fn context(&self) -> ProjectJobContext {
        ProjectJobContext::from_project(
            self.owner.as_str(),
            self.repo.as_str(),
            self.pull,
            &self.dir,
            self.project_name.as_deref(),
            self.workspace.as_str(),
        )
    }
}

pub fn run_job(links: &UrlGenerator<RouteTable>, args: &JobArgs) -> Result<()> {
    let url = links.generate_project_job_url(&args.context())?;
    println!("{url}");
    Ok(())
}
