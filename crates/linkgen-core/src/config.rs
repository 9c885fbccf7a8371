use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::generator::{RouteConfig, UrlGenerator};
use crate::routes::RouteTable;
use crate::url_model::BaseUrl;

/// A named route and its path template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub name: String,
    /// Path template, e.g. `/lock?id={id}` or `/jobs/{org}/{repo}`.
    pub template: String,
}

/// Global configuration loaded from `~/.config/linkgen/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkgenConfig {
    /// Externally reachable URL the service is deployed under (scheme + host).
    pub base_url: String,
    /// Query placeholder the lock route takes the escaped lock ID under.
    #[serde(default = "default_lock_id_param")]
    pub lock_id_param: String,
    #[serde(default = "default_lock_route")]
    pub lock_route: RouteSpec,
    #[serde(default = "default_jobs_route")]
    pub jobs_route: RouteSpec,
}

fn default_lock_id_param() -> String {
    "id".to_string()
}

fn default_lock_route() -> RouteSpec {
    RouteSpec {
        name: "lock-detail".to_string(),
        template: "/lock?id={id}".to_string(),
    }
}

fn default_jobs_route() -> RouteSpec {
    RouteSpec {
        name: "project-jobs-detail".to_string(),
        // Project and workspace are opaque and may hold `/`.
        template: "/jobs/{org}/{repo}/{pull}/{project:.+}/{workspace:.+}".to_string(),
    }
}

impl Default for LinkgenConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4141".to_string(),
            lock_id_param: default_lock_id_param(),
            lock_route: default_lock_route(),
            jobs_route: default_jobs_route(),
        }
    }
}

impl LinkgenConfig {
    /// Registers the lock and jobs routes and builds the generator.
    ///
    /// All configuration defects (bad base URL, bad template, clashing route
    /// names) surface here, at startup, rather than when links are generated.
    pub fn build_generator(&self) -> Result<UrlGenerator<RouteTable>> {
        let base_url = BaseUrl::parse(&self.base_url).context("config: base_url")?;

        let table = RouteTable::with_default_routes(self).with_context(|| {
            format!(
                "config: register routes {:?} and {:?}",
                self.lock_route.name, self.jobs_route.name
            )
        })?;

        let lock_params = table.params(&self.lock_route.name).unwrap_or_default();
        if !lock_params.contains(&self.lock_id_param.as_str()) {
            tracing::warn!(
                route = %self.lock_route.name,
                param = %self.lock_id_param,
                "lock route template does not declare the lock id param; lock links will fall back to the base URL"
            );
        }

        let config = RouteConfig {
            lock_route_name: self.lock_route.name.clone(),
            jobs_route_name: self.jobs_route.name.clone(),
            lock_id_param: self.lock_id_param.clone(),
            base_url,
        };
        Ok(UrlGenerator::new(config, table))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkgen")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkgenConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkgenConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from(path: &Path) -> Result<LinkgenConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: LinkgenConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
