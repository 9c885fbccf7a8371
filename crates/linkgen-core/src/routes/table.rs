//! In-process named route table.

use std::collections::HashMap;

use super::template::Template;
use super::{RouteError, RouteResolver};
use crate::config::LinkgenConfig;

#[derive(Debug, Clone)]
struct Route {
    name: String,
    template: Template,
}

/// Named path templates, registered once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding the lock and jobs routes named in `cfg`.
    pub fn with_default_routes(cfg: &LinkgenConfig) -> Result<Self, RouteError> {
        let mut table = Self::new();
        for route in [&cfg.lock_route, &cfg.jobs_route] {
            table.register(&route.name, &route.template)?;
        }
        Ok(table)
    }

    /// Registers `template` under `name`. Names are unique.
    pub fn register(&mut self, name: &str, template: &str) -> Result<(), RouteError> {
        if self.by_name.contains_key(name) {
            return Err(RouteError::DuplicateRoute(name.to_string()));
        }
        let template = Template::parse(template)?;
        tracing::debug!(
            route = name,
            template = template.raw(),
            "registered route"
        );
        self.by_name.insert(name.to_string(), self.routes.len());
        self.routes.push(Route {
            name: name.to_string(),
            template,
        });
        Ok(())
    }

    /// `(name, template)` pairs in registration order.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes
            .iter()
            .map(|r| (r.name.as_str(), r.template.raw()))
    }

    /// Placeholder names declared by the route, in template order.
    pub fn params(&self, name: &str) -> Option<Vec<&str>> {
        self.lookup(name).map(|t| t.var_names().collect())
    }

    fn lookup(&self, name: &str) -> Option<&Template> {
        self.by_name.get(name).map(|&i| &self.routes[i].template)
    }
}

impl RouteResolver for RouteTable {
    fn resolve_path(&self, route: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let template = self
            .lookup(route)
            .ok_or_else(|| RouteError::UnknownRoute(route.to_string()))?;
        template.expand(route, params)
    }
}
