//! Named routes: a registry of path templates addressed by name.
//!
//! The generator only depends on [`RouteResolver`]; [`RouteTable`] is the
//! in-process implementation used by the service and CLI. Tests substitute
//! their own resolvers.

mod error;
mod table;
mod template;

pub use error::RouteError;
pub use table::RouteTable;

/// Resolves a named route plus parameter values to a concrete path
/// (path and optional query, no scheme or host).
///
/// `params` must supply every name the route's template declares; order is
/// irrelevant.
pub trait RouteResolver: Send + Sync {
    fn resolve_path(&self, route: &str, params: &[(&str, &str)]) -> Result<String, RouteError>;
}
