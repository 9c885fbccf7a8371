//! Route registration and resolution errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route registered under {0:?}")]
    UnknownRoute(String),

    #[error("route {0:?} is already registered")]
    DuplicateRoute(String),

    #[error("route {route:?}: missing value for {{{name}}}")]
    MissingParam { route: String, name: String },

    #[error("route {route:?}: template does not declare {{{name}}}")]
    UnexpectedParam { route: String, name: String },

    #[error("route {route:?}: value {value:?} for {{{name}}} does not match pattern {pattern:?}")]
    PatternMismatch {
        route: String,
        name: String,
        value: String,
        pattern: String,
    },

    #[error("invalid route template {template:?}: {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("invalid pattern {pattern:?} for {{{name}}}: {reason}")]
    InvalidPattern {
        name: String,
        pattern: String,
        reason: String,
    },
}
