//! Error types for waypoint-router

use thiserror::Error;

/// Result type alias for router operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while registering routes
///
/// A failed lookup is not an error: [`Router::resolve`](crate::Router::resolve)
/// returns `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The pattern normalizes to a node that already terminates a route
    #[error("This route conflicts with an existing route: {route}")]
    RouteConflict {
        /// The previously registered pattern
        route: String,
    },
}

impl Error {
    /// The existing pattern this error refers to
    pub fn route(&self) -> &str {
        match self {
            Error::RouteConflict { route } => route,
        }
    }
}
