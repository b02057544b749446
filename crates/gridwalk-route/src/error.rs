//! Error type for route queries.

use std::fmt;

/// Errors arising from route distance lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No usable edge from `from` to `to`.
    MissingEdge { from: String, to: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEdge { from, to } => write!(f, "no distance from {from} to {to}"),
        }
    }
}

impl std::error::Error for RouteError {}
