//! Route registry error types.

use thiserror::Error;

/// A single defect found while validating a route table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Route at position {position} has an empty id")]
    EmptyRouteId { position: usize },

    #[error("Route '{route}' is registered more than once")]
    DuplicateRoute { route: String },

    #[error("Route '{route}' has a tab with an empty id")]
    EmptyTabId { route: String },

    #[error("Route '{route}' declares tab '{tab}' more than once")]
    DuplicateTab { route: String, tab: String },

    #[error("Route '{route}' defaults to tab '{tab}', which it does not declare")]
    UnknownDefaultTab { route: String, tab: String },

    #[error("Tab '{route}/{tab}' declares sub-tab '{sub_tab}' more than once")]
    DuplicateSubTab {
        route: String,
        tab: String,
        sub_tab: String,
    },

    #[error("Tab '{route}/{tab}' defaults to sub-tab '{sub_tab}', which it does not declare")]
    UnknownDefaultSubTab {
        route: String,
        tab: String,
        sub_tab: String,
    },
}

/// Errors raised by the route registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Lookup of a route id that is not registered. This is a programming
    /// error in the caller, not a runtime condition.
    #[error("Route '{0}' is not registered")]
    RouteNotFound(String),

    #[error("Route table is invalid ({} violation(s)): {}", .0.len(), join(.0))]
    InvalidConfig(Vec<ConfigViolation>),

    #[error("Route table could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
