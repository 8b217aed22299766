//! Navigation error types.

use crate::registry::RegistryError;
use std::fmt;
use thiserror::Error;

/// The hierarchy level a rejected navigation target belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLevel {
    Tab,
    SubTab,
}

impl fmt::Display for TargetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tab => f.write_str("tab"),
            Self::SubTab => f.write_str("sub-tab"),
        }
    }
}

/// Errors returned by [`NavigationController`](super::NavigationController).
///
/// All of these indicate an integration bug between a shell and the
/// controller; none is meant to reach an end user.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("'{id}' is not a {level} of '{parent}'")]
    InvalidNavigationTarget {
        level: TargetLevel,
        id: String,
        parent: String,
    },

    #[error("Breadcrumb index {index} is out of range (trail has {len} entries)")]
    BreadcrumbOutOfRange { index: usize, len: usize },
}

impl NavigationError {
    pub(crate) fn invalid(level: TargetLevel, id: &str, parent: impl Into<String>) -> Self {
        Self::InvalidNavigationTarget {
            level,
            id: id.to_string(),
            parent: parent.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_target_message_names_level_and_parent() {
        let err = NavigationError::invalid(TargetLevel::SubTab, "payroll", "settings/account");
        assert_eq!(
            err.to_string(),
            "'payroll' is not a sub-tab of 'settings/account'"
        );
    }

    #[test]
    fn registry_errors_pass_through() {
        let err: NavigationError = RegistryError::RouteNotFound("payroll".to_string()).into();
        assert_eq!(err.to_string(), "Route 'payroll' is not registered");
    }
}
