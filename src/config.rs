//! Runtime configuration for the navigation controller.

use crate::breadcrumb::BreadcrumbDepth;
use crate::core::RouteId;
use crate::registry::{route_ids, PANEL_STORAGE_KEY, RAIL_STORAGE_KEY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the controller treats navigation targets missing from the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetPolicy {
    /// Reject unknown tab and sub-tab ids with
    /// [`NavigationError::InvalidNavigationTarget`](crate::controller::NavigationError).
    #[default]
    Strict,
    /// Store unknown ids as-is; they match nothing a shell renders.
    Permissive,
}

/// Errors loading a [`NavigatorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Navigator config could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Controller configuration. Every field has a default, so a partial JSON
/// document (or `{}`) is a valid config.
///
/// # Example
///
/// ```rust
/// use navstate::config::{NavigatorConfig, TargetPolicy};
///
/// let config = NavigatorConfig::from_json(r#"{"target_policy": "permissive"}"#).unwrap();
///
/// assert_eq!(config.target_policy, TargetPolicy::Permissive);
/// assert_eq!(config.initial_route.as_str(), "home");
/// assert!(config.persist_panels);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Route the controller starts on.
    pub initial_route: RouteId,
    /// Remember the last visited tab per route across sessions.
    pub persist_panels: bool,
    pub panel_storage_key: String,
    pub rail_storage_key: String,
    pub target_policy: TargetPolicy,
    pub breadcrumb_depth: BreadcrumbDepth,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            initial_route: RouteId::new(route_ids::HOME),
            persist_panels: true,
            panel_storage_key: PANEL_STORAGE_KEY.to_string(),
            rail_storage_key: RAIL_STORAGE_KEY.to_string(),
            target_policy: TargetPolicy::default(),
            breadcrumb_depth: BreadcrumbDepth::default(),
        }
    }
}

impl NavigatorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_initial_route(mut self, route: impl Into<RouteId>) -> Self {
        self.initial_route = route.into();
        self
    }

    pub fn with_persist_panels(mut self, enabled: bool) -> Self {
        self.persist_panels = enabled;
        self
    }

    pub fn with_target_policy(mut self, policy: TargetPolicy) -> Self {
        self.target_policy = policy;
        self
    }

    pub fn with_breadcrumb_depth(mut self, depth: BreadcrumbDepth) -> Self {
        self.breadcrumb_depth = depth;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.target_policy == TargetPolicy::Strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = NavigatorConfig::from_json("{}").unwrap();
        assert_eq!(config, NavigatorConfig::default());
    }

    #[test]
    fn defaults_match_builtin_keys() {
        let config = NavigatorConfig::default();

        assert_eq!(config.panel_storage_key, "lastVisitedSubPanels");
        assert_eq!(config.rail_storage_key, "navRailExpanded");
        assert!(config.is_strict());
        assert_eq!(config.breadcrumb_depth, BreadcrumbDepth::Full);
    }

    #[test]
    fn overrides_are_applied() {
        let json = r#"{
            "initial_route": "hiring",
            "persist_panels": false,
            "breadcrumb_depth": "route-and-tab"
        }"#;
        let config = NavigatorConfig::from_json(json).unwrap();

        assert_eq!(config.initial_route, RouteId::new("hiring"));
        assert!(!config.persist_panels);
        assert_eq!(config.breadcrumb_depth, BreadcrumbDepth::RouteAndTab);
    }

    #[test]
    fn unknown_policy_is_a_parse_error() {
        let result = NavigatorConfig::from_json(r#"{"target_policy": "lenient"}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn builder_methods_chain() {
        let config = NavigatorConfig::default()
            .with_initial_route("settings")
            .with_persist_panels(false)
            .with_target_policy(TargetPolicy::Permissive);

        assert_eq!(config.initial_route.as_str(), "settings");
        assert!(!config.persist_panels);
        assert!(!config.is_strict());
    }
}
