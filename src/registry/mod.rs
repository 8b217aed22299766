//! The route configuration registry.
//!
//! A [`RouteConfig`] is built once, validated as a whole, and is immutable
//! thereafter. All lookups are pure reads. Shells share one instance behind
//! an `Arc`, which makes it the single source of truth for what routes, tabs
//! and sub-tabs exist.

mod builder;
mod defaults;
pub mod error;
mod validation;

pub use builder::RouteConfigBuilder;
pub use defaults::{route_ids, PANEL_STORAGE_KEY, RAIL_STORAGE_KEY};
pub use error::{ConfigViolation, RegistryError};
pub use validation::validate_routes;

use crate::core::{RouteEntry, RouteId, Tab};
use std::collections::HashMap;
use stillwater::validation::Validation;

/// Immutable table of registered routes, kept in declaration order.
///
/// # Example
///
/// ```rust
/// use navstate::registry::RouteConfig;
///
/// let routes = RouteConfig::hr_default();
///
/// assert_eq!(routes.default_tab("hiring").unwrap(), Some("openings"));
/// assert!(routes.is_leaf_route("home").unwrap());
/// assert!(routes.route_entry("payroll").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct RouteConfig {
    routes: Vec<RouteEntry>,
    index: HashMap<RouteId, usize>,
}

impl RouteConfig {
    /// Validate `routes` and build the registry.
    ///
    /// Every violation in the table is reported at once in
    /// [`RegistryError::InvalidConfig`].
    pub fn new(routes: Vec<RouteEntry>) -> Result<Self, RegistryError> {
        if let Validation::Failure(violations) = validate_routes(&routes) {
            return Err(RegistryError::InvalidConfig(
                violations.iter().cloned().collect(),
            ));
        }

        let index = routes
            .iter()
            .enumerate()
            .map(|(position, route)| (route.id.clone(), position))
            .collect();

        Ok(Self { routes, index })
    }

    /// Start a fluent builder.
    pub fn builder() -> RouteConfigBuilder {
        RouteConfigBuilder::new()
    }

    /// Load a route table from a JSON array of route entries.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let routes: Vec<RouteEntry> = serde_json::from_str(json)?;
        Self::new(routes)
    }

    /// Serialize the table back to JSON, in declaration order.
    pub fn to_json(&self) -> Result<String, RegistryError> {
        Ok(serde_json::to_string_pretty(&self.routes)?)
    }

    pub fn route_entry(&self, route_id: &str) -> Result<&RouteEntry, RegistryError> {
        self.index
            .get(route_id)
            .map(|&position| &self.routes[position])
            .ok_or_else(|| RegistryError::RouteNotFound(route_id.to_string()))
    }

    /// Configured default tab, else the first tab, else `None` for leaves.
    pub fn default_tab(&self, route_id: &str) -> Result<Option<&str>, RegistryError> {
        Ok(self.route_entry(route_id)?.default_tab())
    }

    /// Tabs of the route in display order; empty for leaf routes.
    pub fn route_tabs(&self, route_id: &str) -> Result<&[Tab], RegistryError> {
        Ok(&self.route_entry(route_id)?.tabs)
    }

    pub fn is_leaf_route(&self, route_id: &str) -> Result<bool, RegistryError> {
        Ok(self.route_tabs(route_id)?.is_empty())
    }

    pub fn tab(&self, route_id: &str, tab_id: &str) -> Result<Option<&Tab>, RegistryError> {
        Ok(self.route_entry(route_id)?.tab(tab_id))
    }

    pub fn contains(&self, route_id: &str) -> bool {
        self.index.contains_key(route_id)
    }

    /// All routes in declaration order.
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    pub fn route_ids(&self) -> impl Iterator<Item = &RouteId> {
        self.routes.iter().map(|r| &r.id)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SubTab;

    fn sample() -> RouteConfig {
        RouteConfig::new(vec![
            RouteEntry::new("home", "Home", "home"),
            RouteEntry::new("hiring", "Hiring", "hiring")
                .with_tab(Tab::new("candidates", "Candidates"))
                .with_tab(Tab::new("openings", "Job Openings"))
                .with_default_tab("openings"),
            RouteEntry::new("people", "People", "people")
                .with_tab(Tab::new("directory", "Directory"))
                .with_tab(
                    Tab::new("org-chart", "Org Chart")
                        .with_sub_tab(SubTab::new("tree", "Tree")),
                ),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_unknown_route_fails() {
        let routes = sample();
        let err = routes.route_entry("payroll").unwrap_err();

        assert!(matches!(err, RegistryError::RouteNotFound(ref id) if id == "payroll"));
        assert_eq!(err.to_string(), "Route 'payroll' is not registered");
    }

    #[test]
    fn default_tab_rules() {
        let routes = sample();

        assert_eq!(routes.default_tab("hiring").unwrap(), Some("openings"));
        assert_eq!(routes.default_tab("people").unwrap(), Some("directory"));
        assert_eq!(routes.default_tab("home").unwrap(), None);
    }

    #[test]
    fn route_tabs_preserve_declaration_order() {
        let routes = sample();
        let ids: Vec<&str> = routes
            .route_tabs("hiring")
            .unwrap()
            .iter()
            .map(|t| t.id.as_str())
            .collect();

        assert_eq!(ids, vec!["candidates", "openings"]);
    }

    #[test]
    fn leaf_routes_have_no_tabs() {
        let routes = sample();

        assert!(routes.is_leaf_route("home").unwrap());
        assert!(!routes.is_leaf_route("hiring").unwrap());
        assert!(routes.is_leaf_route("nowhere").is_err());
    }

    #[test]
    fn invalid_table_is_rejected_with_all_violations() {
        let result = RouteConfig::new(vec![
            RouteEntry::new("home", "Home", "home").with_default_tab("overview"),
            RouteEntry::new("home", "Home", "home"),
        ]);

        match result {
            Err(RegistryError::InvalidConfig(violations)) => assert_eq!(violations.len(), 2),
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn json_round_trip_preserves_table() {
        let routes = sample();
        let json = routes.to_json().unwrap();
        let reloaded = RouteConfig::from_json(&json).unwrap();

        assert_eq!(routes.routes(), reloaded.routes());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = RouteConfig::from_json("[{\"id\": 42}]");
        assert!(matches!(result, Err(RegistryError::Parse(_))));
    }

    #[test]
    fn route_ids_iterate_in_order() {
        let routes = sample();
        let ids: Vec<&str> = routes.route_ids().map(RouteId::as_str).collect();

        assert_eq!(ids, vec!["home", "hiring", "people"]);
        assert_eq!(routes.len(), 3);
        assert!(routes.contains("people"));
        assert!(!routes.contains("reports"));
    }
}
