//! Builder for constructing route registries.

use crate::core::RouteEntry;
use crate::registry::{RegistryError, RouteConfig};

/// Builder for constructing a [`RouteConfig`] with a fluent API.
///
/// Validation is deferred to [`build`](Self::build), which reports every
/// violation in the assembled table.
///
/// # Example
///
/// ```rust
/// use navstate::core::{RouteEntry, Tab};
/// use navstate::registry::RouteConfig;
///
/// let routes = RouteConfig::builder()
///     .route(RouteEntry::new("home", "Home", "home"))
///     .route(
///         RouteEntry::new("reports", "Reports", "chart")
///             .with_tab(Tab::new("standard", "Standard"))
///             .with_tab(Tab::new("custom", "Custom")),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(routes.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RouteConfigBuilder {
    routes: Vec<RouteEntry>,
}

impl RouteConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. Order of calls is display order.
    pub fn route(mut self, entry: RouteEntry) -> Self {
        self.routes.push(entry);
        self
    }

    /// Register several routes at once.
    pub fn routes(mut self, entries: impl IntoIterator<Item = RouteEntry>) -> Self {
        self.routes.extend(entries);
        self
    }

    pub fn build(self) -> Result<RouteConfig, RegistryError> {
        RouteConfig::new(self.routes)
    }
}
