//! Builder for constructing navigation controllers.

use crate::config::NavigatorConfig;
use crate::controller::error::NavigationError;
use crate::controller::navigator::NavigationController;
use crate::persistence::{KeyValueStore, PanelPersistenceStore};
use crate::registry::RouteConfig;
use std::sync::Arc;

/// Builder for [`NavigationController`] with a fluent API.
///
/// Panel persistence is enabled when the config asks for it *and* a storage
/// backend is supplied.
pub struct NavigationControllerBuilder {
    routes: Arc<RouteConfig>,
    config: NavigatorConfig,
    storage: Option<Arc<dyn KeyValueStore>>,
}

impl NavigationControllerBuilder {
    pub fn new(routes: Arc<RouteConfig>) -> Self {
        Self {
            routes,
            config: NavigatorConfig::default(),
            storage: None,
        }
    }

    /// Replace the default configuration.
    pub fn config(mut self, config: NavigatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject the durable storage backend used for panel persistence.
    pub fn storage(mut self, storage: Arc<dyn KeyValueStore>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Build the controller.
    /// Fails if the configured initial route is not registered.
    pub fn build(self) -> Result<NavigationController, NavigationError> {
        let panel_store = match (self.config.persist_panels, self.storage) {
            (true, Some(storage)) => Some(PanelPersistenceStore::new(
                storage,
                self.config.panel_storage_key.clone(),
            )),
            (true, None) => {
                tracing::warn!("panel persistence requested without a storage backend; disabled");
                None
            }
            (false, _) => None,
        };

        NavigationController::from_parts(self.routes, self.config, panel_store)
    }
}
