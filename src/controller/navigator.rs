//! The navigation state controller.

use crate::breadcrumb::{trail_for_entry, BreadcrumbItem, BreadcrumbLevel};
use crate::config::NavigatorConfig;
use crate::controller::builder::NavigationControllerBuilder;
use crate::controller::error::{NavigationError, TargetLevel};
use crate::controller::events::{EventBus, NavigationCause, StateChange, SubscriptionId};
use crate::core::{NavigationState, RouteEntry, RouteId, SubTab, Tab};
use crate::persistence::{PanelPersistenceStore, PersistedPanelMap};
use crate::registry::RouteConfig;
use chrono::Utc;
use std::sync::Arc;

/// Tracks the selected route, tab and sub-tab for one UI session.
///
/// Every shell drives navigation through the `navigate_*` operations and
/// renders from the read accessors; none of them encodes navigation policy
/// of its own. Each operation is synchronous and applies at most one state
/// change, published to subscribers after it is applied.
///
/// # Example
///
/// ```rust
/// use navstate::controller::NavigationController;
/// use navstate::persistence::MemoryStore;
/// use navstate::registry::RouteConfig;
/// use std::sync::Arc;
///
/// let mut nav = NavigationController::builder(Arc::new(RouteConfig::hr_default()))
///     .storage(Arc::new(MemoryStore::new()))
///     .build()
///     .unwrap();
///
/// nav.navigate_to_route("settings").unwrap();
/// assert_eq!(nav.current_tab(), Some("account"));
/// assert_eq!(nav.current_sub_tab(), Some("account-info"));
///
/// nav.navigate_to_tab("benefits").unwrap();
/// nav.navigate_to_breadcrumb(0).unwrap();
/// assert_eq!(nav.current_tab(), Some("account"));
/// ```
pub struct NavigationController {
    routes: Arc<RouteConfig>,
    config: NavigatorConfig,
    state: NavigationState,
    panels: PersistedPanelMap,
    panel_store: Option<PanelPersistenceStore>,
    events: EventBus<StateChange>,
}

impl NavigationController {
    pub fn builder(routes: Arc<RouteConfig>) -> NavigationControllerBuilder {
        NavigationControllerBuilder::new(routes)
    }

    /// Controller with the default configuration and no persistence.
    pub fn new(routes: Arc<RouteConfig>) -> Result<Self, NavigationError> {
        Self::builder(routes).build()
    }

    pub(crate) fn from_parts(
        routes: Arc<RouteConfig>,
        config: NavigatorConfig,
        panel_store: Option<PanelPersistenceStore>,
    ) -> Result<Self, NavigationError> {
        let state = NavigationState::landing(routes.route_entry(config.initial_route.as_str())?);
        let panels = panel_store
            .as_ref()
            .map(PanelPersistenceStore::load)
            .unwrap_or_default();

        tracing::debug!(
            initial = %state,
            persistence = panel_store.is_some(),
            remembered = panels.len(),
            "navigation controller created"
        );

        Ok(Self {
            routes,
            config,
            state,
            panels,
            panel_store,
            events: EventBus::new(),
        })
    }

    // Routes are validated before entering state and the registry is
    // immutable, so the current route always resolves.
    fn entry(&self) -> &RouteEntry {
        self.routes
            .route_entry(self.state.route.as_str())
            .expect("current route is always registered")
    }

    /// Select a route.
    ///
    /// The tab becomes the route's remembered panel when persistence is
    /// enabled and the remembered tab still exists, else the route's default
    /// tab. The sub-tab is seeded from that tab's declared default.
    pub fn navigate_to_route(&mut self, route_id: &str) -> Result<(), NavigationError> {
        let entry = self.routes.route_entry(route_id)?;

        let remembered = self
            .panel_store
            .as_ref()
            .and_then(|_| self.panels.get(route_id))
            .filter(|tab_id| entry.tab(tab_id).is_some())
            .cloned();
        let tab = remembered.or_else(|| entry.default_tab().map(str::to_string));
        let next = NavigationState::at_tab(entry, tab);

        self.transition(next, NavigationCause::Route);
        Ok(())
    }

    /// Select a tab of the current route and remember it as the route's
    /// last visited panel.
    pub fn navigate_to_tab(&mut self, tab_id: &str) -> Result<(), NavigationError> {
        let entry = self.entry();
        if self.config.is_strict() && entry.tab(tab_id).is_none() {
            return Err(NavigationError::invalid(
                TargetLevel::Tab,
                tab_id,
                entry.id.as_str(),
            ));
        }

        let next = NavigationState::at_tab(entry, Some(tab_id.to_string()));
        let route = entry.id.clone();

        self.remember(route, tab_id);
        self.transition(next, NavigationCause::Tab);
        Ok(())
    }

    /// Select a sub-tab of the current tab.
    pub fn navigate_to_sub_tab(&mut self, sub_tab_id: &str) -> Result<(), NavigationError> {
        let declared = self
            .current_tab_entry()
            .and_then(|tab| tab.sub_tab(sub_tab_id))
            .is_some();
        if self.config.is_strict() && !declared {
            let parent = match self.state.tab.as_deref() {
                Some(tab) => format!("{}/{}", self.state.route, tab),
                None => self.state.route.to_string(),
            };
            return Err(NavigationError::invalid(TargetLevel::SubTab, sub_tab_id, parent));
        }

        let next = NavigationState {
            sub_tab: Some(sub_tab_id.to_string()),
            ..self.state.clone()
        };

        self.transition(next, NavigationCause::SubTab);
        Ok(())
    }

    /// Collapse the selection to the crumb at `index` of the current trail.
    ///
    /// - Crumb 0 resets to the route's default tab and its default sub-tab.
    /// - A tab crumb followed by a sub-tab crumb resets the sub-tab to the
    ///   tab's default.
    /// - The last crumb is already the current selection; nothing changes.
    ///
    /// Remembered panels are left untouched.
    pub fn navigate_to_breadcrumb(&mut self, index: usize) -> Result<(), NavigationError> {
        let len = self.breadcrumbs().len();
        if index >= len {
            if self.config.is_strict() {
                return Err(NavigationError::BreadcrumbOutOfRange { index, len });
            }
            return Ok(());
        }

        let entry = self.entry();
        let next = match BreadcrumbLevel::from_index(index) {
            Some(BreadcrumbLevel::Route) => NavigationState::landing(entry),
            _ if index + 1 == len => return Ok(()),
            Some(BreadcrumbLevel::Tab) => NavigationState::at_tab(entry, self.state.tab.clone()),
            _ => return Ok(()),
        };

        self.transition(next, NavigationCause::Breadcrumb(index));
        Ok(())
    }

    /// Remember `tab_id` as the last visited panel of `route_id` without
    /// navigating there.
    pub fn set_last_visited_sub_panel(
        &mut self,
        route_id: &str,
        tab_id: &str,
    ) -> Result<(), NavigationError> {
        let entry = self.routes.route_entry(route_id)?;
        if self.config.is_strict() && entry.tab(tab_id).is_none() {
            return Err(NavigationError::invalid(TargetLevel::Tab, tab_id, route_id));
        }

        let route = entry.id.clone();
        self.remember(route, tab_id);
        Ok(())
    }

    /// Forget every remembered panel, in memory and in storage.
    pub fn clear_last_visited_sub_panels(&mut self) {
        self.panels.clear();
        if let Some(store) = &self.panel_store {
            store.clear();
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn current_route(&self) -> &RouteId {
        &self.state.route
    }

    pub fn current_tab(&self) -> Option<&str> {
        self.state.tab.as_deref()
    }

    pub fn current_sub_tab(&self) -> Option<&str> {
        self.state.sub_tab.as_deref()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Trail for the current selection, at the configured depth.
    pub fn breadcrumbs(&self) -> Vec<BreadcrumbItem> {
        trail_for_entry(
            self.entry(),
            self.state.tab.as_deref(),
            self.state.sub_tab.as_deref(),
            self.config.breadcrumb_depth,
        )
    }

    /// Tabs of the current route; empty on leaf routes.
    pub fn available_tabs(&self) -> &[Tab] {
        &self.entry().tabs
    }

    /// Sub-tabs declared by the current tab; empty when it declares none.
    pub fn available_sub_tabs(&self) -> &[SubTab] {
        self.current_tab_entry()
            .map(|tab| tab.sub_tabs.as_slice())
            .unwrap_or_default()
    }

    pub fn is_current_route_leaf(&self) -> bool {
        self.entry().is_leaf()
    }

    pub fn last_visited_sub_panels(&self) -> &PersistedPanelMap {
        &self.panels
    }

    pub fn persistence_enabled(&self) -> bool {
        self.panel_store.is_some()
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn routes(&self) -> &Arc<RouteConfig> {
        &self.routes
    }

    fn current_tab_entry(&self) -> Option<&Tab> {
        self.entry().tab(self.state.tab.as_deref()?)
    }

    fn remember(&mut self, route: RouteId, tab_id: &str) {
        self.panels.insert(route, tab_id.to_string());
        if let Some(store) = &self.panel_store {
            store.save(&self.panels);
        }
    }

    fn transition(&mut self, next: NavigationState, cause: NavigationCause) {
        if next == self.state {
            tracing::trace!(state = %self.state, ?cause, "navigation left state unchanged");
            return;
        }

        let from = std::mem::replace(&mut self.state, next);
        let change = StateChange {
            from,
            to: self.state.clone(),
            cause,
            at: Utc::now(),
        };

        tracing::debug!(from = %change.from, to = %change.to, ?cause, "navigated");
        self.events.publish(&change);
    }
}

impl std::fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("state", &self.state)
            .field("panels", &self.panels)
            .field("persistence", &self.panel_store.is_some())
            .field("subscribers", &self.events.len())
            .finish_non_exhaustive()
    }
}
