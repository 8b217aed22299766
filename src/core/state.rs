//! The navigation state triple and its pure derivation rules.
//!
//! A [`NavigationState`] is a plain value. The controller replaces it
//! wholesale on each transition, so every rule for computing a new state
//! lives here as a pure function of the route table.

use super::route::{RouteEntry, RouteId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which route, tab and sub-tab are currently selected.
///
/// # Invariants
///
/// - `tab` is `None` only when the route is a leaf.
/// - `tab`, when set, names a tab of `route`.
/// - `sub_tab`, when set, names a sub-tab of `tab`.
///
/// The controller upholds these under [`TargetPolicy::Strict`](crate::config::TargetPolicy);
/// [`is_consistent_with`](Self::is_consistent_with) checks them.
///
/// # Example
///
/// ```rust
/// use navstate::core::{NavigationState, RouteEntry, SubTab, Tab};
///
/// let settings = RouteEntry::new("settings", "Settings", "gear")
///     .with_tab(
///         Tab::new("account", "Account")
///             .with_sub_tab(SubTab::new("account-info", "Account Info"))
///             .with_default_sub_tab("account-info"),
///     )
///     .with_tab(Tab::new("benefits", "Benefits"));
///
/// let state = NavigationState::landing(&settings);
/// assert_eq!(state.tab.as_deref(), Some("account"));
/// assert_eq!(state.sub_tab.as_deref(), Some("account-info"));
/// assert_eq!(state.path(), "settings/account/account-info");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub route: RouteId,
    pub tab: Option<String>,
    pub sub_tab: Option<String>,
}

impl NavigationState {
    /// State reached by entering `entry` with no remembered panel:
    /// the default tab and that tab's default sub-tab.
    pub fn landing(entry: &RouteEntry) -> Self {
        let tab = entry.default_tab().map(str::to_string);
        Self::at_tab(entry, tab)
    }

    /// State for `entry` with `tab` selected and the sub-tab reseeded.
    ///
    /// An unresolved tab id (permissive navigation) seeds no sub-tab.
    pub fn at_tab(entry: &RouteEntry, tab: Option<String>) -> Self {
        let sub_tab = tab
            .as_deref()
            .and_then(|id| seeded_sub_tab(entry, id))
            .map(str::to_string);
        Self {
            route: entry.id.clone(),
            tab,
            sub_tab,
        }
    }

    /// Slash-joined path of the selected levels, e.g. `hiring/openings`.
    pub fn path(&self) -> String {
        let mut path = self.route.as_str().to_string();
        for level in [&self.tab, &self.sub_tab].into_iter().flatten() {
            path.push('/');
            path.push_str(level);
        }
        path
    }

    /// Check the state invariants against the route it claims to be on.
    pub fn is_consistent_with(&self, entry: &RouteEntry) -> bool {
        if entry.id != self.route {
            return false;
        }

        match self.tab.as_deref() {
            None => entry.is_leaf() && self.sub_tab.is_none(),
            Some(tab_id) => match entry.tab(tab_id) {
                None => false,
                Some(tab) => self
                    .sub_tab
                    .as_deref()
                    .is_none_or(|sub| tab.sub_tab(sub).is_some()),
            },
        }
    }
}

impl fmt::Display for NavigationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// The sub-tab seeded when `tab_id` of `entry` becomes selected.
pub fn seeded_sub_tab<'a>(entry: &'a RouteEntry, tab_id: &str) -> Option<&'a str> {
    entry.tab(tab_id).and_then(|t| t.default_sub_tab())
}
