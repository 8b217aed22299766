//! Breadcrumb trails projected from navigation state.
//!
//! Builders here are pure functions over the route registry. Collapsing a
//! trail to a given crumb is performed by the controller, which owns state.

use crate::core::{NavigationState, RouteEntry};
use crate::registry::{RegistryError, RouteConfig};
use serde::{Deserialize, Serialize};

/// One clickable entry in a breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub id: String,
    pub label: String,
}

impl BreadcrumbItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// How many levels a trail represents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BreadcrumbDepth {
    /// Route and tab only; a selected sub-tab gets no crumb.
    RouteAndTab,
    /// Route, tab and, when selected, sub-tab.
    #[default]
    Full,
}

/// The navigation level a crumb position stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreadcrumbLevel {
    Route,
    Tab,
    SubTab,
}

impl BreadcrumbLevel {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Route),
            1 => Some(Self::Tab),
            2 => Some(Self::SubTab),
            _ => None,
        }
    }
}

/// Build the trail for one route entry.
///
/// The route crumb always comes first. A tab crumb follows when `tab_id`
/// resolves to a tab of `entry`, and with [`BreadcrumbDepth::Full`] a
/// sub-tab crumb follows when `sub_tab_id` resolves to a sub-tab of that
/// tab. Unresolved selections (permissive navigation) end the trail early.
pub fn trail_for_entry(
    entry: &RouteEntry,
    tab_id: Option<&str>,
    sub_tab_id: Option<&str>,
    depth: BreadcrumbDepth,
) -> Vec<BreadcrumbItem> {
    let mut trail = vec![BreadcrumbItem::new(entry.id.as_str(), entry.label.as_str())];

    let Some(tab) = tab_id.and_then(|id| entry.tab(id)) else {
        return trail;
    };
    trail.push(BreadcrumbItem::new(tab.id.as_str(), tab.label.as_str()));

    if depth == BreadcrumbDepth::Full {
        if let Some(sub_tab) = sub_tab_id.and_then(|id| tab.sub_tab(id)) {
            trail.push(BreadcrumbItem::new(
                sub_tab.id.as_str(),
                sub_tab.label.as_str(),
            ));
        }
    }

    trail
}

/// Build the route-and-tab trail for `route_id`.
///
/// The route crumb always comes first. A tab crumb is appended only when
/// `tab_id` resolves to a tab of that route.
///
/// # Example
///
/// ```rust
/// use navstate::breadcrumb::{build_breadcrumb_path, BreadcrumbItem};
/// use navstate::registry::RouteConfig;
///
/// let routes = RouteConfig::hr_default();
///
/// let trail = build_breadcrumb_path(&routes, "hiring", Some("candidates")).unwrap();
/// assert_eq!(
///     trail,
///     vec![
///         BreadcrumbItem::new("hiring", "Hiring"),
///         BreadcrumbItem::new("candidates", "Candidates"),
///     ]
/// );
///
/// let trail = build_breadcrumb_path(&routes, "hiring", Some("payroll")).unwrap();
/// assert_eq!(trail.len(), 1);
/// ```
pub fn build_breadcrumb_path(
    routes: &RouteConfig,
    route_id: &str,
    tab_id: Option<&str>,
) -> Result<Vec<BreadcrumbItem>, RegistryError> {
    let entry = routes.route_entry(route_id)?;
    Ok(trail_for_entry(entry, tab_id, None, BreadcrumbDepth::RouteAndTab))
}

/// Build the trail for a full navigation state at the requested depth.
pub fn build_breadcrumb_trail(
    routes: &RouteConfig,
    state: &NavigationState,
    depth: BreadcrumbDepth,
) -> Result<Vec<BreadcrumbItem>, RegistryError> {
    let entry = routes.route_entry(state.route.as_str())?;
    Ok(trail_for_entry(
        entry,
        state.tab.as_deref(),
        state.sub_tab.as_deref(),
        depth,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RouteId;

    fn state(route: &str, tab: Option<&str>, sub_tab: Option<&str>) -> NavigationState {
        NavigationState {
            route: RouteId::new(route),
            tab: tab.map(str::to_string),
            sub_tab: sub_tab.map(str::to_string),
        }
    }

    #[test]
    fn leaf_route_trail_has_only_route_crumb() {
        let routes = RouteConfig::hr_default();
        let trail = build_breadcrumb_path(&routes, "home", None).unwrap();

        assert_eq!(trail, vec![BreadcrumbItem::new("home", "Home")]);
    }

    #[test]
    fn unknown_route_is_an_error() {
        let routes = RouteConfig::hr_default();
        assert!(build_breadcrumb_path(&routes, "payroll", None).is_err());
    }

    #[test]
    fn full_trail_includes_sub_tab() {
        let routes = RouteConfig::hr_default();
        let trail = build_breadcrumb_trail(
            &routes,
            &state("settings", Some("account"), Some("billing")),
            BreadcrumbDepth::Full,
        )
        .unwrap();

        let ids: Vec<&str> = trail.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["settings", "account", "billing"]);
        assert_eq!(trail[2].label, "Billing");
    }

    #[test]
    fn route_and_tab_depth_omits_sub_tab() {
        let routes = RouteConfig::hr_default();
        let trail = build_breadcrumb_trail(
            &routes,
            &state("settings", Some("account"), Some("billing")),
            BreadcrumbDepth::RouteAndTab,
        )
        .unwrap();

        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn unresolved_sub_tab_gets_no_crumb() {
        let routes = RouteConfig::hr_default();
        let trail = build_breadcrumb_trail(
            &routes,
            &state("settings", Some("account"), Some("payroll")),
            BreadcrumbDepth::Full,
        )
        .unwrap();

        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn level_from_index() {
        assert_eq!(BreadcrumbLevel::from_index(0), Some(BreadcrumbLevel::Route));
        assert_eq!(BreadcrumbLevel::from_index(1), Some(BreadcrumbLevel::Tab));
        assert_eq!(BreadcrumbLevel::from_index(2), Some(BreadcrumbLevel::SubTab));
        assert_eq!(BreadcrumbLevel::from_index(3), None);
    }

    #[test]
    fn depth_deserializes_from_kebab_case() {
        let depth: BreadcrumbDepth = serde_json::from_str(r#""route-and-tab""#).unwrap();
        assert_eq!(depth, BreadcrumbDepth::RouteAndTab);
        assert_eq!(BreadcrumbDepth::default(), BreadcrumbDepth::Full);
    }
}
