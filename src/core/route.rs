//! Route, tab and sub-tab definitions.
//!
//! These are plain immutable values describing the navigation hierarchy.
//! They carry no behaviour beyond pure lookups over their own children.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a top-level navigational destination.
///
/// The set of valid ids is closed: it is exactly the set of routes
/// registered in a [`RouteConfig`](crate::registry::RouteConfig).
///
/// # Example
///
/// ```rust
/// use navstate::core::RouteId;
///
/// let id = RouteId::new("hiring");
/// assert_eq!(id.as_str(), "hiring");
/// assert_eq!(id, RouteId::from("hiring"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RouteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RouteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Opaque reference to an icon; resolved by the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Third-level selection within a tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTab {
    pub id: String,
    pub label: String,
}

impl SubTab {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Second-level selection within a route.
///
/// Any tab may declare sub-tabs. When `default_sub_tab_id` is set, selecting
/// the tab seeds that sub-tab; otherwise the sub-tab selection is cleared.
///
/// # Example
///
/// ```rust
/// use navstate::core::{SubTab, Tab};
///
/// let account = Tab::new("account", "Account")
///     .with_sub_tab(SubTab::new("account-info", "Account Info"))
///     .with_sub_tab(SubTab::new("billing", "Billing"))
///     .with_default_sub_tab("account-info");
///
/// assert_eq!(account.default_sub_tab(), Some("account-info"));
/// assert!(account.sub_tab("billing").is_some());
/// assert!(account.sub_tab("payroll").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_tabs: Vec<SubTab>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sub_tab_id: Option<String>,
}

impl Tab {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sub_tabs: Vec::new(),
            default_sub_tab_id: None,
        }
    }

    pub fn with_sub_tab(mut self, sub_tab: SubTab) -> Self {
        self.sub_tabs.push(sub_tab);
        self
    }

    pub fn with_default_sub_tab(mut self, id: impl Into<String>) -> Self {
        self.default_sub_tab_id = Some(id.into());
        self
    }

    /// Look up a sub-tab of this tab by id.
    pub fn sub_tab(&self, id: &str) -> Option<&SubTab> {
        self.sub_tabs.iter().find(|s| s.id == id)
    }

    /// The sub-tab seeded when this tab becomes selected.
    pub fn default_sub_tab(&self) -> Option<&str> {
        self.default_sub_tab_id.as_deref()
    }
}

/// Registry entry for one route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub id: RouteId,
    pub label: String,
    pub icon: IconRef,
    #[serde(default)]
    pub tabs: Vec<Tab>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tab_id: Option<String>,
}

impl RouteEntry {
    pub fn new(
        id: impl Into<RouteId>,
        label: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: IconRef::new(icon),
            tabs: Vec::new(),
            default_tab_id: None,
        }
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.tabs.push(tab);
        self
    }

    pub fn with_default_tab(mut self, id: impl Into<String>) -> Self {
        self.default_tab_id = Some(id.into());
        self
    }

    pub fn tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// Configured default tab, else the first tab, else `None` for leaves.
    pub fn default_tab(&self) -> Option<&str> {
        self.default_tab_id
            .as_deref()
            .or_else(|| self.tabs.first().map(|t| t.id.as_str()))
    }

    pub fn is_leaf(&self) -> bool {
        self.tabs.is_empty()
    }
}
