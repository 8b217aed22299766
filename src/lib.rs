//! Navstate: a configuration-driven navigation state machine
//!
//! Navstate tracks which route, tab and sub-tab of an application is
//! selected, derives default selections from a static route table, builds
//! breadcrumb trails, and optionally remembers the last visited panel per
//! route across sessions. Any number of presentation shells can share one
//! route table and drive one controller; they render whatever state it
//! reports and never encode navigation policy themselves.
//!
//! # Core Concepts
//!
//! - **Registry**: An immutable, validated [`RouteConfig`] of routes, tabs and sub-tabs
//! - **Controller**: The [`NavigationController`] state machine shells call into
//! - **Breadcrumbs**: Pure projections of the current selection
//! - **Persistence**: Best-effort storage behind the [`KeyValueStore`] port
//!
//! # Example
//!
//! ```rust
//! use navstate::breadcrumb::BreadcrumbItem;
//! use navstate::{NavigationController, RouteConfig};
//! use std::sync::Arc;
//!
//! let routes = Arc::new(RouteConfig::hr_default());
//! let mut nav = NavigationController::new(routes).unwrap();
//!
//! nav.navigate_to_route("hiring").unwrap();
//! nav.navigate_to_tab("candidates").unwrap();
//!
//! assert_eq!(
//!     nav.breadcrumbs(),
//!     vec![
//!         BreadcrumbItem::new("hiring", "Hiring"),
//!         BreadcrumbItem::new("candidates", "Candidates"),
//!     ]
//! );
//! assert!(nav.navigate_to_tab("payroll").is_err());
//! ```

pub mod breadcrumb;
pub mod config;
pub mod controller;
pub mod core;
pub mod persistence;
pub mod registry;

// Re-export commonly used types
pub use crate::breadcrumb::{BreadcrumbDepth, BreadcrumbItem};
pub use crate::config::{NavigatorConfig, TargetPolicy};
pub use crate::controller::{NavRail, NavigationController, NavigationError, StateChange};
pub use crate::core::{NavigationState, RouteEntry, RouteId, SubTab, Tab};
pub use crate::persistence::{KeyValueStore, MemoryStore, PanelPersistenceStore};
pub use crate::registry::{RegistryError, RouteConfig};
