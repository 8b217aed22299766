//! Core navigation data model.
//!
//! This module contains the pure values the rest of the crate is built on:
//! - Route, tab and sub-tab definitions
//! - The navigation state triple and its derivation rules
//!
//! Nothing in this module performs I/O or holds mutable state.

mod route;
mod state;

pub use route::{IconRef, RouteEntry, RouteId, SubTab, Tab};
pub use state::{seeded_sub_tab, NavigationState};
