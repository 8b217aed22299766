//! The stateful navigation core.
//!
//! This module is the "imperative shell" around the pure data model:
//! - [`NavigationController`] owns the current selection and applies
//!   navigation operations against the route registry
//! - [`EventBus`] delivers state-change notifications to subscribed shells
//! - [`NavRail`] holds the shared rail toggle
//!
//! Storage is injected through the builder, never reached for globally.

mod builder;
mod error;
mod events;
mod navigator;
mod rail;

pub use builder::NavigationControllerBuilder;
pub use error::{NavigationError, TargetLevel};
pub use events::{EventBus, NavigationCause, StateChange, SubscriptionId};
pub use navigator::NavigationController;
pub use rail::NavRail;
