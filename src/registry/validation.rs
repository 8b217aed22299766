//! Accumulating validation of route tables.
//!
//! Every rule is checked independently and all violations are reported
//! together, so a broken table is fixed in one pass rather than one error
//! at a time.

use crate::core::{RouteEntry, Tab};
use crate::registry::error::ConfigViolation;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single validation rule.
pub type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check(passes: bool, violation: impl FnOnce() -> ConfigViolation) -> Check {
    if passes {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Validate a full route table, accumulating ALL violations.
pub fn validate_routes(routes: &[RouteEntry]) -> Check {
    let mut checks: Vec<Check> = Vec::new();
    let mut seen = HashSet::new();

    for (position, route) in routes.iter().enumerate() {
        checks.push(check(!route.id.as_str().is_empty(), || {
            ConfigViolation::EmptyRouteId { position }
        }));
        checks.push(check(seen.insert(route.id.as_str()), || {
            ConfigViolation::DuplicateRoute {
                route: route.id.to_string(),
            }
        }));
        checks.extend(route_checks(route));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn route_checks(route: &RouteEntry) -> Vec<Check> {
    let mut checks = Vec::new();
    let mut seen = HashSet::new();

    for tab in &route.tabs {
        checks.push(check(!tab.id.is_empty(), || ConfigViolation::EmptyTabId {
            route: route.id.to_string(),
        }));
        checks.push(check(seen.insert(tab.id.as_str()), || {
            ConfigViolation::DuplicateTab {
                route: route.id.to_string(),
                tab: tab.id.clone(),
            }
        }));
        checks.extend(tab_checks(route, tab));
    }

    if let Some(default) = route.default_tab_id.as_deref() {
        checks.push(check(route.tab(default).is_some(), || {
            ConfigViolation::UnknownDefaultTab {
                route: route.id.to_string(),
                tab: default.to_string(),
            }
        }));
    }

    checks
}

fn tab_checks(route: &RouteEntry, tab: &Tab) -> Vec<Check> {
    let mut checks = Vec::new();
    let mut seen = HashSet::new();

    for sub_tab in &tab.sub_tabs {
        checks.push(check(seen.insert(sub_tab.id.as_str()), || {
            ConfigViolation::DuplicateSubTab {
                route: route.id.to_string(),
                tab: tab.id.clone(),
                sub_tab: sub_tab.id.clone(),
            }
        }));
    }

    if let Some(default) = tab.default_sub_tab() {
        checks.push(check(tab.sub_tab(default).is_some(), || {
            ConfigViolation::UnknownDefaultSubTab {
                route: route.id.to_string(),
                tab: tab.id.clone(),
                sub_tab: default.to_string(),
            }
        }));
    }

    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SubTab;

    #[test]
    fn valid_table_passes() {
        let routes = vec![
            RouteEntry::new("home", "Home", "home"),
            RouteEntry::new("hiring", "Hiring", "hiring")
                .with_tab(Tab::new("openings", "Job Openings"))
                .with_default_tab("openings"),
        ];

        assert!(validate_routes(&routes).is_success());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let routes = vec![
            RouteEntry::new("home", "Home", "home"),
            RouteEntry::new("home", "Home again", "home"),
            RouteEntry::new("hiring", "Hiring", "hiring")
                .with_tab(Tab::new("openings", "Job Openings"))
                .with_tab(Tab::new("openings", "Openings"))
                .with_default_tab("pipeline"),
        ];

        match validate_routes(&routes) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::DuplicateRoute { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::DuplicateTab { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::UnknownDefaultTab { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn unknown_default_sub_tab_is_reported() {
        let routes = vec![RouteEntry::new("settings", "Settings", "gear").with_tab(
            Tab::new("account", "Account")
                .with_sub_tab(SubTab::new("account-info", "Account Info"))
                .with_default_sub_tab("billing"),
        )];

        match validate_routes(&routes) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.iter().any(|e| *e
                    == ConfigViolation::UnknownDefaultSubTab {
                        route: "settings".to_string(),
                        tab: "account".to_string(),
                        sub_tab: "billing".to_string(),
                    }));
            }
            Validation::Success(_) => panic!("Expected failure, got success"),
        }
    }

    #[test]
    fn empty_ids_are_reported() {
        let routes = vec![RouteEntry::new("", "Nameless", "none")
            .with_tab(Tab::new("", "Blank"))];

        match validate_routes(&routes) {
            Validation::Failure(errors) => {
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::EmptyRouteId { position: 0 })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::EmptyTabId { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn duplicate_sub_tabs_are_reported() {
        let routes = vec![RouteEntry::new("settings", "Settings", "gear").with_tab(
            Tab::new("account", "Account")
                .with_sub_tab(SubTab::new("billing", "Billing"))
                .with_sub_tab(SubTab::new("billing", "Billing")),
        )];

        assert!(validate_routes(&routes).is_failure());
    }
}
