//! The HR product's built-in route table.

use crate::core::{RouteEntry, SubTab, Tab};
use crate::registry::RouteConfig;

/// Storage key of the persisted route -> last-visited tab map.
pub const PANEL_STORAGE_KEY: &str = "lastVisitedSubPanels";

/// Storage key of the "navigation rail expanded" flag.
pub const RAIL_STORAGE_KEY: &str = "navRailExpanded";

/// Ids of the built-in routes.
pub mod route_ids {
    pub const HOME: &str = "home";
    pub const MY_INFO: &str = "my-info";
    pub const PEOPLE: &str = "people";
    pub const HIRING: &str = "hiring";
    pub const REPORTS: &str = "reports";
    pub const FILES: &str = "files";
    pub const SETTINGS: &str = "settings";
}

fn tab(id: &str, label: &str) -> Tab {
    Tab::new(id, label)
}

fn hr_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new(route_ids::HOME, "Home", "home"),
        RouteEntry::new(route_ids::MY_INFO, "My Info", "user-circle")
            .with_tab(tab("personal", "Personal"))
            .with_tab(tab("job", "Job"))
            .with_tab(tab("time-off", "Time Off"))
            .with_tab(tab("documents", "Documents"))
            .with_tab(tab("benefits", "Benefits"))
            .with_tab(tab("training", "Training"))
            .with_tab(tab("assets", "Assets"))
            .with_tab(tab("notes", "Notes")),
        RouteEntry::new(route_ids::PEOPLE, "People", "users")
            .with_tab(tab("directory", "Directory"))
            .with_tab(tab("org-chart", "Org Chart")),
        RouteEntry::new(route_ids::HIRING, "Hiring", "id-badge")
            .with_tab(tab("openings", "Job Openings"))
            .with_tab(tab("candidates", "Candidates"))
            .with_tab(tab("talent-pools", "Talent Pools"))
            .with_default_tab("openings"),
        RouteEntry::new(route_ids::REPORTS, "Reports", "chart-pie")
            .with_tab(tab("insights", "Insights"))
            .with_tab(tab("standard", "Standard Reports"))
            .with_tab(tab("custom", "Custom Reports")),
        RouteEntry::new(route_ids::FILES, "Files", "folder"),
        RouteEntry::new(route_ids::SETTINGS, "Settings", "gear")
            .with_tab(
                tab("account", "Account")
                    .with_sub_tab(SubTab::new("account-info", "Account Info"))
                    .with_sub_tab(SubTab::new("billing", "Billing"))
                    .with_sub_tab(SubTab::new("company-info", "Company Info"))
                    .with_sub_tab(SubTab::new("access-levels", "Access Levels"))
                    .with_sub_tab(SubTab::new("apps", "Apps"))
                    .with_default_sub_tab("account-info"),
            )
            .with_tab(tab("benefits", "Benefits"))
            .with_tab(tab("time-off", "Time Off"))
            .with_tab(tab("employee-fields", "Employee Fields"))
            .with_tab(tab("approvals", "Approvals"))
            .with_tab(tab("email-alerts", "Email Alerts")),
    ]
}

impl RouteConfig {
    /// The HR product's route table.
    pub fn hr_default() -> Self {
        RouteConfig::new(hr_routes()).expect("built-in route table should always validate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hr_default_registers_every_route_id() {
        let routes = RouteConfig::hr_default();

        for id in [
            route_ids::HOME,
            route_ids::MY_INFO,
            route_ids::PEOPLE,
            route_ids::HIRING,
            route_ids::REPORTS,
            route_ids::FILES,
            route_ids::SETTINGS,
        ] {
            assert!(routes.contains(id), "missing route {id}");
        }
        assert_eq!(routes.len(), 7);
    }

    #[test]
    fn home_and_files_are_leaves() {
        let routes = RouteConfig::hr_default();

        assert!(routes.is_leaf_route(route_ids::HOME).unwrap());
        assert!(routes.is_leaf_route(route_ids::FILES).unwrap());
        assert!(!routes.is_leaf_route(route_ids::SETTINGS).unwrap());
    }

    #[test]
    fn settings_account_declares_default_sub_tab() {
        let routes = RouteConfig::hr_default();
        let account = routes.tab(route_ids::SETTINGS, "account").unwrap().unwrap();

        assert_eq!(account.default_sub_tab(), Some("account-info"));
        assert_eq!(account.sub_tabs.len(), 5);
    }

    #[test]
    fn only_settings_account_has_sub_tabs() {
        let routes = RouteConfig::hr_default();
        let with_sub_tabs: Vec<String> = routes
            .routes()
            .iter()
            .flat_map(|r| {
                r.tabs
                    .iter()
                    .filter(|t| !t.sub_tabs.is_empty())
                    .map(move |t| format!("{}/{}", r.id, t.id))
            })
            .collect();

        assert_eq!(with_sub_tabs, vec!["settings/account".to_string()]);
    }
}
