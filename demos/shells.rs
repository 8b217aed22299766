//! Three Shells, One Controller
//!
//! This example shows three presentation shells deriving identical
//! navigation from a single controller and route table.
//!
//! Key concepts:
//! - Shells are view adapters: they render controller state, nothing more
//! - Every navigation goes through the controller's operations
//! - Shells learn about changes by subscribing, not by polling storage
//! - The last visited panel per route is remembered across "sessions"
//!
//! Run with: cargo run --example shells
//! Set RUST_LOG=navstate=debug to see transitions logged.

use navstate::controller::{NavRail, NavigationController};
use navstate::persistence::MemoryStore;
use navstate::registry::{RouteConfig, RAIL_STORAGE_KEY};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// A presentation shell renders whatever the controller reports.
trait Shell {
    fn name(&self) -> &'static str;
    fn render(&self, nav: &NavigationController, rail: &NavRail) -> String;
}

/// Route picker in a dropdown, tabs listed beneath it.
struct DropdownShell;

impl Shell for DropdownShell {
    fn name(&self) -> &'static str {
        "dropdown"
    }

    fn render(&self, nav: &NavigationController, _rail: &NavRail) -> String {
        let tabs: Vec<String> = nav
            .available_tabs()
            .iter()
            .map(|tab| {
                if Some(tab.id.as_str()) == nav.current_tab() {
                    format!("({})", tab.label)
                } else {
                    tab.label.clone()
                }
            })
            .collect();
        format!("[{} v] {}", nav.current_route(), tabs.join(" "))
    }
}

/// Collapsible side panels; the rail flag decides whether labels show.
struct PanelShell;

impl Shell for PanelShell {
    fn name(&self) -> &'static str {
        "panels"
    }

    fn render(&self, nav: &NavigationController, rail: &NavRail) -> String {
        let marker = if rail.is_expanded() { "<<" } else { ">>" };
        let sub_tabs: Vec<&str> = nav
            .available_sub_tabs()
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        format!(
            "{marker} {} | panel: {} | sub-panels: [{}]",
            nav.state(),
            nav.current_tab().unwrap_or("-"),
            sub_tabs.join(", ")
        )
    }
}

/// Horizontal tab strip under a breadcrumb trail.
struct TabStripShell;

impl Shell for TabStripShell {
    fn name(&self) -> &'static str {
        "tabs"
    }

    fn render(&self, nav: &NavigationController, _rail: &NavRail) -> String {
        let trail: Vec<String> = nav.breadcrumbs().into_iter().map(|c| c.label).collect();
        let leaf = if nav.is_current_route_leaf() { " (leaf)" } else { "" };
        format!("{}{leaf}", trail.join(" > "))
    }
}

fn render_all(shells: &[Box<dyn Shell>], nav: &NavigationController, rail: &NavRail) {
    for shell in shells {
        println!("  {:>8}: {}", shell.name(), shell.render(nav, rail));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Three Shells, One Controller ===\n");

    let routes = Arc::new(RouteConfig::hr_default());
    let storage = Arc::new(MemoryStore::new());
    let shells: Vec<Box<dyn Shell>> =
        vec![Box::new(DropdownShell), Box::new(PanelShell), Box::new(TabStripShell)];

    let mut nav = NavigationController::builder(Arc::clone(&routes))
        .storage(storage.clone())
        .build()?;
    let mut rail = NavRail::with_store(storage.clone(), RAIL_STORAGE_KEY);

    nav.subscribe(|change| {
        println!("  [event] {} -> {} ({:?})", change.from, change.to, change.cause);
    });
    rail.subscribe(|expanded| println!("  [event] rail expanded = {expanded}"));

    println!("Session 1: start");
    render_all(&shells, &nav, &rail);

    println!("\nSession 1: open Settings");
    nav.navigate_to_route("settings")?;
    render_all(&shells, &nav, &rail);

    println!("\nSession 1: pick Billing, expand rail");
    nav.navigate_to_sub_tab("billing")?;
    rail.toggle();
    render_all(&shells, &nav, &rail);

    println!("\nSession 1: open Hiring > Candidates");
    nav.navigate_to_route("hiring")?;
    nav.navigate_to_tab("candidates")?;
    render_all(&shells, &nav, &rail);

    println!("\nSession 1: a typo from a shell is caught at the boundary");
    if let Err(e) = nav.navigate_to_tab("candiates") {
        println!("  rejected: {e}");
    }

    drop(nav);
    drop(rail);

    println!("\nSession 2: reopen and return to Hiring");
    let mut nav = NavigationController::builder(routes).storage(storage.clone()).build()?;
    let rail = NavRail::with_store(storage, RAIL_STORAGE_KEY);
    nav.navigate_to_route("hiring")?;
    render_all(&shells, &nav, &rail);

    println!("\nSession 2: breadcrumb back to the route level");
    nav.navigate_to_breadcrumb(0)?;
    render_all(&shells, &nav, &rail);

    println!("\n=== Example Complete ===");
    Ok(())
}
