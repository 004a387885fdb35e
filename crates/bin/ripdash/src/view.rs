//! Terminal views: render models printed as plain text.
//!
//! Query output and router data go to stdout; alerts and banners go to
//! stderr so the output stays pipeable.

use ripdash_app::ports::{DashboardView, QueryView};
use ripdash_domain::render::{BadgeStyle, Banner, RouterCard, RoutingTable};
use ripdash_domain::router::RouterSelection;

/// Stdout/stderr view for the query commands.
pub struct TerminalQueryView;

impl QueryView for TerminalQueryView {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    fn show_authenticated(&self) {
        eprintln!("Authenticated.");
    }

    fn set_router_options(&self, options: &[RouterSelection]) {
        for option in options {
            println!("{option}");
        }
    }

    fn set_output(&self, text: &str) {
        println!("{text}");
    }
}

/// Stdout/stderr view for `watch`.
pub struct TerminalDashboardView;

impl DashboardView for TerminalDashboardView {
    fn render_routers(&self, cards: &[RouterCard]) {
        println!("{}", format_cards(cards));
    }

    fn render_routing_table(&self, table: &RoutingTable) {
        println!("{}", format_table(table));
    }

    fn show_banner(&self, banner: &Banner) {
        eprintln!("{}", format_banner(banner));
    }
}

fn badge(card: &RouterCard) -> &'static str {
    match card.badge {
        BadgeStyle::Success => "+",
        BadgeStyle::Danger => "!",
    }
}

/// One line per router; an empty list prints a placeholder.
pub fn format_cards(cards: &[RouterCard]) -> String {
    if cards.is_empty() {
        return "(no routers)".to_string();
    }
    cards
        .iter()
        .map(|card| {
            format!(
                "[{}] {:<4} {:<16} {:<16} {}",
                badge(card),
                card.router_id.as_str(),
                card.name,
                card.ip_address,
                card.status
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header line followed by one line per route; unreachable routes are marked.
pub fn format_table(table: &RoutingTable) -> String {
    let [destination, next_hop, metric] = table.headers;
    let mut lines = vec![format!("{destination:<18} {next_hop:<18} {metric}")];
    lines.extend(table.rows.iter().map(|row| {
        let marker = if row.reachable { "" } else { " (unreachable)" };
        format!(
            "{:<18} {:<18} {}{marker}",
            row.destination, row.next_hop, row.metric
        )
    }));
    lines.join("\n")
}

pub fn format_banner(banner: &Banner) -> String {
    format!("error: {}", banner.message)
}
