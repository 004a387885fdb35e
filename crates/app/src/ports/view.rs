//! View ports: where controllers apply their render models.
//!
//! Implementations are thin: they draw what they are given and never
//! reshape data.

use ripdash_domain::render::{Banner, RouterCard, RoutingTable};
use ripdash_domain::router::RouterSelection;

/// UI driven by the [`QueryController`](crate::services::query_controller::QueryController).
pub trait QueryView {
    /// Blocking user alert (validation and authorization failures).
    fn alert(&self, message: &str);

    /// Reveal the token and router sections after a successful login.
    fn show_authenticated(&self);

    /// Fill the router selector.
    fn set_router_options(&self, options: &[RouterSelection]);

    /// Replace the text of the output area.
    fn set_output(&self, text: &str);
}

/// UI driven by the [`DashboardPoller`](crate::services::dashboard_poller::DashboardPoller).
pub trait DashboardView {
    /// Replace the router list with these cards.
    fn render_routers(&self, cards: &[RouterCard]);

    /// Replace the routing-table region.
    fn render_routing_table(&self, table: &RoutingTable);

    /// Prepend a dismissible error banner.
    fn show_banner(&self, banner: &Banner);
}

impl<T: QueryView> QueryView for std::sync::Arc<T> {
    fn alert(&self, message: &str) {
        (**self).alert(message);
    }

    fn show_authenticated(&self) {
        (**self).show_authenticated();
    }

    fn set_router_options(&self, options: &[RouterSelection]) {
        (**self).set_router_options(options);
    }

    fn set_output(&self, text: &str) {
        (**self).set_output(text);
    }
}

impl<T: DashboardView> DashboardView for std::sync::Arc<T> {
    fn render_routers(&self, cards: &[RouterCard]) {
        (**self).render_routers(cards);
    }

    fn render_routing_table(&self, table: &RoutingTable) {
        (**self).render_routing_table(table);
    }

    fn show_banner(&self, banner: &Banner) {
        (**self).show_banner(banner);
    }
}
