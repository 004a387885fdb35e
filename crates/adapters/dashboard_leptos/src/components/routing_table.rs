//! Routing table of the selected router.

use leptos::prelude::*;
use ripdash_domain::render::RoutingTable;

/// Headers plus one row per route, in backend order.
#[component]
pub fn RoutingTableView(
    /// The table to display.
    table: RoutingTable,
) -> impl IntoView {
    let [destination, next_hop, metric] = table.headers;

    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>{destination}</th>
                    <th>{next_hop}</th>
                    <th>{metric}</th>
                </tr>
            </thead>
            <tbody>
                {table.rows.into_iter().map(|row| {
                    let class = if row.reachable { "" } else { "route-unreachable" };
                    view! {
                        <tr class=class>
                            <td>{row.destination}</td>
                            <td>{row.next_hop}</td>
                            <td>{row.metric}</td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
