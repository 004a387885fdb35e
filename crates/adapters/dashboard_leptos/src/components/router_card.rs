//! One router of the dashboard list.

use leptos::prelude::*;
use ripdash_domain::render::RouterCard;
use ripdash_domain::router::RouterId;

#[component]
pub fn RouterCardView(
    /// The card to display.
    card: RouterCard,
    /// Called with the router id when "View Routes" is clicked.
    #[prop(into)]
    on_view_routes: Callback<RouterId>,
) -> impl IntoView {
    let badge_class = format!("badge {}", card.badge.css_class());
    let router_id = card.router_id;

    view! {
        <div class="router-item mb-3">
            <h6>{card.name}</h6>
            <p>"IP: " {card.ip_address}</p>
            <p>"Status: " <span class=badge_class>{card.status}</span></p>
            <button
                class="btn btn-sm btn-primary"
                on:click=move |_| on_view_routes.run(router_id.clone())
            >
                "View Routes"
            </button>
        </div>
    }
}
