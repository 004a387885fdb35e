//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

/// Links to the query form and the router dashboard.
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <span class="nav-brand">"ripdash"</span>
            <A href="/">"Query"</A>
            <A href="/dashboard">"Dashboard"</A>
        </nav>
    }
}
