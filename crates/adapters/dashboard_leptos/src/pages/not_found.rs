use leptos::prelude::*;
use leptos_router::components::A;

/// Fallback for unknown routes.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div>
            <h1>"Page not found"</h1>
            <A href="/">"Back to the query form"</A>
        </div>
    }
}
