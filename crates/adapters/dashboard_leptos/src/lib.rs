//! # ripdash-dashboard
//!
//! Browser front end (Leptos CSR) for the RIP-to-REST backend: the login and
//! query form, and the polling router dashboard.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod browser;
mod components;
mod pages;

use components::Nav;
use pages::{Dashboard, NotFound, Query};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Query/>
                    <Route path=path!("dashboard") view=Dashboard/>
                </Routes>
            </main>
        </Router>
    }
}
