//! Router dashboard: cards refreshed every 30 seconds, routing table on demand.
//!
//! The token is read from `localStorage` once when the page mounts. Every
//! tick starts its own fetch, so a stalled request never delays the next one.
//! The poll loop ends when the page is unmounted.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ripdash_domain::render::{self, Banner, DashboardFetch, RouterCard, RoutingTable};
use ripdash_domain::router::RouterId;

use crate::components::{BannerList, RouterCardView, RoutingTableView, push_banner};
use crate::{api, browser};

/// Delay between router list refreshes.
const POLL_INTERVAL_MS: u32 = 30_000;

#[component]
pub fn Dashboard() -> impl IntoView {
    let token = browser::load_token();
    if token.is_none() {
        leptos::logging::warn!("no stored token, dashboard requests are unauthenticated");
    }
    let token = StoredValue::new(token);

    let cards = RwSignal::new(None::<Vec<RouterCard>>);
    let table = RwSignal::new(None::<RoutingTable>);
    let banners = RwSignal::new(Vec::<(u32, Banner)>::new());

    let fetch_failed = move |fetch: DashboardFetch, err: api::ApiError| {
        leptos::logging::error!("error fetching {fetch}: {err}");
        push_banner(banners, fetch.failure_banner());
    };

    let refresh_routers = move || async move {
        let Some(token) = token.try_get_value() else {
            return;
        };
        match api::fetch_routers(token.as_ref()).await {
            Ok(routers) => cards.set(Some(render::router_cards(&routers))),
            Err(err) => fetch_failed(DashboardFetch::Routers, err),
        }
    };

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = Arc::clone(&alive);
        move || alive.store(false, Ordering::Relaxed)
    });
    spawn_local(async move {
        while alive.load(Ordering::Relaxed) {
            spawn_local(refresh_routers());
            TimeoutFuture::new(POLL_INTERVAL_MS).await;
        }
    });

    let view_routes = Callback::new(move |router_id: RouterId| {
        let token = token.get_value();
        spawn_local(async move {
            match api::fetch_routes(&router_id, token.as_ref()).await {
                Ok(routes) => table.set(Some(render::routing_table(&routes))),
                Err(err) => fetch_failed(DashboardFetch::RoutingTable, err),
            }
        });
    });

    view! {
        <div class="container">
            <h1>"RIP Router Dashboard"</h1>
            <BannerList banners/>
            <div class="row">
                <section class="col-md-4">
                    <h5>"Routers"</h5>
                    <div id="routerList">
                        {move || match cards.get() {
                            None => view! { <p>"Loading routers…"</p> }.into_any(),
                            Some(list) => list
                                .into_iter()
                                .map(|card| view! { <RouterCardView card on_view_routes=view_routes/> })
                                .collect_view()
                                .into_any(),
                        }}
                    </div>
                </section>
                <section class="col-md-8">
                    <h5>"Routing Table"</h5>
                    <div id="routingTable">
                        {move || table.get().map(|table| view! { <RoutingTableView table/> })}
                    </div>
                </section>
            </div>
        </div>
    }
}
