//! Login form and RIP database/status queries.
//!
//! The token lives in this page's [`Session`] only; "Save for dashboard"
//! copies it to `localStorage` explicitly.

use leptos::prelude::*;
use leptos::task::spawn_local;
use ripdash_domain::api::RipResource;
use ripdash_domain::error::{AuthError, RequestError, RipDashError};
use ripdash_domain::render::QueryFeedback;
use ripdash_domain::router::RouterSelection;
use ripdash_domain::session::{Credentials, Session};

use crate::{api, browser};

#[component]
pub fn Query() -> impl IntoView {
    let options = RouterSelection::static_options();
    let first = options
        .first()
        .map(|option| option.as_str().to_string())
        .unwrap_or_default();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let session = RwSignal::new(Session::default());
    let selected = RwSignal::new(first);
    let output = RwSignal::new(String::new());
    let saved = RwSignal::new(false);

    let show = move |feedback: QueryFeedback| match feedback {
        QueryFeedback::Alert(message) => browser::alert(&message),
        QueryFeedback::Output(text) => output.set(text),
    };
    let report = move |err: RipDashError| show(QueryFeedback::for_error(&err));

    let login = move |_| {
        let credentials =
            match Credentials::new(username.get_untracked(), password.get_untracked()) {
                Ok(credentials) => credentials,
                Err(err) => return report(err.into()),
            };
        let current = session.with_untracked(|s| s.token().cloned());
        spawn_local(async move {
            match api::login(&credentials, current.as_ref()).await {
                Ok(token) => {
                    session.update(|s| s.authenticate(token));
                    saved.set(false);
                }
                Err(err) => report(AuthError::from(err).into()),
            }
        });
    };

    let query = move |resource: RipResource| {
        let token = match session.with_untracked(|s| s.require().cloned()) {
            Ok(token) => token,
            Err(err) => return report(err.into()),
        };
        let selection = selected
            .get_untracked()
            .parse()
            .unwrap_or(RouterSelection::All);
        spawn_local(async move {
            match api::fetch_rip(resource, &selection, &token).await {
                Ok(body) => show(QueryFeedback::for_body(&body)),
                Err(err) => report(RequestError::from(err).into()),
            }
        });
    };

    let save = move |_| {
        if let Some(token) = session.with_untracked(|s| s.token().cloned()) {
            browser::save_token(&token);
            saved.set(true);
        }
    };

    view! {
        <div class="container">
            <h1>"RIP-to-REST"</h1>
            <section id="login-section">
                <input id="username" type="text" placeholder="Username" bind:value=username/>
                <input id="password" type="password" placeholder="Password" bind:value=password/>
                <button id="login-btn" on:click=login>"Login"</button>
            </section>
            <Show when=move || session.with(Session::is_authenticated)>
                <section id="token-display">
                    <p>"Authenticated"</p>
                    <button on:click=save>
                        {move || if saved.get() { "Saved for dashboard" } else { "Save for dashboard" }}
                    </button>
                </section>
                <section id="router-section">
                    <select id="router-select" bind:value=selected>
                        {options
                            .iter()
                            .map(|option| {
                                let value = option.as_str().to_string();
                                view! { <option value=value.clone()>{value}</option> }
                            })
                            .collect_view()}
                    </select>
                    <button id="get-rip-db" on:click=move |_| query(RipResource::Database)>
                        "Get RIP Database"
                    </button>
                    <button id="get-rip-status" on:click=move |_| query(RipResource::Status)>
                        "Get RIP Status"
                    </button>
                    <pre id="result-output">{move || output.get()}</pre>
                </section>
            </Show>
        </div>
    }
}
