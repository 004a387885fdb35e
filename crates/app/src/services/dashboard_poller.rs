//! Dashboard poller: router cards and routing tables from a stored token.
//!
//! The token is read once from the [`TokenStore`] when the session starts and
//! never refreshed. Failures are logged and surfaced as a banner; the view's
//! existing content is left untouched.

use ripdash_domain::api;
use ripdash_domain::error::{RequestError, RipDashError};
use ripdash_domain::render::{self, DashboardFetch};
use ripdash_domain::route::RouteEntry;
use ripdash_domain::router::{Router, RouterId};
use ripdash_domain::session::{AccessToken, Session};
use serde::de::DeserializeOwned;

use crate::ports::{ApiRequest, DashboardView, HttpClient, TokenStore};

/// Router-list and routing-table controller.
pub struct DashboardPoller<C, V> {
    client: C,
    view: V,
    session: Session,
}

impl<C: HttpClient, V: DashboardView> DashboardPoller<C, V> {
    /// Create a poller using `token` for every request.
    pub fn new(client: C, view: V, token: Option<AccessToken>) -> Self {
        Self {
            client,
            view,
            session: Session::from(token),
        }
    }

    /// Load the persisted token once and create the poller.
    ///
    /// An unreadable or empty store is logged; requests then go out without
    /// an `Authorization` header.
    pub fn start_session(client: C, view: V, store: &impl TokenStore) -> Self {
        let token = store.load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to read stored token");
            None
        });
        if token.is_none() {
            tracing::warn!("no stored token, dashboard requests are unauthenticated");
        }
        Self::new(client, view, token)
    }

    /// Fetch the router inventory and replace the router list.
    ///
    /// # Errors
    ///
    /// Returns [`RipDashError::Request`] on transport failure, non-2xx status,
    /// or a body that is not a router list. The failure has already been
    /// logged and bannered.
    pub async fn fetch_routers(&self) -> Result<Vec<Router>, RipDashError> {
        let routers = self
            .get_json::<Vec<Router>>(DashboardFetch::Routers, api::ROUTERS_PATH.to_string())
            .await?;
        tracing::debug!(count = routers.len(), "routers fetched");
        self.view.render_routers(&render::router_cards(&routers));
        Ok(routers)
    }

    /// Fetch one router's routes and replace the routing-table region.
    ///
    /// # Errors
    ///
    /// Same failure handling as [`fetch_routers`](Self::fetch_routers).
    #[tracing::instrument(skip_all, fields(router_id = %router_id))]
    pub async fn fetch_routing_table(
        &self,
        router_id: &RouterId,
    ) -> Result<Vec<RouteEntry>, RipDashError> {
        let path = api::routes_path(router_id);
        let routes = self
            .get_json::<Vec<RouteEntry>>(DashboardFetch::RoutingTable, path)
            .await?;
        self.view.render_routing_table(&render::routing_table(&routes));
        Ok(routes)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        fetch: DashboardFetch,
        path: String,
    ) -> Result<T, RipDashError> {
        self.request_json(path).await.map_err(|err| {
            tracing::error!(error = %err, status = ?err.status, "error fetching {fetch}");
            self.view.show_banner(&fetch.failure_banner());
            err.into()
        })
    }

    async fn request_json<T: DeserializeOwned>(&self, path: String) -> Result<T, RequestError> {
        let response = self
            .client
            .send(ApiRequest::get(path).bearer(self.session.token()))
            .await
            .map_err(|err| RequestError {
                status: None,
                message: err.message,
            })?;
        let status = response.status;
        if !response.is_success() {
            return Err(RequestError {
                status: Some(status),
                message: response.failure_message(),
            });
        }
        let body = response.body.ok_or_else(|| RequestError {
            status: Some(status),
            message: "response body is not valid JSON".to_string(),
        })?;
        serde_json::from_value(body).map_err(|err| RequestError {
            status: Some(status),
            message: err.to_string(),
        })
    }
}
