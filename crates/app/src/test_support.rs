//! In-memory port doubles shared by the service tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

use ripdash_domain::render::{Banner, RouterCard, RoutingTable};
use ripdash_domain::router::RouterSelection;
use ripdash_domain::session::AccessToken;
use serde_json::Value;

use crate::ports::{
    ApiRequest, ApiResponse, DashboardView, HttpClient, QueryView, TokenStore, TokenStoreError,
    TransportError,
};

enum Stub {
    Reply(Result<ApiResponse, TransportError>),
    Hang,
}

/// Replays stubbed responses in order and records every request.
///
/// Once the stubs run out every request fails with a transport error.
#[derive(Default)]
pub struct RecordingClient {
    responses: Mutex<VecDeque<Stub>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingClient {
    fn push(&self, stub: Stub) -> &Self {
        self.responses.lock().unwrap().push_back(stub);
        self
    }

    pub fn respond(&self, status: u16, body: Value) -> &Self {
        self.push(Stub::Reply(Ok(ApiResponse {
            status,
            body: Some(body),
        })))
    }

    pub fn respond_without_body(&self, status: u16) -> &Self {
        self.push(Stub::Reply(Ok(ApiResponse { status, body: None })))
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.push(Stub::Reply(Err(TransportError::new(message))))
    }

    /// The next request never completes.
    pub fn hang(&self) -> &Self {
        self.push(Stub::Hang)
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl HttpClient for RecordingClient {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send {
        self.requests.lock().unwrap().push(request);
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Stub::Reply(Err(TransportError::new("no stubbed response"))));
        async move {
            match next {
                Stub::Reply(result) => result,
                Stub::Hang => std::future::pending().await,
            }
        }
    }
}

#[derive(Default)]
pub struct RecordingQueryView {
    pub alerts: Mutex<Vec<String>>,
    pub authenticated: Mutex<bool>,
    pub options: Mutex<Vec<RouterSelection>>,
    pub output: Mutex<Option<String>>,
}

impl RecordingQueryView {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn output(&self) -> Option<String> {
        self.output.lock().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        *self.authenticated.lock().unwrap()
    }
}

impl QueryView for RecordingQueryView {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn show_authenticated(&self) {
        *self.authenticated.lock().unwrap() = true;
    }

    fn set_router_options(&self, options: &[RouterSelection]) {
        *self.options.lock().unwrap() = options.to_vec();
    }

    fn set_output(&self, text: &str) {
        *self.output.lock().unwrap() = Some(text.to_string());
    }
}

#[derive(Default)]
pub struct RecordingDashboardView {
    pub cards: Mutex<Option<Vec<RouterCard>>>,
    pub table: Mutex<Option<RoutingTable>>,
    pub banners: Mutex<Vec<Banner>>,
}

impl RecordingDashboardView {
    pub fn cards(&self) -> Option<Vec<RouterCard>> {
        self.cards.lock().unwrap().clone()
    }

    pub fn table(&self) -> Option<RoutingTable> {
        self.table.lock().unwrap().clone()
    }

    pub fn banners(&self) -> Vec<Banner> {
        self.banners.lock().unwrap().clone()
    }
}

impl DashboardView for RecordingDashboardView {
    fn render_routers(&self, cards: &[RouterCard]) {
        *self.cards.lock().unwrap() = Some(cards.to_vec());
    }

    fn render_routing_table(&self, table: &RoutingTable) {
        *self.table.lock().unwrap() = Some(table.clone());
    }

    fn show_banner(&self, banner: &Banner) {
        self.banners.lock().unwrap().insert(0, banner.clone());
    }
}

#[derive(Default)]
pub struct InMemoryTokenStore {
    token: Mutex<Option<AccessToken>>,
}

impl InMemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(AccessToken::new(token))),
        }
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> Result<Option<AccessToken>, TokenStoreError> {
        Ok(self.token.lock().unwrap().clone())
    }

    fn save(&self, token: &AccessToken) -> Result<(), TokenStoreError> {
        *self.token.lock().unwrap() = Some(token.clone());
        Ok(())
    }
}
