//! End-to-end tests driving both controllers through reqwest.
//!
//! Each test spins up a stub backend (axum) on an ephemeral local port that
//! mimics the RIP-to-REST API: token issuance, RIP database/status, router
//! inventory and routing tables.

use std::sync::{Arc, Mutex};

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use ripdash_adapter_http_reqwest::ReqwestClient;
use ripdash_app::ports::{
    ApiRequest, DashboardView, HttpClient, QueryView, TokenStore, TokenStoreError,
};
use ripdash_app::services::dashboard_poller::DashboardPoller;
use ripdash_app::services::query_controller::QueryController;
use ripdash_domain::error::RipDashError;
use ripdash_domain::render::{BadgeStyle, Banner, RouterCard, RoutingTable};
use ripdash_domain::router::{RouterId, RouterSelection};
use ripdash_domain::session::AccessToken;
use serde_json::{Value, json};

const TOKEN: &str = "stub-token";
const BEARER: &str = "Bearer stub-token";

type Reply = (StatusCode, Json<Value>);

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        == Some(BEARER)
}

fn unauthorized() -> Reply {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"msg": "Missing Authorization Header"})),
    )
}

async fn issue_token(Json(body): Json<Value>) -> Reply {
    if body["username"] == "admin" && body["password"] == "cisco" {
        (StatusCode::OK, Json(json!({"access_token": TOKEN})))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid credentials"})),
        )
    }
}

fn rip_reply(headers: &HeaderMap, router: Option<&str>) -> Reply {
    if !authorized(headers) {
        return unauthorized();
    }
    match router {
        None => (
            StatusCode::OK,
            Json(json!({"router1": {"routes": []}, "router2": {"routes": []}})),
        ),
        Some("router1") => (
            StatusCode::OK,
            Json(json!({"router1": {"routes": [{"network": "10.0.0.0/8", "metric": 1}]}})),
        ),
        Some(other) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("Router {other} not found")})),
        ),
    }
}

async fn rip_all(headers: HeaderMap) -> Reply {
    rip_reply(&headers, None)
}

async fn rip_one(headers: HeaderMap, Path(router): Path<String>) -> Reply {
    rip_reply(&headers, Some(&router))
}

async fn list_routers(headers: HeaderMap) -> Reply {
    if !authorized(&headers) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!([
            {"id": 1, "name": "IOU2", "ip_address": "192.168.100.1", "status": "connected"},
            {"id": 2, "name": "IOU3", "ip_address": "192.168.100.2", "status": "disconnected"}
        ])),
    )
}

async fn list_routes(headers: HeaderMap, Path(id): Path<String>) -> Reply {
    if !authorized(&headers) {
        return unauthorized();
    }
    match id.as_str() {
        "1" => (
            StatusCode::OK,
            Json(json!([
                {"destination": "10.1.0.0", "next_hop": "192.168.100.2", "metric": 1},
                {"destination": "10.2.0.0", "next_hop": "192.168.100.2", "metric": 16}
            ])),
        ),
        "2" => (StatusCode::OK, Json(json!([]))),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Router not found"})),
        ),
    }
}

/// Serve the stub backend and return its base URL.
async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/v1/token", post(issue_token))
        .route("/api/v1/rip/database", get(rip_all))
        .route("/api/v1/rip/database/{router}", get(rip_one))
        .route("/api/v1/rip/status", get(rip_all))
        .route("/api/v1/rip/status/{router}", get(rip_one))
        .route("/api/routers", get(list_routers))
        .route("/api/routers/{id}/routes", get(list_routes))
        .route("/plain", get(|| async { "RIP-to-REST API is running!" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub backend serves");
    });
    format!("http://{addr}")
}

#[derive(Default)]
struct CapturedQueryView {
    alerts: Mutex<Vec<String>>,
    authenticated: Mutex<bool>,
    output: Mutex<Option<String>>,
}

impl QueryView for CapturedQueryView {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn show_authenticated(&self) {
        *self.authenticated.lock().unwrap() = true;
    }

    fn set_router_options(&self, _options: &[RouterSelection]) {}

    fn set_output(&self, text: &str) {
        *self.output.lock().unwrap() = Some(text.to_string());
    }
}

#[derive(Default)]
struct CapturedDashboardView {
    cards: Mutex<Vec<RouterCard>>,
    table: Mutex<Option<RoutingTable>>,
    banners: Mutex<Vec<Banner>>,
}

impl DashboardView for CapturedDashboardView {
    fn render_routers(&self, cards: &[RouterCard]) {
        *self.cards.lock().unwrap() = cards.to_vec();
    }

    fn render_routing_table(&self, table: &RoutingTable) {
        *self.table.lock().unwrap() = Some(table.clone());
    }

    fn show_banner(&self, banner: &Banner) {
        self.banners.lock().unwrap().insert(0, banner.clone());
    }
}

struct FixedTokenStore(Option<AccessToken>);

impl TokenStore for FixedTokenStore {
    fn load(&self) -> Result<Option<AccessToken>, TokenStoreError> {
        Ok(self.0.clone())
    }

    fn save(&self, _token: &AccessToken) -> Result<(), TokenStoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Query controller
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_login_then_render_database_for_all_routers() {
    let base = spawn_backend().await;
    let view = Arc::new(CapturedQueryView::default());
    let mut controller =
        QueryController::new(ReqwestClient::new(&base).unwrap(), Arc::clone(&view));

    controller.login("admin", "cisco").await.unwrap();
    let body = controller
        .get_rip_database(&RouterSelection::All)
        .await
        .unwrap();

    assert!(*view.authenticated.lock().unwrap());
    assert_eq!(
        view.output.lock().unwrap().as_deref(),
        Some(serde_json::to_string_pretty(&body).unwrap().as_str())
    );
    assert!(body.get("router2").is_some());
}

#[tokio::test]
async fn should_render_single_router_status() {
    let base = spawn_backend().await;
    let view = Arc::new(CapturedQueryView::default());
    let mut controller =
        QueryController::new(ReqwestClient::new(&base).unwrap(), Arc::clone(&view));

    controller.login("admin", "cisco").await.unwrap();
    let body = controller
        .get_rip_status(&RouterSelection::Router("router1".to_string()))
        .await
        .unwrap();

    assert_eq!(body["router1"]["routes"][0]["metric"], 1);
}

#[tokio::test]
async fn should_alert_backend_reason_when_login_rejected() {
    let base = spawn_backend().await;
    let view = Arc::new(CapturedQueryView::default());
    let mut controller =
        QueryController::new(ReqwestClient::new(&base).unwrap(), Arc::clone(&view));

    let result = controller.login("admin", "wrong").await;

    assert!(matches!(result, Err(RipDashError::Auth(_))));
    assert_eq!(
        *view.alerts.lock().unwrap(),
        ["Authentication failed: Invalid credentials"]
    );
}

#[tokio::test]
async fn should_render_backend_error_for_unknown_router() {
    let base = spawn_backend().await;
    let view = Arc::new(CapturedQueryView::default());
    let mut controller =
        QueryController::new(ReqwestClient::new(&base).unwrap(), Arc::clone(&view));

    controller.login("admin", "cisco").await.unwrap();
    let result = controller
        .get_rip_database(&RouterSelection::Router("router9".to_string()))
        .await;

    assert!(matches!(result, Err(RipDashError::Request(_))));
    assert_eq!(
        view.output.lock().unwrap().as_deref(),
        Some("Error: Router router9 not found")
    );
    assert!(view.alerts.lock().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Dashboard poller
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_router_cards_with_stored_token() {
    let base = spawn_backend().await;
    let view = Arc::new(CapturedDashboardView::default());
    let store = FixedTokenStore(Some(AccessToken::new(TOKEN)));
    let poller = DashboardPoller::start_session(
        ReqwestClient::new(&base).unwrap(),
        Arc::clone(&view),
        &store,
    );

    poller.fetch_routers().await.unwrap();

    let cards = view.cards.lock().unwrap().clone();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].name, "IOU2");
    assert_eq!(cards[0].badge, BadgeStyle::Success);
    assert_eq!(cards[1].badge, BadgeStyle::Danger);
}

#[tokio::test]
async fn should_banner_when_stored_token_is_missing() {
    let base = spawn_backend().await;
    let view = Arc::new(CapturedDashboardView::default());
    let poller = DashboardPoller::start_session(
        ReqwestClient::new(&base).unwrap(),
        Arc::clone(&view),
        &FixedTokenStore(None),
    );

    let result = poller.fetch_routers().await;

    let Err(RipDashError::Request(err)) = result else {
        panic!("expected a request error");
    };
    assert_eq!(err.status, Some(401));
    assert_eq!(err.message, "Request failed with status code 401");
    assert_eq!(
        view.banners.lock().unwrap()[0].message,
        "Failed to fetch routers"
    );
}

#[tokio::test]
async fn should_render_routing_table_rows() {
    let base = spawn_backend().await;
    let view = Arc::new(CapturedDashboardView::default());
    let store = FixedTokenStore(Some(AccessToken::new(TOKEN)));
    let poller = DashboardPoller::start_session(
        ReqwestClient::new(&base).unwrap(),
        Arc::clone(&view),
        &store,
    );

    poller
        .fetch_routing_table(&RouterId::new("1"))
        .await
        .unwrap();

    let table = view.table.lock().unwrap().clone().unwrap();
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1].metric, "16");
    assert!(!table.rows[1].reachable);
}

#[tokio::test]
async fn should_render_empty_routing_table() {
    let base = spawn_backend().await;
    let view = Arc::new(CapturedDashboardView::default());
    let store = FixedTokenStore(Some(AccessToken::new(TOKEN)));
    let poller = DashboardPoller::start_session(
        ReqwestClient::new(&base).unwrap(),
        Arc::clone(&view),
        &store,
    );

    poller
        .fetch_routing_table(&RouterId::new("2"))
        .await
        .unwrap();

    let table = view.table.lock().unwrap().clone().unwrap();
    assert!(table.rows.is_empty());
}

// ---------------------------------------------------------------------------
// Raw client behaviour
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_response_without_body_when_not_json() {
    let base = spawn_backend().await;
    let client = ReqwestClient::new(&base).unwrap();

    let response = client.send(ApiRequest::get("/plain")).await.unwrap();

    assert_eq!(response.status, 200);
    assert!(response.body.is_none());
}

#[tokio::test]
async fn should_return_transport_error_when_backend_is_down() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = ReqwestClient::new(&format!("http://{addr}")).unwrap();

    let result = client.send(ApiRequest::get("/api/routers")).await;

    assert!(result.is_err());
}
