//! Backend client wrapping `gloo-net`.
//!
//! Paths are relative: the dashboard is served by the backend it queries.

use gloo_net::http::{Request, RequestBuilder, Response};
use ripdash_domain::api::{self, RipResource};
use ripdash_domain::error::{AuthError, RequestError};
use ripdash_domain::route::RouteEntry;
use ripdash_domain::router::{Router, RouterId, RouterSelection};
use ripdash_domain::session::{AccessToken, Credentials, TokenResponse};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            status: None,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            status: None,
            message: err.to_string(),
        }
    }
}

impl From<ApiError> for RequestError {
    fn from(err: ApiError) -> Self {
        Self {
            status: err.status,
            message: err.message,
        }
    }
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        Self {
            message: err.message,
        }
    }
}

/// Reason shown for a non-2xx response.
fn failure_message(status: u16, body: Option<&Value>) -> String {
    body.and_then(api::backend_error)
        .map_or_else(|| api::status_message(status), str::to_string)
}

fn with_bearer(builder: RequestBuilder, token: Option<&AccessToken>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &token.bearer()),
        None => builder,
    }
}

/// Check the HTTP status and return the JSON body of a 2xx response.
async fn check_response(resp: Response) -> Result<Value, ApiError> {
    let status = resp.status();
    let body = resp.json::<Value>().await.ok();
    if !resp.ok() {
        return Err(ApiError {
            status: Some(status),
            message: failure_message(status, body.as_ref()),
        });
    }
    body.ok_or_else(|| ApiError {
        status: Some(status),
        message: "response body is not valid JSON".to_string(),
    })
}

async fn get_json<T: DeserializeOwned>(
    path: &str,
    token: Option<&AccessToken>,
) -> Result<T, ApiError> {
    let resp = with_bearer(Request::get(path), token).send().await?;
    let body = check_response(resp).await?;
    Ok(serde_json::from_value(body)?)
}

/// Exchange credentials for a bearer token.
///
/// `current` is attached when a session already exists.
pub async fn login(
    credentials: &Credentials,
    current: Option<&AccessToken>,
) -> Result<AccessToken, ApiError> {
    let resp = with_bearer(Request::post(api::TOKEN_PATH), current)
        .json(credentials)?
        .send()
        .await?;
    let body = check_response(resp).await?;
    let parsed: TokenResponse = serde_json::from_value(body)?;
    Ok(parsed.access_token)
}

/// Fetch the RIP database or status of one router, or of all routers.
pub async fn fetch_rip(
    resource: RipResource,
    selection: &RouterSelection,
    token: &AccessToken,
) -> Result<Value, ApiError> {
    get_json(&api::rip_path(resource, selection), Some(token)).await
}

/// Fetch the router inventory.
pub async fn fetch_routers(token: Option<&AccessToken>) -> Result<Vec<Router>, ApiError> {
    get_json(api::ROUTERS_PATH, token).await
}

/// Fetch one router's routing table.
pub async fn fetch_routes(
    id: &RouterId,
    token: Option<&AccessToken>,
) -> Result<Vec<RouteEntry>, ApiError> {
    get_json(&api::routes_path(id), token).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_prefer_backend_error_field() {
        let body = serde_json::json!({"error": "Router router9 not found"});
        assert_eq!(
            failure_message(404, Some(&body)),
            "Router router9 not found"
        );
    }

    #[test]
    fn should_keep_status_when_converting_to_request_error() {
        let err = ApiError {
            status: Some(404),
            message: "Router router9 not found".to_string(),
        };
        assert_eq!(
            RequestError::from(err),
            RequestError {
                status: Some(404),
                message: "Router router9 not found".to_string(),
            }
        );
    }

    #[test]
    fn should_fall_back_to_status_message() {
        let body = serde_json::json!({"msg": "Missing Authorization Header"});
        assert_eq!(
            failure_message(401, Some(&body)),
            "Request failed with status code 401"
        );
        assert_eq!(
            failure_message(502, None),
            "Request failed with status code 502"
        );
    }
}
