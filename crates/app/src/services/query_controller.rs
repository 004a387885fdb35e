//! Query controller: login, then RIP database/status queries.
//!
//! Holds its own [`Session`]: the token lives in memory only and is attached
//! to every request this controller issues after a successful login.

use ripdash_domain::api::{self, RipResource};
use ripdash_domain::error::{AuthError, RequestError, RipDashError};
use ripdash_domain::render::QueryFeedback;
use ripdash_domain::router::RouterSelection;
use ripdash_domain::session::{AccessToken, Credentials, Session, TokenResponse};
use serde_json::Value;

use crate::ports::{ApiRequest, HttpClient, QueryView};

/// Auth-and-query controller.
pub struct QueryController<C, V> {
    client: C,
    view: V,
    session: Session,
}

impl<C: HttpClient, V: QueryView> QueryController<C, V> {
    /// Create an unauthenticated controller.
    pub fn new(client: C, view: V) -> Self {
        Self {
            client,
            view,
            session: Session::default(),
        }
    }

    /// Current login state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Log in and keep the issued token for later queries.
    ///
    /// Empty input is rejected locally with an alert and no request.
    /// A rejected login alerts with the backend reason and leaves the
    /// session as it was.
    ///
    /// # Errors
    ///
    /// Returns [`RipDashError::Validation`] for empty input and
    /// [`RipDashError::Auth`] when the backend rejects the login or cannot
    /// be reached.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<AccessToken, RipDashError> {
        let credentials = match Credentials::new(username, password) {
            Ok(credentials) => credentials,
            Err(err) => return Err(self.report(err.into())),
        };

        match self.request_token(&credentials).await {
            Ok(token) => {
                self.session.authenticate(token.clone());
                self.view.show_authenticated();
                tracing::info!("login succeeded");
                Ok(token)
            }
            Err(err) => {
                tracing::warn!(error = %err, "login failed");
                Err(self.report(err.into()))
            }
        }
    }

    async fn request_token(&self, credentials: &Credentials) -> Result<AccessToken, AuthError> {
        let body = serde_json::json!({
            "username": credentials.username,
            "password": credentials.password,
        });
        // Once logged in, the bearer rides along on every request, logins included.
        let request = ApiRequest::post_json(api::TOKEN_PATH, body).bearer(self.session.token());

        let response = self
            .client
            .send(request)
            .await
            .map_err(|err| AuthError {
                message: err.message,
            })?;
        if !response.is_success() {
            return Err(AuthError {
                message: response.failure_message(),
            });
        }

        let parsed = response
            .body
            .map(serde_json::from_value::<TokenResponse>)
            .transpose()
            .map_err(|err| AuthError {
                message: err.to_string(),
            })?
            .ok_or_else(|| AuthError {
                message: "login response has no body".to_string(),
            })?;
        Ok(parsed.access_token)
    }

    /// Fill the router selector with the static demo routers plus `all`.
    ///
    /// The list is not fetched from the backend.
    pub fn list_routers(&self) -> Vec<RouterSelection> {
        let options = RouterSelection::static_options();
        self.view.set_router_options(&options);
        options
    }

    /// Fetch the RIP database of one router, or of all routers.
    ///
    /// # Errors
    ///
    /// Returns [`RipDashError::NotAuthenticated`] before a successful login
    /// (after alerting, without a request) and [`RipDashError::Request`]
    /// when the request fails (after writing the error to the output area).
    pub async fn get_rip_database(
        &self,
        selection: &RouterSelection,
    ) -> Result<Value, RipDashError> {
        self.query(RipResource::Database, selection).await
    }

    /// Fetch the RIP protocol status of one router, or of all routers.
    ///
    /// # Errors
    ///
    /// Same as [`get_rip_database`](Self::get_rip_database).
    pub async fn get_rip_status(&self, selection: &RouterSelection) -> Result<Value, RipDashError> {
        self.query(RipResource::Status, selection).await
    }

    #[tracing::instrument(skip_all, fields(%resource, router = %selection))]
    async fn query(
        &self,
        resource: RipResource,
        selection: &RouterSelection,
    ) -> Result<Value, RipDashError> {
        let token = match self.session.require() {
            Ok(token) => token,
            Err(err) => return Err(self.report(err.into())),
        };

        let path = api::rip_path(resource, selection);
        tracing::debug!(%path, "querying RIP {resource}");

        match self.fetch(path, token).await {
            Ok(body) => {
                self.show(QueryFeedback::for_body(&body));
                Ok(body)
            }
            Err(err) => Err(self.report(err.into())),
        }
    }

    fn show(&self, feedback: QueryFeedback) {
        match feedback {
            QueryFeedback::Alert(message) => self.view.alert(&message),
            QueryFeedback::Output(text) => self.view.set_output(&text),
        }
    }

    fn report(&self, err: RipDashError) -> RipDashError {
        self.show(QueryFeedback::for_error(&err));
        err
    }

    async fn fetch(&self, path: String, token: &AccessToken) -> Result<Value, RequestError> {
        let response = self
            .client
            .send(ApiRequest::get(path).bearer(Some(token)))
            .await
            .map_err(|err| RequestError {
                status: None,
                message: err.message,
            })?;
        if !response.is_success() {
            return Err(RequestError {
                status: Some(response.status),
                message: response.failure_message(),
            });
        }
        let status = response.status;
        response.body.ok_or_else(|| RequestError {
            status: Some(status),
            message: "response body is not valid JSON".to_string(),
        })
    }
}
