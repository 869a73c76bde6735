use reqwest::{RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::errors::{QuizError, QuizResult};
use crate::models::dto::response::ApiErrorBody;

/// Shared HTTP transport for all collaborator accessors. Attaches the bearer
/// credential to every request and maps response statuses onto the error
/// taxonomy. Holds no session state.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<SecretString>>,
}

impl ApiClient {
    pub fn new(config: &Config) -> QuizResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| QuizError::Internal(format!("failed to build HTTP client: {}", err)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(config.api_token.clone()),
        })
    }

    /// Replaces the bearer credential, e.g. after a successful login.
    pub async fn set_token(&self, token: SecretString) {
        *self.token.write().await = Some(token);
    }

    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> QuizResult<T> {
        let request = self.http.get(self.url(path)).query(query);
        self.dispatch(request).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> QuizResult<T> {
        let request = self.http.post(self.url(path)).json(body);
        self.dispatch(request).await
    }

    /// Form-encoded POST; the login endpoint speaks the OAuth2 password flow
    /// and rejects JSON bodies.
    pub async fn post_form<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        form: &B,
    ) -> QuizResult<T> {
        let request = self.http.post(self.url(path)).form(form);
        self.dispatch(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn dispatch<T: DeserializeOwned>(&self, request: RequestBuilder) -> QuizResult<T> {
        let request = match self.token.read().await.as_ref() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let detail = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.detail)
            .unwrap_or_else(|_| format!("quiz API responded with status {}", status));
        Err(map_error_status(status, detail))
    }
}

fn map_error_status(status: StatusCode, detail: String) -> QuizError {
    match status.as_u16() {
        401 | 403 => QuizError::Unauthorized(detail),
        404 => QuizError::NotFound(detail),
        400..=499 => QuizError::InvalidInput(detail),
        _ => QuizError::Transient(detail),
    }
}
