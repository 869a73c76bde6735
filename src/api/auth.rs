use async_trait::async_trait;
use secrecy::SecretString;
use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::errors::QuizResult;
use crate::models::domain::{Account, UserProfile};
use crate::models::dto::request::{LoginRequest, RegisterRequest};
use crate::models::dto::response::Token;

const REGISTER_PATH: &str = "/api/auth/register";
const LOGIN_PATH: &str = "/api/auth/login";
const ME_PATH: &str = "/api/auth/me";

/// Account registration, credential exchange and the caller's own profile.
/// Token persistence is the caller's business; a successful login only arms
/// the underlying transport for subsequent requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> QuizResult<Account>;

    async fn login(&self, request: LoginRequest) -> QuizResult<Token>;

    async fn profile(&self) -> QuizResult<UserProfile>;
}

pub struct HttpAccountApi {
    client: Arc<ApiClient>,
}

impl HttpAccountApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountApi for HttpAccountApi {
    async fn register(&self, request: RegisterRequest) -> QuizResult<Account> {
        self.client.post_json(REGISTER_PATH, &request).await
    }

    async fn login(&self, request: LoginRequest) -> QuizResult<Token> {
        let token: Token = self.client.post_form(LOGIN_PATH, &request).await?;
        log::info!("logged in as {}", request.username);
        self.client
            .set_token(SecretString::from(token.access_token.clone()))
            .await;
        Ok(token)
    }

    async fn profile(&self) -> QuizResult<UserProfile> {
        self.client.get_json(ME_PATH, &[]).await
    }
}
