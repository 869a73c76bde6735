use std::sync::Arc;
use validator::Validate;

use crate::api::AccountApi;
use crate::errors::QuizResult;
use crate::models::domain::{Account, UserProfile};
use crate::models::dto::request::{LoginRequest, RegisterRequest};
use crate::models::dto::response::Token;

/// Registration, login and profile lookups. Validates request shapes locally
/// before they go on the wire; credential storage beyond the transport's
/// in-memory bearer token is out of scope.
pub struct AccountService {
    api: Arc<dyn AccountApi>,
}

impl AccountService {
    pub fn new(api: Arc<dyn AccountApi>) -> Self {
        Self { api }
    }

    pub async fn register(&self, request: RegisterRequest) -> QuizResult<Account> {
        request.validate()?;
        self.api.register(request).await
    }

    pub async fn login(&self, username: &str, password: &str) -> QuizResult<Token> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        request.validate()?;
        self.api.login(request).await
    }

    pub async fn profile(&self) -> QuizResult<UserProfile> {
        self.api.profile().await
    }
}
