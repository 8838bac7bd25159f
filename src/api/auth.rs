use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::Deserialize;
use serde_json::json;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::domain::signup::SignupRequest;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub name: String,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// Registers the account. Callers must not authenticate afterwards; the
    /// user confirms their address through the verification email first.
    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError>;

    /// Safe to repeat; the backend just sends another mail.
    async fn resend_verify_email(&self, email: &str) -> Result<(), ApiError>;
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.post_json(
            "/auth/login",
            &json!({ "email": email, "password": password }),
        )
        .await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.post_json_unit("/auth/signup", request).await
    }

    async fn resend_verify_email(&self, email: &str) -> Result<(), ApiError> {
        self.post_query_unit("/auth/resend-verify-email", &[("email", email)])
            .await
    }
}
