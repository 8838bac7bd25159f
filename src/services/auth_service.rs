use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::api::auth::AuthApi;
use crate::domain::session::User;
use crate::domain::signup::SignupForm;
use crate::store::SessionStore;

pub struct AuthService {
    api: Arc<dyn AuthApi>,
    session: Arc<SessionStore>,
}

impl AuthService {
    pub fn new(api: Arc<dyn AuthApi>, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }

    /// Exchanges credentials for a session and commits it. A failure at any
    /// point leaves the session unset.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let response = self.api.login(email, password).await?;
        let user = User {
            name: response.name,
        };
        self.session.login(response.access_token, user.clone()).await?;
        info!(name = %user.name, "logged in");
        Ok(user)
    }

    /// Registers a new account. The user stays unauthenticated afterwards
    /// and confirms their address through the verification email.
    pub async fn signup(&self, form: &SignupForm) -> Result<()> {
        let request = form.validate()?;
        self.api.signup(&request).await?;
        info!(email = %request.email, "signup submitted, awaiting email verification");
        Ok(())
    }

    pub async fn resend_verify_email(&self, email: &str) -> Result<()> {
        self.api.resend_verify_email(email).await?;
        Ok(())
    }

    pub async fn logout(&self) -> Result<()> {
        self.session.logout().await
    }
}
