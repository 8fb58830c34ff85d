//! Login Use Case
//!
//! Verifies credentials and issues a bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed bearer token, expiring one hour from issuance
    pub token: String,
    /// The authenticated user (public projection happens at the boundary)
    pub user: User,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Every failure before the token is issued collapses into
        // InvalidCredentials: unknown email, empty fields, and wrong
        // password must be indistinguishable to the caller.
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let stored = user.password_hash.clone();
        let pepper = self.config.pepper().map(|p| p.to_vec());
        let password_valid =
            tokio::task::spawn_blocking(move || stored.verify(&raw_password, pepper.as_deref()))
                .await
                .map_err(|e| AuthError::Internal(e.to_string()))??;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let token = token::issue(&user.user_id, &self.config);

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput { token, user })
    }
}
