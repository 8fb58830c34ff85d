//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Create the account. Confirmation only; the caller never sees the
    /// password or its hash.
    pub async fn execute(&self, input: SignUpInput) -> AuthResult<()> {
        // Presence is the only validation; any empty field gets the same
        // answer so the client can show one message for the whole form.
        let user_name = UserName::new(input.username).map_err(|_| AuthError::MissingFields)?;
        let email = Email::new(input.email).map_err(|_| AuthError::MissingFields)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::MissingFields)?;

        // Friendly early answer; the store's unique index stays authoritative
        // for concurrent signups racing on the same email.
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::DuplicateEmail);
        }

        // Argon2 is CPU-bound; keep it off the async workers so other
        // requests keep making progress.
        let pepper = self.config.pepper().map(|p| p.to_vec());
        let password_hash = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, pepper.as_deref())
        })
        .await
        .map_err(|e| AuthError::Internal(e.to_string()))??;

        let user = User::new(user_name, email, password_hash);

        self.repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User signed up"
        );

        Ok(())
    }
}
