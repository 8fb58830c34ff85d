//! Repository Traits
//!
//! The credential-store contract. Implementation is in the infrastructure
//! layer; the only uniqueness guarantee is the one the storage layer itself
//! enforces atomically.

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user durably.
    ///
    /// Fails with `AuthError::DuplicateEmail` when another record already
    /// holds the email, including a record committed by a concurrent
    /// request between any earlier lookup and this insert.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find a user by exact email. Absence is a valid outcome, not an error.
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;
}
