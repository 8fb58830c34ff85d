//! User Entity
//!
//! One record per account. Created exactly once by a successful signup,
//! read by login, never updated or deleted.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Unique identifier, generated at creation
    pub user_id: UserId,
    /// Display/login name
    pub user_name: UserName,
    /// Unique across all users (enforced by the credential store)
    pub email: Email,
    /// Argon2id hash; the plaintext never touches this entity
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(user_name: UserName, email: Email, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            user_name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    #[test]
    fn test_new_user_gets_fresh_id() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let hash = UserPassword::from_raw(&raw, None).unwrap();

        let a = User::new(
            UserName::new("alice").unwrap(),
            Email::new("a@x.com").unwrap(),
            hash.clone(),
        );
        let b = User::new(
            UserName::new("bob").unwrap(),
            Email::new("b@x.com").unwrap(),
            hash,
        );

        assert_ne!(a.user_id, b.user_id);
        assert_eq!(a.created_at, a.updated_at);
    }
}
