//! User Password Value Object
//!
//! Domain wrapper over `platform::password`. `RawPassword` is the
//! cleartext from a request (zeroized on drop, never stored);
//! `UserPassword` is the Argon2id hash that lives in the credential store.

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password; only presence is validated
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
                    .with_action("Please enter a password")
            }
        })?;

        Ok(Self(clear_text))
    }

    /// Access the inner cleartext
    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Stored Hash)
// ============================================================================

/// Argon2id hash of a user's password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password for storage. CPU-bound; callers on an async
    /// runtime run this on a blocking thread.
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        let hashed = raw
            .inner()
            .hash(pepper)
            .map_err(|e| AppError::internal("Password hashing failed").with_source(e))?;
        Ok(Self(hashed))
    }

    /// Wrap a PHC string loaded from the credential store
    pub fn from_phc(hash: String) -> AppResult<Self> {
        let hashed = HashedPassword::from_phc(hash)
            .map_err(|e| AppError::internal("Stored password hash is corrupt").with_source(e))?;
        Ok(Self(hashed))
    }

    /// Verify a raw password against this hash. CPU-bound like `from_raw`.
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<bool> {
        self.0
            .verify(raw.inner(), pepper)
            .map_err(|e| AppError::internal("Password verification failed").with_source(e))
    }

    /// The PHC string, for storage
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_rejected() {
        assert!(RawPassword::new(String::new()).is_err());
    }

    #[test]
    fn test_hash_verify_roundtrip() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let stored = UserPassword::from_raw(&raw, None).unwrap();

        assert!(stored.verify(&raw, None).unwrap());

        let wrong = RawPassword::new("wrong".to_string()).unwrap();
        assert!(!stored.verify(&wrong, None).unwrap());
    }

    #[test]
    fn test_phc_roundtrip() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let stored = UserPassword::from_raw(&raw, None).unwrap();

        let reloaded = UserPassword::from_phc(stored.as_str().to_string()).unwrap();
        assert!(reloaded.verify(&raw, None).unwrap());
    }

    #[test]
    fn test_debug_redacted() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        assert!(!format!("{:?}", raw).contains("secret1"));
    }
}
