//! User Name Value Object

use kernel::error::app_error::{AppError, AppResult};

/// Display/login name chosen at signup
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name, rejecting empty input
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(AppError::bad_request("Username cannot be empty")
                .with_action("Please choose a username"));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_presence() {
        assert!(UserName::new("alice").is_ok());
        assert!(UserName::new("").is_err());
        assert!(UserName::new("  ").is_err());
    }
}
