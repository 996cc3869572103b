use serde::{Deserialize, Serialize};

use ecart_core::{DomainError, DomainResult};

use crate::role::Role;

/// Demo login record.
///
/// Credentials are plain strings compared byte for byte. This is the sample
/// gate in front of the menus, not an authentication system: no hashing, no
/// sessions, no account storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    password: String,
    pub role: Role,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    /// Check `input_password` against the stored credential.
    pub fn authenticate(&self, input_password: &str) -> DomainResult<()> {
        if self.password == input_password {
            Ok(())
        } else {
            Err(DomainError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_correct_password_authenticates() {
        let user = User::new("customer", "pass123", Role::Customer);
        assert!(user.authenticate("pass123").is_ok());
    }

    #[test]
    fn a_wrong_password_is_unauthorized() {
        let user = User::new("customer", "pass123", Role::Customer);
        assert_eq!(
            user.authenticate("letmein").unwrap_err(),
            DomainError::Unauthorized
        );
    }

    #[test]
    fn roles_display_as_lowercase_names() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Customer.to_string(), "customer");
    }
}
