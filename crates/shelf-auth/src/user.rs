//! User types.

use serde::{Deserialize, Serialize};

/// The signed-in user shown in the storefront header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Email address as typed.
    pub email: String,
}

impl User {
    /// Create a user.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Greeting line for the header.
    pub fn greeting(&self) -> String {
        format!("Hello, {}", self.name)
    }
}

/// Part of an email address before the first `@`, or the whole address when
/// there is none.
pub(crate) fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
