//! Login/registration form.

use crate::AuthError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which form the user is filling in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Sign in with email and password.
    Login,
    /// Create an account with name, email and password.
    Register,
}

impl AuthMode {
    /// Get mode as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Register => "register",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMode {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "login" => Ok(AuthMode::Login),
            "register" => Ok(AuthMode::Register),
            other => Err(AuthError::UnknownMode(other.to_string())),
        }
    }
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl AuthForm {
    /// A login form.
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// A registration form.
    pub fn register(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check that every field `mode` requires is filled in.
    ///
    /// Blank (whitespace-only) values count as missing.
    pub fn validate(&self, mode: AuthMode) -> Result<(), AuthError> {
        let mut missing = Vec::new();
        if mode == AuthMode::Register && is_blank(&self.name) {
            missing.push("name");
        }
        if is_blank(&self.email) {
            missing.push("email");
        }
        if is_blank(&self.password) {
            missing.push("password");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AuthError::MissingFields(missing))
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("login".parse::<AuthMode>().unwrap(), AuthMode::Login);
        assert_eq!(" Register ".parse::<AuthMode>().unwrap(), AuthMode::Register);
        assert!("logout".parse::<AuthMode>().is_err());
    }

    #[test]
    fn test_login_requires_email_and_password() {
        assert!(AuthForm::login("a@b.com", "x").validate(AuthMode::Login).is_ok());
        assert_eq!(
            AuthForm::login("", "").validate(AuthMode::Login),
            Err(AuthError::MissingFields(vec!["email", "password"]))
        );
    }

    #[test]
    fn test_login_ignores_name() {
        let form = AuthForm::register("", "a@b.com", "x");
        assert!(form.validate(AuthMode::Login).is_ok());
    }

    #[test]
    fn test_register_requires_name() {
        let form = AuthForm::login("a@b.com", "x");
        assert_eq!(
            form.validate(AuthMode::Register),
            Err(AuthError::MissingFields(vec!["name"]))
        );
        assert!(AuthForm::register("Asha", "a@b.com", "x")
            .validate(AuthMode::Register)
            .is_ok());
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let form = AuthForm::login("   ", "x");
        assert_eq!(
            form.validate(AuthMode::Login),
            Err(AuthError::MissingFields(vec!["email"]))
        );
    }

    #[test]
    fn test_form_deserializes_with_missing_fields() {
        let form: AuthForm = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
        assert_eq!(form.password, "");
    }
}
