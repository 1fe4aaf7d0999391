//! User and credential types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use storefront_commerce::account::Customer;
use storefront_commerce::checkout::is_valid_email;

use crate::AuthError;

/// Name given to shoppers who sign in without one.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// Which form the shopper submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Signup => "signup",
        }
    }

    /// Modal heading for this mode.
    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Signup => "Create Account",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuthMode {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" | "signin" | "sign-in" => Ok(AuthMode::Login),
            "signup" | "sign-up" | "register" => Ok(AuthMode::Signup),
            other => Err(AuthError::UnknownMode(other.to_string())),
        }
    }
}

/// One-click sign-in options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Google,
    Phone,
}

impl SocialProvider {
    pub const ALL: [SocialProvider; 2] = [SocialProvider::Google, SocialProvider::Phone];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialProvider::Google => "google",
            SocialProvider::Phone => "phone",
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            SocialProvider::Google => "Continue with Google",
            SocialProvider::Phone => "Continue with Phone",
        }
    }
}

impl FromStr for SocialProvider {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or(AuthError::UnknownProvider(lower))
    }
}

/// What the shopper typed into the sign-in form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Only asked for on sign-up.
    pub name: String,
    pub email: String,
    pub password: String,
    /// Optional on sign-up.
    pub phone: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Check required fields for the given form.
    ///
    /// Email and password are always required; sign-up also needs a name.
    pub fn validate(&self, mode: AuthMode) -> Result<(), AuthError> {
        if mode == AuthMode::Signup && self.name.trim().is_empty() {
            return Err(AuthError::MissingField("name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail(email.to_string()));
        }
        if self.password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }
        Ok(())
    }
}

/// A signed-in shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    /// Set when signed in through a social provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<SocialProvider>,
}

impl User {
    /// User from submitted credentials; a blank name becomes "User".
    pub fn from_credentials(credentials: &Credentials) -> Self {
        let name = credentials.name.trim();
        Self {
            name: if name.is_empty() {
                DEFAULT_DISPLAY_NAME.to_string()
            } else {
                name.to_string()
            },
            email: credentials.email.trim().to_string(),
            provider: None,
        }
    }

    /// Placeholder account for a social sign-in.
    pub fn social(provider: SocialProvider) -> Self {
        Self {
            name: DEFAULT_DISPLAY_NAME.to_string(),
            email: format!("user@{}.com", provider.as_str()),
            provider: Some(provider),
        }
    }

    /// The store-side customer record.
    pub fn to_customer(&self) -> Customer {
        Customer::new(self.name.clone(), self.email.clone())
    }
}

impl From<User> for Customer {
    fn from(user: User) -> Self {
        Customer::new(user.name, user.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_email_and_password() {
        let creds = Credentials::new("", "secret");
        assert_eq!(
            creds.validate(AuthMode::Login),
            Err(AuthError::MissingField("email"))
        );

        let creds = Credentials::new("a@b.com", "");
        assert_eq!(
            creds.validate(AuthMode::Login),
            Err(AuthError::MissingField("password"))
        );

        assert!(Credentials::new("a@b.com", "x")
            .validate(AuthMode::Login)
            .is_ok());
    }

    #[test]
    fn test_signup_requires_name() {
        let creds = Credentials::new("a@b.com", "x");
        assert_eq!(
            creds.validate(AuthMode::Signup),
            Err(AuthError::MissingField("name"))
        );
        assert!(creds.with_name("Asha").validate(AuthMode::Signup).is_ok());
    }

    #[test]
    fn test_invalid_email() {
        let err = Credentials::new("not-an-email", "x")
            .validate(AuthMode::Login)
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidEmail("not-an-email".into()));
    }

    #[test]
    fn test_phone_is_optional_on_signup() {
        let creds = Credentials::new("asha@example.in", "secret").with_name("Asha");
        assert!(creds.validate(AuthMode::Signup).is_ok());

        let creds = creds.with_phone("9876543210");
        assert_eq!(creds.phone, "9876543210");
        assert!(creds.validate(AuthMode::Signup).is_ok());
    }

    #[test]
    fn test_user_defaults_name() {
        let user = User::from_credentials(&Credentials::new(" a@b.com ", "x"));
        assert_eq!(user.name, "User");
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn test_social_user() {
        let user = User::social(SocialProvider::Google);
        assert_eq!(user.name, "User");
        assert_eq!(user.email, "user@google.com");
        assert_eq!(user.to_customer().email, "user@google.com");
    }

    #[test]
    fn test_parse_mode_and_provider() {
        assert_eq!("Sign-Up".parse::<AuthMode>().unwrap(), AuthMode::Signup);
        assert_eq!("PHONE".parse::<SocialProvider>().unwrap(), SocialProvider::Phone);
        assert!("github".parse::<SocialProvider>().is_err());
    }
}
