//! Authenticators.

use std::time::Duration;

use async_trait::async_trait;

use crate::user::{AuthMode, Credentials, SocialProvider, User};
use crate::{AuthError, AuthSession};

/// Delay before a simulated sign-in resolves.
pub const DEFAULT_AUTH_LATENCY: Duration = Duration::from_millis(1000);

/// Signs shoppers in.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Sign in or sign up with form credentials.
    async fn authenticate(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<AuthSession, AuthError>;

    /// One-click sign-in through a provider.
    async fn social_login(&self, provider: SocialProvider) -> Result<AuthSession, AuthError>;
}

/// Accepts any well-formed credentials after a fixed delay. Nothing is
/// stored, so logging in and signing up behave the same apart from the
/// required fields.
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    latency: Duration,
}

impl SimulatedAuthenticator {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_AUTH_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<AuthSession, AuthError> {
        credentials.validate(mode)?;
        tokio::time::sleep(self.latency).await;
        Ok(AuthSession::new(User::from_credentials(credentials)))
    }

    async fn social_login(&self, provider: SocialProvider) -> Result<AuthSession, AuthError> {
        Ok(AuthSession::new(User::social(provider)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> SimulatedAuthenticator {
        SimulatedAuthenticator::new().with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_signup_uses_given_name() {
        let creds = Credentials::new("asha@example.in", "pw").with_name("Asha");
        let session = instant()
            .authenticate(AuthMode::Signup, &creds)
            .await
            .unwrap();
        assert_eq!(session.user.name, "Asha");
        assert_eq!(session.user.email, "asha@example.in");
    }

    #[tokio::test]
    async fn test_login_without_name_is_user() {
        let creds = Credentials::new("asha@example.in", "pw");
        let session = instant()
            .authenticate(AuthMode::Login, &creds)
            .await
            .unwrap();
        assert_eq!(session.user.name, "User");
    }

    #[tokio::test]
    async fn test_rejects_missing_password() {
        let creds = Credentials::new("asha@example.in", "");
        let err = instant()
            .authenticate(AuthMode::Login, &creds)
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::MissingField("password"));
    }

    #[tokio::test]
    async fn test_social_login() {
        let session = instant().social_login(SocialProvider::Phone).await.unwrap();
        assert_eq!(session.user.email, "user@phone.com");
        assert_eq!(session.user.provider, Some(SocialProvider::Phone));
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_latency() {
        let auth = SimulatedAuthenticator::default();
        let start = tokio::time::Instant::now();
        auth.authenticate(AuthMode::Login, &Credentials::new("a@b.com", "pw"))
            .await
            .unwrap();
        assert!(start.elapsed() >= DEFAULT_AUTH_LATENCY);
    }

    #[tokio::test]
    async fn test_session_json_shape() {
        let session = instant().social_login(SocialProvider::Google).await.unwrap();
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["user"]["provider"], "google");
        assert!(value["id"].as_str().unwrap().starts_with("sess_"));
    }
}
