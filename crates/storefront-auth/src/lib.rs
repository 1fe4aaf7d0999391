//! Shopper authentication for the storefront.
//!
//! Sign-in and sign-up go through the [`Authenticator`] trait. The bundled
//! [`SimulatedAuthenticator`] accepts any well-formed credentials after a
//! short delay; a real identity backend can replace it behind the trait.

mod error;
mod provider;
mod session;
mod user;

pub use error::AuthError;
pub use provider::{Authenticator, SimulatedAuthenticator, DEFAULT_AUTH_LATENCY};
pub use session::AuthSession;
pub use user::{AuthMode, Credentials, SocialProvider, User, DEFAULT_DISPLAY_NAME};
