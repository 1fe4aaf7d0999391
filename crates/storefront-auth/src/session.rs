//! Signed-in sessions.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use storefront_observability::SessionId;

use crate::user::User;

/// A signed-in shopper and the window the sign-in is good for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    pub id: SessionId,
    pub user: User,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    /// Default session duration: 7 days.
    pub const DEFAULT_DURATION_DAYS: i64 = 7;

    /// Start a session for a user.
    pub fn new(user: User) -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::generate(),
            user,
            created_at: now,
            expires_at: now + Duration::days(Self::DEFAULT_DURATION_DAYS),
        }
    }
}
