//! Authenticated session handle
//!
//! The session holds the bearer token and a cached copy of the user's profile.
//! It is passed explicitly to whatever needs it instead of being read from
//! process-wide storage.

use super::error::ProfileError;
use super::types::UserRecord;
use tracing::warn;

/// Per-session credentials and cached profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionHandle {
    token: Option<String>,
    cached_user: Option<String>,
}

impl SessionHandle {
    /// Create an anonymous session
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            token: None,
            cached_user: None,
        }
    }

    /// Create a session for an issued bearer token
    #[must_use]
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Attach a previously cached profile (raw JSON)
    #[must_use]
    pub fn with_cached_user_json(mut self, json: impl Into<String>) -> Self {
        self.cached_user = Some(json.into());
        self
    }

    /// Bearer token, if signed in
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Check if the session carries a token
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Cached profile, if present and readable
    ///
    /// A corrupt cache entry is logged and treated as absent.
    #[must_use]
    pub fn cached_user(&self) -> Option<UserRecord> {
        let json = self.cached_user.as_deref()?;
        match serde_json::from_str(json) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("ignoring unreadable cached profile: {e}");
                None
            }
        }
    }

    /// Replace the cached profile
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Cache` if the record cannot be serialized.
    pub fn store_user(&mut self, record: &UserRecord) -> Result<(), ProfileError> {
        self.cached_user = Some(serde_json::to_string(record)?);
        Ok(())
    }

    /// Forget the token and cached profile
    pub fn logout(&mut self) {
        self.token = None;
        self.cached_user = None;
    }
}
