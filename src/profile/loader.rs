//! Profile loading
//!
//! The profile page shows whatever the session has cached straight away and
//! then swaps in the server's copy once it arrives.
//!
//! ```text
//! begin(session)
//!     ├─ no token      → Failed(NotAuthenticated)
//!     ├─ cached record → Ready { Cached }
//!     └─ otherwise     → Loading
//!         ↓
//! refresh(session, source)
//!     ├─ Ok(record) → cache updated, Ready { Fresh }
//!     └─ Err(e)     → keep Ready { Cached } if shown, else Failed(e)
//! ```
//!
//! `upload_avatar` validates a picture, sends it with the session token and
//! writes the returned URL into both the cached record and the shown profile.

use super::error::ProfileError;
use super::session::SessionHandle;
use super::types::{UserProfile, UserRecord};
use super::upload::{AvatarFile, AvatarUploader, validate_avatar_upload};
use tracing::{debug, warn};

/// The account service that owns profile data
pub trait ProfileSource {
    /// Fetch the signed-in user's profile
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Fetch` (or another variant) if the request fails.
    fn fetch_profile(&self, token: &str) -> Result<UserRecord, ProfileError>;
}

/// Where the displayed profile came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Session cache, possibly stale
    Cached,
    /// Confirmed by the profile service
    Fresh,
}

/// Profile page state
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Ready {
        profile: UserProfile,
        freshness: Freshness,
    },
    Failed(ProfileError),
}

/// Drives `LoadState` through the cached-then-fresh sequence
#[derive(Debug)]
pub struct ProfileLoader {
    state: LoadState,
}

impl Default for ProfileLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LoadState::Loading,
        }
    }

    /// Begin and refresh in one call
    pub fn load(session: &mut SessionHandle, source: &impl ProfileSource) -> Self {
        let mut loader = Self::new();
        loader.begin(session);
        loader.refresh(session, source);
        loader
    }

    /// Show the cached profile, if any
    pub fn begin(&mut self, session: &SessionHandle) -> &LoadState {
        self.state = if !session.is_authenticated() {
            LoadState::Failed(ProfileError::NotAuthenticated)
        } else if let Some(record) = session.cached_user() {
            LoadState::Ready {
                profile: UserProfile::from_record(&record),
                freshness: Freshness::Cached,
            }
        } else {
            LoadState::Loading
        };
        &self.state
    }

    /// Fetch the profile from `source` and cache it in the session
    pub fn refresh(
        &mut self,
        session: &mut SessionHandle,
        source: &impl ProfileSource,
    ) -> &LoadState {
        let Some(token) = session.token() else {
            self.state = LoadState::Failed(ProfileError::NotAuthenticated);
            return &self.state;
        };

        match source.fetch_profile(token) {
            Ok(record) => {
                if let Err(e) = session.store_user(&record) {
                    warn!("failed to cache profile: {e}");
                }
                debug!(user_id = record.id, "profile refreshed");
                self.state = LoadState::Ready {
                    profile: UserProfile::from_record(&record),
                    freshness: Freshness::Fresh,
                };
            }
            Err(e) => {
                warn!("profile fetch failed: {e}");
                if !matches!(self.state, LoadState::Ready { .. }) {
                    self.state = LoadState::Failed(e);
                }
            }
        }

        &self.state
    }

    /// Replace the profile picture
    ///
    /// The file is checked against `max_bytes` before anything is sent. On
    /// success the new URL is stored in the session's cached record and shown
    /// in the current profile, and is returned.
    ///
    /// # Errors
    ///
    /// - `ProfileError::InvalidUpload` if the file is not an image or too large
    /// - `ProfileError::NotAuthenticated` if the session has no token
    /// - `ProfileError::Upload` if the service fails or returns no URL
    /// - `ProfileError::Cache` if the updated record cannot be cached
    pub fn upload_avatar(
        &mut self,
        session: &mut SessionHandle,
        uploader: &impl AvatarUploader,
        file: &AvatarFile,
        max_bytes: u64,
    ) -> Result<String, ProfileError> {
        validate_avatar_upload(&file.content_type, file.size(), max_bytes)?;
        let token = session.token().ok_or(ProfileError::NotAuthenticated)?;

        let receipt = uploader.upload_avatar(token, file)?;
        let url = receipt
            .profile_pic_url
            .ok_or_else(|| ProfileError::Upload("response carried no profile picture URL".to_string()))?;
        debug!(file = %file.file_name, "profile picture uploaded");

        if let Some(mut record) = session.cached_user() {
            record.profile_pic_url = Some(url.clone());
            session.store_user(&record)?;
        }
        if let LoadState::Ready { profile, .. } = &mut self.state {
            profile.avatar.clone_from(&url);
        }

        Ok(url)
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// Profile currently on screen
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        match &self.state {
            LoadState::Ready { profile, .. } => Some(profile),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }
}
