//! Buyer profile area
//!
//! This module covers the state behind the profile page: the session handle
//! that carries credentials, loading the profile (cached first, then fresh),
//! the display model, tab routing and avatar upload checks. Network access is
//! left to a [`ProfileSource`] implementation supplied by the host.
//!
//! # Examples
//!
//! ```
//! use storefront::profile::{ProfileError, ProfileLoader, ProfileSource, SessionHandle, UserRecord};
//!
//! struct Fixed;
//!
//! impl ProfileSource for Fixed {
//!     fn fetch_profile(&self, _token: &str) -> Result<UserRecord, ProfileError> {
//!         Ok(UserRecord {
//!             id: 1,
//!             name: Some("Ada".to_string()),
//!             email: "ada@example.com".to_string(),
//!             ..Default::default()
//!         })
//!     }
//! }
//!
//! let mut session = SessionHandle::authenticated("token");
//! let loader = ProfileLoader::load(&mut session, &Fixed);
//! assert_eq!(loader.profile().unwrap().name, "Ada");
//! assert!(session.cached_user().is_some());
//! ```

pub mod error;
pub mod loader;
pub mod session;
pub mod tabs;
pub mod types;
pub mod upload;

pub use error::ProfileError;
pub use loader::{Freshness, LoadState, ProfileLoader, ProfileSource};
pub use session::SessionHandle;
pub use tabs::{ProfileTab, TabEntry, TabView, tabs};
pub use types::{DEFAULT_AVATAR, ProfileStats, UserProfile, UserRecord, Verification};
pub use upload::{
    AvatarFile, AvatarUploader, DEFAULT_MAX_AVATAR_BYTES, UploadReceipt, validate_avatar_upload,
};
