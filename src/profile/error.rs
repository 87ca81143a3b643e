//! Error types for the profile area

use thiserror::Error;

/// Errors that can occur while loading or editing a profile
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The session carries no token
    #[error("Not authenticated: no session token")]
    NotAuthenticated,

    /// The profile service failed
    #[error("Failed to fetch profile: {0}")]
    Fetch(String),

    /// An avatar upload was rejected before sending
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// The upload service failed or returned no picture URL
    #[error("Failed to upload profile picture: {0}")]
    Upload(String),

    /// The cached profile could not be (de)serialized
    #[error("Profile cache error: {0}")]
    Cache(#[from] serde_json::Error),
}
