//! Avatar uploads
//!
//! Uploads are validated before they are sent: only images, and only up to a
//! configured size. The upload itself goes through an [`AvatarUploader`]
//! supplied by the host; see `ProfileLoader::upload_avatar` for the full flow.

use super::error::ProfileError;
use byte_unit::{Byte, UnitType};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// Default upload limit (5 MiB)
pub const DEFAULT_MAX_AVATAR_BYTES: u64 = 5 * 1024 * 1024;

/// An image picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarFile {
    pub file_name: String,
    /// MIME type reported for the file, e.g. `image/png`
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl AvatarFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, taking the content type from its extension
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn read(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        let file_name = path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned());
        Ok(Self::new(file_name, content_type_for(path), bytes))
    }

    /// File size in bytes
    #[must_use]
    pub fn size(&self) -> u64 {
        u64::try_from(self.bytes.len()).unwrap_or(u64::MAX)
    }
}

fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Response body of the upload service
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct UploadReceipt {
    /// New picture URL; absent if the service did not store the file
    #[serde(default)]
    pub profile_pic_url: Option<String>,
}

/// The service that stores profile pictures
pub trait AvatarUploader {
    /// Send `file` as the signed-in user's profile picture
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Upload` if the request fails.
    fn upload_avatar(&self, token: &str, file: &AvatarFile) -> Result<UploadReceipt, ProfileError>;
}

/// Check an avatar file before upload
///
/// # Errors
///
/// Returns `ProfileError::InvalidUpload` if the content type is not `image/*`
/// or the file is larger than `limit` bytes.
pub fn validate_avatar_upload(content_type: &str, size: u64, limit: u64) -> Result<(), ProfileError> {
    if !content_type.trim().to_ascii_lowercase().starts_with("image/") {
        return Err(ProfileError::InvalidUpload(
            "Please select an image file".to_string(),
        ));
    }

    if size > limit {
        let limit = Byte::from_u64(limit).get_appropriate_unit(UnitType::Binary);
        return Err(ProfileError::InvalidUpload(format!(
            "File size must be less than {limit}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_images_within_limit() {
        assert!(validate_avatar_upload("image/png", 1024, DEFAULT_MAX_AVATAR_BYTES).is_ok());
        assert!(validate_avatar_upload("IMAGE/JPEG", DEFAULT_MAX_AVATAR_BYTES, DEFAULT_MAX_AVATAR_BYTES).is_ok());
    }

    #[test]
    fn test_rejects_non_images() {
        let err = validate_avatar_upload("application/pdf", 10, DEFAULT_MAX_AVATAR_BYTES).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidUpload(ref msg) if msg.contains("image")));
    }

    #[test]
    fn test_read_file_guesses_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let photo = dir.path().join("Me.JPG");
        std::fs::write(&photo, [1u8, 2, 3]).unwrap();
        let notes = dir.path().join("notes.txt");
        std::fs::write(&notes, "hi").unwrap();

        let file = AvatarFile::read(&photo).unwrap();
        assert_eq!(file.file_name, "Me.JPG");
        assert_eq!(file.content_type, "image/jpeg");
        assert_eq!(file.size(), 3);

        let file = AvatarFile::read(&notes).unwrap();
        assert!(validate_avatar_upload(&file.content_type, file.size(), DEFAULT_MAX_AVATAR_BYTES).is_err());
    }

    #[test]
    fn test_receipt_from_service_json() {
        let receipt: UploadReceipt =
            serde_json::from_str(r#"{"message":"ok","profile_pic_url":"https://cdn/a.png"}"#).unwrap();
        assert_eq!(receipt.profile_pic_url.as_deref(), Some("https://cdn/a.png"));

        let empty: UploadReceipt = serde_json::from_str("{}").unwrap();
        assert!(empty.profile_pic_url.is_none());
    }

    #[test]
    fn test_rejects_oversized_files() {
        let err = validate_avatar_upload("image/webp", DEFAULT_MAX_AVATAR_BYTES + 1, DEFAULT_MAX_AVATAR_BYTES)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("File size must be less than"));
        assert!(msg.contains("MiB"));
    }
}
