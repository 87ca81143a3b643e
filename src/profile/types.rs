//! Profile data structures
//!
//! - `UserRecord`: the profile as the account service returns it
//! - `UserProfile`: the display model derived from a record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Avatar shown when the account has no profile picture
pub const DEFAULT_AVATAR: &str =
    "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face";

/// Account profile as returned by the profile service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserRecord {
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub business_name: Option<String>,

    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub referral_code: Option<String>,

    #[serde(default)]
    pub referred_by: Option<String>,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub profile_pic_url: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub stats: Option<ProfileStats>,
}

/// Marketplace activity counters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ProfileStats {
    #[serde(default)]
    pub items_listed: u32,
    #[serde(default)]
    pub purchases_made: u32,
    #[serde(default)]
    pub saved_items: u32,
    #[serde(default)]
    pub seller_rating: f32,
    #[serde(default)]
    pub total_reviews: u32,
}

/// Which contact details have been verified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verification {
    pub email: bool,
    pub phone: bool,
    pub identity: bool,
}

/// Display model for the profile page
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub location: String,
    /// "Member since" text, e.g. `March 2023`
    pub join_date: Option<String>,
    pub verification: Verification,
    pub stats: ProfileStats,
    pub bio: String,
}

impl UserProfile {
    /// Derive the display model, filling gaps with placeholder text
    #[must_use]
    pub fn from_record(record: &UserRecord) -> Self {
        let name = non_blank(record.name.as_deref())
            .or_else(|| non_blank(record.business_name.as_deref()))
            .unwrap_or("User")
            .to_string();

        let phone = non_blank(record.phone.as_deref());

        let location = match (
            non_blank(record.state.as_deref()),
            non_blank(record.country.as_deref()),
        ) {
            (Some(state), Some(country)) => format!("{state}, {country}"),
            (_, Some(country)) => country.to_string(),
            _ => "Location not set".to_string(),
        };

        let bio = match non_blank(record.role.as_deref()) {
            Some(role) => format!("Member of our marketplace community. Role: {role}"),
            None => "Member of our marketplace community.".to_string(),
        };

        Self {
            id: record.id,
            name,
            email: record.email.clone(),
            phone: phone.unwrap_or("Not provided").to_string(),
            avatar: non_blank(record.profile_pic_url.as_deref())
                .unwrap_or(DEFAULT_AVATAR)
                .to_string(),
            location,
            join_date: record
                .created_at
                .map(|created| created.format("%B %Y").to_string()),
            verification: Verification {
                email: true,
                phone: phone.is_some(),
                identity: false,
            },
            stats: record.stats.unwrap_or_default(),
            bio,
        }
    }
}

impl From<&UserRecord> for UserProfile {
    fn from(record: &UserRecord) -> Self {
        Self::from_record(record)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
