//! Human-readable labels for filter ids
//!
//! Chips display names rather than ids. The lookup tables are static
//! configuration supplied by the host; the defaults mirror the marketplace's
//! built-in category and vendor lists.

use super::types::AvailabilityFlag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Id to label tables for categories, vendors and availability flags
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelLookup {
    /// Category id to display name
    #[serde(default)]
    pub categories: BTreeMap<String, String>,

    /// Vendor id to display name
    #[serde(default)]
    pub vendors: BTreeMap<String, String>,

    /// Availability key (`inStock`, ...) to display name
    #[serde(default)]
    pub availability: BTreeMap<String, String>,
}

const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("electronics", "Electronics"),
    ("clothing", "Clothing & Fashion"),
    ("home", "Home & Garden"),
    ("books", "Books & Media"),
    ("sports", "Sports & Outdoors"),
    ("beauty", "Beauty & Health"),
    ("toys", "Toys & Games"),
    ("automotive", "Automotive"),
];

const DEFAULT_VENDORS: &[(&str, &str)] = &[
    ("techstore", "TechStore Pro"),
    ("fashionhub", "Fashion Hub"),
    ("homeessentials", "Home Essentials"),
    ("bookworm", "BookWorm Corner"),
    ("sportsgear", "Sports Gear Co"),
    ("beautyworld", "Beauty World"),
];

const DEFAULT_AVAILABILITY: &[(&str, &str)] = &[
    ("inStock", "In Stock"),
    ("onSale", "On Sale"),
    ("freeShipping", "Free Shipping"),
];

fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(id, label)| ((*id).to_string(), (*label).to_string()))
        .collect()
}

impl Default for LabelLookup {
    fn default() -> Self {
        Self {
            categories: table(DEFAULT_CATEGORIES),
            vendors: table(DEFAULT_VENDORS),
            availability: table(DEFAULT_AVAILABILITY),
        }
    }
}

impl LabelLookup {
    /// Lookup with no entries; every label falls back to its id
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            categories: BTreeMap::new(),
            vendors: BTreeMap::new(),
            availability: BTreeMap::new(),
        }
    }

    /// Label for a category, or the id itself when unknown
    #[must_use]
    pub fn category<'a>(&'a self, id: &'a str) -> &'a str {
        self.categories.get(id).map_or(id, String::as_str)
    }

    /// Label for a vendor, or the id itself when unknown
    #[must_use]
    pub fn vendor<'a>(&'a self, id: &'a str) -> &'a str {
        self.vendors.get(id).map_or(id, String::as_str)
    }

    /// Label for an availability flag, or its key when unknown
    #[must_use]
    pub fn availability(&self, flag: AvailabilityFlag) -> &str {
        self.availability
            .get(flag.key())
            .map_or(flag.key(), String::as_str)
    }

    /// Overlay entries from `other`, replacing labels with the same id
    pub fn extend(&mut self, other: &Self) {
        self.categories
            .extend(other.categories.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.vendors
            .extend(other.vendors.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.availability
            .extend(other.availability.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let labels = LabelLookup::default();
        assert_eq!(labels.category("electronics"), "Electronics");
        assert_eq!(labels.category("clothing"), "Clothing & Fashion");
        assert_eq!(labels.vendor("bookworm"), "BookWorm Corner");
        assert_eq!(labels.availability(AvailabilityFlag::InStock), "In Stock");
        assert_eq!(labels.availability(AvailabilityFlag::FreeShipping), "Free Shipping");
    }

    #[test]
    fn test_unknown_ids_fall_back() {
        let labels = LabelLookup::empty();
        assert_eq!(labels.category("xyz"), "xyz");
        assert_eq!(labels.vendor("acme"), "acme");
        assert_eq!(labels.availability(AvailabilityFlag::OnSale), "onSale");
    }

    #[test]
    fn test_extend_overrides() {
        let mut labels = LabelLookup::default();
        let mut custom = LabelLookup::empty();
        custom
            .categories
            .insert("electronics".to_string(), "Gadgets".to_string());
        custom
            .vendors
            .insert("acme".to_string(), "Acme Corp".to_string());

        labels.extend(&custom);

        assert_eq!(labels.category("electronics"), "Gadgets");
        assert_eq!(labels.category("books"), "Books & Media");
        assert_eq!(labels.vendor("acme"), "Acme Corp");
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let labels: LabelLookup = toml::from_str(
            r#"
            [categories]
            garden = "Garden Supplies"
            "#,
        )
        .unwrap();

        assert_eq!(labels.category("garden"), "Garden Supplies");
        assert!(labels.vendors.is_empty());
    }
}
