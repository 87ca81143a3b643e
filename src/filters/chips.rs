//! Filter chips derived from a committed selection
//!
//! A chip is a removable token for one active criterion. Chips have no state
//! of their own: they are recomputed from the selection and a label lookup on
//! every read.

use super::labels::LabelLookup;
use super::types::{AvailabilityFlag, FilterSelection};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `ref_value` carried by the price range chip
pub const PRICE_RANGE_REF: &str = "priceRange";

/// `ref_value` carried by the rating chip
pub const RATING_REF: &str = "rating";

/// Which criterion a chip represents
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ChipKind {
    /// One selected category; `ref_value` is the category id
    Category,
    /// One selected vendor; `ref_value` is the vendor id
    Vendor,
    /// The price range as a whole
    PriceRange,
    /// The minimum rating
    Rating,
    /// One availability flag; `ref_value` is the flag key
    Availability,
}

/// One removable active-filter token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterChip {
    /// Stable composite key, unique within one derivation
    pub id: String,

    /// Display text
    pub label: String,

    /// Criterion type
    pub kind: ChipKind,

    /// Id or key needed to remove exactly this criterion
    pub ref_value: String,
}

impl FilterChip {
    fn new(kind: ChipKind, id: String, label: String, ref_value: String) -> Self {
        Self {
            id,
            label,
            kind,
            ref_value,
        }
    }
}

impl fmt::Display for FilterChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Derive the ordered chip list for a selection
///
/// Order: categories (selection order), vendors (selection order), price range,
/// rating, then availability flags in canonical order. Ids missing from
/// `labels` are shown verbatim.
#[must_use]
pub fn derive_chips(selection: &FilterSelection, labels: &LabelLookup) -> Vec<FilterChip> {
    let mut chips = Vec::with_capacity(selection.active_count());

    for id in &selection.categories {
        chips.push(FilterChip::new(
            ChipKind::Category,
            format!("category-{id}"),
            labels.category(id).to_string(),
            id.clone(),
        ));
    }

    for id in &selection.vendors {
        chips.push(FilterChip::new(
            ChipKind::Vendor,
            format!("vendor-{id}"),
            labels.vendor(id).to_string(),
            id.clone(),
        ));
    }

    if selection.price_range.is_set() {
        chips.push(FilterChip::new(
            ChipKind::PriceRange,
            "price-range".to_string(),
            price_label(&selection.price_range.min, &selection.price_range.max),
            PRICE_RANGE_REF.to_string(),
        ));
    }

    if selection.min_rating > 0 {
        chips.push(FilterChip::new(
            ChipKind::Rating,
            "rating".to_string(),
            rating_label(selection.min_rating),
            RATING_REF.to_string(),
        ));
    }

    for flag in selection.availability.enabled() {
        chips.push(availability_chip(flag, labels));
    }

    chips
}

fn availability_chip(flag: AvailabilityFlag, labels: &LabelLookup) -> FilterChip {
    FilterChip::new(
        ChipKind::Availability,
        format!("availability-{}", flag.key()),
        labels.availability(flag).to_string(),
        flag.key().to_string(),
    )
}

/// Label for the price chip, e.g. `$10 - $50`
///
/// A missing lower bound shows as `0`, a missing upper bound as `∞`.
#[must_use]
pub fn price_label(min: &str, max: &str) -> String {
    let min = if min.is_empty() { "0" } else { min };
    let max = if max.is_empty() { "∞" } else { max };
    format!("${min} - ${max}")
}

/// Label for the rating chip, e.g. `4+ Stars`
#[must_use]
pub fn rating_label(rating: u8) -> String {
    format!("{rating}+ Stars")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        let selection = FilterSelection::builder()
            .category("electronics")
            .min_price("10")
            .max_price("50")
            .min_rating(4)
            .availability(AvailabilityFlag::InStock)
            .build();

        let mut labels = LabelLookup::empty();
        labels
            .categories
            .insert("electronics".to_string(), "Electronics".to_string());
        labels
            .availability
            .insert("inStock".to_string(), "In Stock".to_string());

        let chips = derive_chips(&selection, &labels);
        let summary: Vec<(&str, ChipKind)> =
            chips.iter().map(|c| (c.label.as_str(), c.kind)).collect();

        assert_eq!(
            summary,
            vec![
                ("Electronics", ChipKind::Category),
                ("$10 - $50", ChipKind::PriceRange),
                ("4+ Stars", ChipKind::Rating),
                ("In Stock", ChipKind::Availability),
            ]
        );
        assert_eq!(selection.active_count(), 4);
    }

    #[test]
    fn test_chip_ids_and_refs() {
        let selection = FilterSelection::builder()
            .category("books")
            .vendor("bookworm")
            .max_price("30")
            .min_rating(2)
            .availability(AvailabilityFlag::OnSale)
            .build();

        let chips = derive_chips(&selection, &LabelLookup::default());
        let ids: Vec<&str> = chips.iter().map(|c| c.id.as_str()).collect();
        let refs: Vec<&str> = chips.iter().map(|c| c.ref_value.as_str()).collect();

        assert_eq!(
            ids,
            vec![
                "category-books",
                "vendor-bookworm",
                "price-range",
                "rating",
                "availability-onSale"
            ]
        );
        assert_eq!(refs, vec!["books", "bookworm", "priceRange", "rating", "onSale"]);
    }

    #[test]
    fn test_empty_price_range_has_no_chip() {
        let selection = FilterSelection::builder().min_price("").max_price("").build();
        assert!(derive_chips(&selection, &LabelLookup::default()).is_empty());
        assert_eq!(selection.active_count(), 0);
    }

    #[test]
    fn test_zero_min_price_has_chip() {
        let selection = FilterSelection::builder().min_price("0").build();
        let chips = derive_chips(&selection, &LabelLookup::default());

        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].label, "$0 - $∞");
        assert_eq!(selection.active_count(), 1);
    }

    #[test]
    fn test_unknown_category_uses_raw_id() {
        let selection = FilterSelection::builder().category("xyz").build();
        let chips = derive_chips(&selection, &LabelLookup::default());

        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].label, "xyz");
        assert_eq!(chips[0].kind, ChipKind::Category);
    }

    #[test]
    fn test_availability_order_is_canonical() {
        let selection = FilterSelection::builder()
            .availability(AvailabilityFlag::FreeShipping)
            .availability(AvailabilityFlag::OnSale)
            .availability(AvailabilityFlag::InStock)
            .build();

        let labels: Vec<String> = derive_chips(&selection, &LabelLookup::default())
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, vec!["In Stock", "On Sale", "Free Shipping"]);
    }

    #[test]
    fn test_derivation_is_pure() {
        let selection = FilterSelection::builder()
            .category("toys")
            .vendor("unknown-vendor")
            .min_rating(1)
            .build();
        let labels = LabelLookup::default();

        assert_eq!(derive_chips(&selection, &labels), derive_chips(&selection, &labels));
    }

    #[test]
    fn test_price_label_formats() {
        assert_eq!(price_label("10", "50"), "$10 - $50");
        assert_eq!(price_label("", "50"), "$0 - $50");
        assert_eq!(price_label("010", ""), "$010 - $∞");
    }
}
