//! Filter data structures and types
//!
//! This module defines the core data structures for a storefront filter selection:
//! - `FilterSelection`: The criteria the shopper picked (categories, vendors, price, rating, availability)
//! - `PriceRange`: Raw min/max price input, kept verbatim until a catalog query parses it
//! - `Availability`: The fixed set of availability flags
//! - `PriceBound` / `AvailabilityFlag`: Selectors used by the engine's edit operations

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Highest selectable minimum rating
pub const MAX_RATING: u8 = 5;

/// Filter selection representing the shopper's browse criteria
///
/// Field names serialize in camelCase so a selection round-trips with the
/// web front end's JSON. Deserialized selections are normalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", from = "SelectionRecord")]
pub struct FilterSelection {
    /// Category ids, in the order they were selected
    #[serde(default)]
    pub categories: Vec<String>,

    /// Vendor ids, in the order they were selected
    #[serde(default)]
    pub vendors: Vec<String>,

    /// Raw price bounds as typed by the user
    #[serde(default)]
    pub price_range: PriceRange,

    /// Minimum star rating (0 = no rating filter)
    #[serde(default)]
    pub min_rating: u8,

    /// Availability flags
    #[serde(default)]
    pub availability: Availability,
}

impl FilterSelection {
    /// Create the canonical empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new selection builder
    #[must_use]
    pub fn builder() -> FilterSelectionBuilder {
        FilterSelectionBuilder::default()
    }

    /// Add or remove a category id
    ///
    /// Returns true if the selection changed.
    pub fn set_category(&mut self, id: &str, included: bool) -> bool {
        set_membership(&mut self.categories, id, included)
    }

    /// Add or remove a vendor id
    ///
    /// Returns true if the selection changed.
    pub fn set_vendor(&mut self, id: &str, included: bool) -> bool {
        set_membership(&mut self.vendors, id, included)
    }

    /// Check if a category is selected
    #[must_use]
    pub fn has_category(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c == id)
    }

    /// Check if a vendor is selected
    #[must_use]
    pub fn has_vendor(&self, id: &str) -> bool {
        self.vendors.iter().any(|v| v == id)
    }

    /// Store one raw price bound verbatim
    pub fn set_price_bound(&mut self, bound: PriceBound, raw: String) {
        match bound {
            PriceBound::Min => self.price_range.min = raw,
            PriceBound::Max => self.price_range.max = raw,
        }
    }

    /// Select a minimum rating with one-click deselect
    ///
    /// Selecting the active rating again clears it. Ratings above
    /// [`MAX_RATING`] are clamped.
    pub fn toggle_min_rating(&mut self, rating: u8) {
        let rating = rating.min(MAX_RATING);
        self.min_rating = if self.min_rating == rating { 0 } else { rating };
    }

    /// Number of active criteria
    ///
    /// Each category and vendor counts once, a price range with either bound
    /// set counts once, a rating counts once and each enabled availability
    /// flag counts once.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.categories.len()
            + self.vendors.len()
            + usize::from(self.price_range.is_set())
            + usize::from(self.min_rating > 0)
            + self.availability.enabled_count()
    }

    /// Check if nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Drop repeated ids (first occurrence wins) and clamp the rating to
    /// [`MAX_RATING`]
    #[must_use]
    pub fn normalized(mut self) -> Self {
        dedup_in_order(&mut self.categories);
        dedup_in_order(&mut self.vendors);
        self.min_rating = self.min_rating.min(MAX_RATING);
        self
    }
}

fn dedup_in_order(ids: &mut Vec<String>) {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.retain(|id| seen.insert(id.clone()));
}

/// Wire form of a selection before normalization
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SelectionRecord {
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    vendors: Vec<String>,
    #[serde(default)]
    price_range: PriceRange,
    #[serde(default)]
    min_rating: u8,
    #[serde(default)]
    availability: Availability,
}

impl From<SelectionRecord> for FilterSelection {
    fn from(record: SelectionRecord) -> Self {
        Self {
            categories: record.categories,
            vendors: record.vendors,
            price_range: record.price_range,
            min_rating: record.min_rating,
            availability: record.availability,
        }
        .normalized()
    }
}

/// Add or remove `id`, keeping the list free of duplicates
fn set_membership(ids: &mut Vec<String>, id: &str, included: bool) -> bool {
    let present = ids.iter().any(|existing| existing == id);
    match (included, present) {
        (true, false) => {
            ids.push(id.to_string());
            true
        }
        (false, true) => {
            ids.retain(|existing| existing != id);
            true
        }
        _ => false,
    }
}

/// Builder for `FilterSelection`
#[derive(Debug, Clone, Default)]
pub struct FilterSelectionBuilder {
    selection: FilterSelection,
}

impl FilterSelectionBuilder {
    /// Add a single category
    #[must_use]
    pub fn category(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.selection.set_category(&id, true);
        self
    }

    /// Add a single vendor
    #[must_use]
    pub fn vendor(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.selection.set_vendor(&id, true);
        self
    }

    /// Set the raw minimum price
    #[must_use]
    pub fn min_price(mut self, raw: impl Into<String>) -> Self {
        self.selection.price_range.min = raw.into();
        self
    }

    /// Set the raw maximum price
    #[must_use]
    pub fn max_price(mut self, raw: impl Into<String>) -> Self {
        self.selection.price_range.max = raw.into();
        self
    }

    /// Set the minimum rating (clamped to [`MAX_RATING`])
    #[must_use]
    pub fn min_rating(mut self, rating: u8) -> Self {
        self.selection.min_rating = rating.min(MAX_RATING);
        self
    }

    /// Enable one availability flag
    #[must_use]
    pub fn availability(mut self, flag: AvailabilityFlag) -> Self {
        self.selection.availability.set(flag, true);
        self
    }

    /// Build the `FilterSelection`
    #[must_use]
    pub fn build(self) -> FilterSelection {
        self.selection
    }
}

/// Raw price bounds
///
/// Both bounds are stored exactly as typed so that partial input such as
/// `"1"` on the way to `"100"`, or leading zeros, survive until query time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PriceRange {
    /// Lower bound (empty = unset)
    #[serde(default)]
    pub min: String,

    /// Upper bound (empty = unset)
    #[serde(default)]
    pub max: String,
}

impl PriceRange {
    /// Check if either bound holds input
    #[must_use]
    pub fn is_set(&self) -> bool {
        !self.min.is_empty() || !self.max.is_empty()
    }

    /// Clear both bounds
    pub fn clear(&mut self) {
        self.min.clear();
        self.max.clear();
    }
}

/// Which end of the price range an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBound {
    /// Lower bound
    Min,
    /// Upper bound
    Max,
}

/// Availability flags
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// Only items currently in stock
    #[serde(default)]
    pub in_stock: bool,

    /// Only discounted items
    #[serde(default)]
    pub on_sale: bool,

    /// Only items shipped for free
    #[serde(default)]
    pub free_shipping: bool,
}

impl Availability {
    /// Read one flag
    #[must_use]
    pub const fn get(&self, flag: AvailabilityFlag) -> bool {
        match flag {
            AvailabilityFlag::InStock => self.in_stock,
            AvailabilityFlag::OnSale => self.on_sale,
            AvailabilityFlag::FreeShipping => self.free_shipping,
        }
    }

    /// Write one flag
    pub const fn set(&mut self, flag: AvailabilityFlag, value: bool) {
        match flag {
            AvailabilityFlag::InStock => self.in_stock = value,
            AvailabilityFlag::OnSale => self.on_sale = value,
            AvailabilityFlag::FreeShipping => self.free_shipping = value,
        }
    }

    /// Enabled flags in canonical order
    pub fn enabled(&self) -> impl Iterator<Item = AvailabilityFlag> + '_ {
        AvailabilityFlag::ALL
            .into_iter()
            .filter(|flag| self.get(*flag))
    }

    /// Number of enabled flags
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.enabled().count()
    }
}

/// A single availability flag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum AvailabilityFlag {
    /// In stock
    InStock,
    /// On sale
    OnSale,
    /// Free shipping
    FreeShipping,
}

impl AvailabilityFlag {
    /// All flags in canonical display order
    pub const ALL: [Self; 3] = [Self::InStock, Self::OnSale, Self::FreeShipping];

    /// Stable key used in chip ids and label tables
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::InStock => "inStock",
            Self::OnSale => "onSale",
            Self::FreeShipping => "freeShipping",
        }
    }
}

impl fmt::Display for AvailabilityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AvailabilityFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.key() == s)
            .ok_or_else(|| format!("Unknown availability flag: {s}"))
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(no filters)");
        }

        let mut parts = Vec::new();

        if !self.categories.is_empty() {
            parts.push(format!("categories: {}", self.categories.join(", ")));
        }

        if !self.vendors.is_empty() {
            parts.push(format!("vendors: {}", self.vendors.join(", ")));
        }

        if self.price_range.is_set() {
            parts.push(format!(
                "price: {}..{}",
                self.price_range.min, self.price_range.max
            ));
        }

        if self.min_rating > 0 {
            parts.push(format!("rating: {}+", self.min_rating));
        }

        let flags: Vec<&str> = self.availability.enabled().map(AvailabilityFlag::key).collect();
        if !flags.is_empty() {
            parts.push(format!("availability: {}", flags.join(", ")));
        }

        write!(f, "{}", parts.join("; "))
    }
}
