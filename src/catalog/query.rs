//! Applying a committed filter selection to the catalog
//!
//! The filter engine stores price bounds as raw text and never validates ids.
//! This module is where that input is interpreted: bounds are parsed, an
//! inverted range yields no results, and products are matched against every
//! criterion.
//!
//! # Matching rules
//!
//! - Categories and vendors: a product matches if its id is one of the selected
//!   ids (an empty list matches everything)
//! - Price: inclusive on both bounds
//! - Rating: product rating at least `min_rating`
//! - Availability: each enabled flag requires the product attribute

use super::error::CatalogError;
use super::types::{Catalog, Product};
use crate::filters::{AvailabilityFlag, FilterSelection, PriceRange};
use std::collections::BTreeMap;
use tracing::debug;

/// Parsed price bounds
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceBounds {
    /// Lowest accepted price, inclusive (`None` = unbounded)
    pub min: Option<f64>,
    /// Highest accepted price, inclusive (`None` = unbounded)
    pub max: Option<f64>,
}

impl PriceBounds {
    /// Parse raw bounds
    ///
    /// Blank input means the bound is unset. Leading zeros and surrounding
    /// whitespace are accepted.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidPrice` if a bound is not a finite,
    /// non-negative number.
    pub fn parse(range: &PriceRange) -> Result<Self, CatalogError> {
        Ok(Self {
            min: parse_bound("min", &range.min)?,
            max: parse_bound("max", &range.max)?,
        })
    }

    /// Check if both bounds are set and `min > max`
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }

    /// Check if a price falls within the bounds
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }
}

fn parse_bound(bound: &'static str, raw: &str) -> Result<Option<f64>, CatalogError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let invalid = || CatalogError::InvalidPrice {
        bound,
        raw: raw.to_string(),
    };

    let value: f64 = trimmed.parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }

    Ok(Some(value))
}

/// Validated form of a filter selection, ready to run against a catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    categories: Vec<String>,
    vendors: Vec<String>,
    price: PriceBounds,
    min_rating: u8,
    required: Vec<AvailabilityFlag>,
}

impl CatalogQuery {
    /// Build a query from a committed selection
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidPrice` if a price bound cannot be parsed.
    pub fn from_selection(selection: &FilterSelection) -> Result<Self, CatalogError> {
        let price = PriceBounds::parse(&selection.price_range)?;
        if price.is_inverted() {
            debug!(?price, "inverted price range, query will match nothing");
        }

        Ok(Self {
            categories: selection.categories.clone(),
            vendors: selection.vendors.clone(),
            price,
            min_rating: selection.min_rating,
            required: selection.availability.enabled().collect(),
        })
    }

    /// Parsed price bounds
    #[must_use]
    pub const fn price(&self) -> &PriceBounds {
        &self.price
    }

    /// Check if a product satisfies every criterion
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product) && self.matches_vendor(product) && self.matches_rest(product)
    }

    /// Products matching the query, in catalog order
    #[must_use]
    pub fn run<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        if self.price.is_inverted() {
            return Vec::new();
        }

        catalog.products.iter().filter(|p| self.matches(p)).collect()
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category)
    }

    fn matches_vendor(&self, product: &Product) -> bool {
        self.vendors.is_empty() || self.vendors.contains(&product.vendor)
    }

    /// Price, rating and availability
    fn matches_rest(&self, product: &Product) -> bool {
        !self.price.is_inverted()
            && self.price.contains(product.price)
            && product.rating >= f32::from(self.min_rating)
            && self.required.iter().all(|flag| product.has(*flag))
    }
}

/// Per-facet product counts shown next to each panel checkbox
///
/// The count for a category is the number of products that would match if that
/// category were the only one selected, with every other criterion unchanged.
/// Vendor counts work the same way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacetCounts {
    /// Category id to matching product count
    pub categories: BTreeMap<String, usize>,
    /// Vendor id to matching product count
    pub vendors: BTreeMap<String, usize>,
}

impl FacetCounts {
    /// Count products per category and vendor for a selection
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidPrice` if a price bound cannot be parsed.
    pub fn compute(catalog: &Catalog, selection: &FilterSelection) -> Result<Self, CatalogError> {
        let query = CatalogQuery::from_selection(selection)?;
        let mut counts = Self::default();

        for product in &catalog.products {
            if !query.matches_rest(product) {
                continue;
            }

            if query.matches_vendor(product) {
                *counts.categories.entry(product.category.clone()).or_default() += 1;
            }

            if query.matches_category(product) {
                *counts.vendors.entry(product.vendor.clone()).or_default() += 1;
            }
        }

        Ok(counts)
    }

    /// Count for a category (0 if absent)
    #[must_use]
    pub fn category(&self, id: &str) -> usize {
        self.categories.get(id).copied().unwrap_or(0)
    }

    /// Count for a vendor (0 if absent)
    #[must_use]
    pub fn vendor(&self, id: &str) -> usize {
        self.vendors.get(id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;

    fn ids<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_parse_bounds() {
        let range = PriceRange {
            min: "010".to_string(),
            max: " 49.5 ".to_string(),
        };
        let bounds = PriceBounds::parse(&range).unwrap();
        assert_eq!(bounds.min, Some(10.0));
        assert_eq!(bounds.max, Some(49.5));

        let unset = PriceBounds::parse(&PriceRange::default()).unwrap();
        assert_eq!(unset, PriceBounds::default());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for raw in ["abc", "-5", "inf", "NaN", "1e400"] {
            let range = PriceRange {
                min: raw.to_string(),
                max: String::new(),
            };
            let err = PriceBounds::parse(&range).unwrap_err();
            assert!(
                matches!(err, CatalogError::InvalidPrice { bound: "min", .. }),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_selection_matches_everything() {
        let catalog = sample_catalog();
        let query = CatalogQuery::from_selection(&FilterSelection::new()).unwrap();
        assert_eq!(query.run(&catalog).len(), catalog.len());
    }

    #[test]
    fn test_categories_are_or_within_facet() {
        let catalog = sample_catalog();
        let selection = FilterSelection::builder()
            .category("books")
            .category("toys")
            .build();

        let query = CatalogQuery::from_selection(&selection).unwrap();
        assert_eq!(ids(&query.run(&catalog)), vec!["novel", "puzzle"]);
    }

    #[test]
    fn test_criteria_are_and_across_facets() {
        let catalog = sample_catalog();
        let selection = FilterSelection::builder()
            .category("electronics")
            .max_price("100")
            .availability(AvailabilityFlag::InStock)
            .build();

        let query = CatalogQuery::from_selection(&selection).unwrap();
        assert_eq!(ids(&query.run(&catalog)), vec!["headphones"]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let catalog = sample_catalog();
        let selection = FilterSelection::builder()
            .min_price("12")
            .max_price("59.99")
            .build();

        let query = CatalogQuery::from_selection(&selection).unwrap();
        assert_eq!(ids(&query.run(&catalog)), vec!["headphones", "novel", "puzzle"]);
    }

    #[test]
    fn test_rating_threshold() {
        let catalog = sample_catalog();
        let selection = FilterSelection::builder().min_rating(4).build();

        let query = CatalogQuery::from_selection(&selection).unwrap();
        assert_eq!(ids(&query.run(&catalog)), vec!["headphones", "laptop", "novel"]);
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let catalog = sample_catalog();
        let selection = FilterSelection::builder()
            .min_price("100")
            .max_price("10")
            .build();

        let query = CatalogQuery::from_selection(&selection).unwrap();
        assert!(query.price().is_inverted());
        assert!(query.run(&catalog).is_empty());
        assert!(catalog.products.iter().all(|p| !query.matches(p)));
    }

    #[test]
    fn test_unknown_ids_match_nothing() {
        let catalog = sample_catalog();
        let selection = FilterSelection::builder().vendor("ghost").build();

        let query = CatalogQuery::from_selection(&selection).unwrap();
        assert!(query.run(&catalog).is_empty());
    }

    #[test]
    fn test_facet_counts_ignore_own_facet() {
        let catalog = sample_catalog();
        let selection = FilterSelection::builder()
            .category("electronics")
            .vendor("techstore")
            .build();

        let counts = FacetCounts::compute(&catalog, &selection).unwrap();

        // Category counts are restricted by vendor only
        assert_eq!(counts.category("electronics"), 2);
        assert_eq!(counts.category("books"), 0);
        // Vendor counts are restricted by category only
        assert_eq!(counts.vendor("techstore"), 2);
        assert_eq!(counts.vendor("gadgetbarn"), 1);
        assert_eq!(counts.vendor("bookworm"), 0);
    }

    #[test]
    fn test_facet_counts_respect_other_criteria() {
        let catalog = sample_catalog();
        let selection = FilterSelection::builder()
            .availability(AvailabilityFlag::FreeShipping)
            .build();

        let counts = FacetCounts::compute(&catalog, &selection).unwrap();
        let total: usize = counts.categories.values().sum();
        let free = catalog.products.iter().filter(|p| p.free_shipping).count();
        assert_eq!(total, free);
    }
}
