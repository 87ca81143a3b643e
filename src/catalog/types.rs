//! Catalog data structures
//!
//! Products as the catalog service returns them, and a `Catalog` container
//! that can be loaded from a TOML or JSON file.

use super::error::CatalogError;
use crate::filters::AvailabilityFlag;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A product listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product id
    pub id: String,

    /// Display name
    pub name: String,

    /// Category id
    pub category: String,

    /// Vendor id
    pub vendor: String,

    /// Current price
    pub price: f64,

    /// Average customer rating (0-5)
    #[serde(default)]
    pub rating: f32,

    /// Available to ship now
    #[serde(default)]
    pub in_stock: bool,

    /// Currently discounted
    #[serde(default)]
    pub on_sale: bool,

    /// Ships at no charge
    #[serde(default)]
    pub free_shipping: bool,
}

impl Product {
    /// Read the attribute behind an availability flag
    #[must_use]
    pub const fn has(&self, flag: AvailabilityFlag) -> bool {
        match flag {
            AvailabilityFlag::InStock => self.in_stock,
            AvailabilityFlag::OnSale => self.on_sale,
            AvailabilityFlag::FreeShipping => self.free_shipping,
        }
    }
}

/// In-memory product list
///
/// This is the root structure that gets serialized to TOML.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Catalog {
    /// All products, in listing order
    #[serde(rename = "product", default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load a catalog file
    ///
    /// Files ending in `.json` are parsed as a JSON array of products; anything
    /// else is parsed as TOML with `[[product]]` tables.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            let products: Vec<Product> = serde_json::from_str(&contents)?;
            Ok(Self::new(products))
        } else {
            Ok(toml::from_str(&contents)?)
        }
    }

    /// Number of products
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Find a product by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
