//! Catalog consumption
//!
//! The filter engine hands over a committed selection; this module turns it
//! into results. It parses the raw price bounds, matches products against
//! every criterion and computes the per-facet counts shown in the filter panel.
//! Catalog storage and ranking live in the catalog service, not here.
//!
//! # Examples
//!
//! ```
//! use storefront::catalog::{Catalog, CatalogQuery, Product};
//! use storefront::filters::FilterSelection;
//!
//! let catalog = Catalog::new(vec![Product {
//!     id: "p1".to_string(),
//!     name: "Headphones".to_string(),
//!     category: "electronics".to_string(),
//!     vendor: "techstore".to_string(),
//!     price: 59.0,
//!     rating: 4.5,
//!     in_stock: true,
//!     on_sale: false,
//!     free_shipping: false,
//! }]);
//!
//! let selection = FilterSelection::builder().category("electronics").max_price("60").build();
//! let query = CatalogQuery::from_selection(&selection).unwrap();
//! assert_eq!(query.run(&catalog).len(), 1);
//! ```

pub mod error;
pub mod query;
pub mod types;

pub use error::CatalogError;
pub use query::{CatalogQuery, FacetCounts, PriceBounds};
pub use types::{Catalog, Product};
