//! Error types for catalog operations
//!
//! Covers loading product files and turning a raw filter selection into a
//! validated query.

use std::io;
use thiserror::Error;

/// Errors that can occur while loading or querying the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A price bound is not a non-negative number
    #[error("Invalid {bound} price '{raw}': expected a non-negative number")]
    InvalidPrice {
        /// Which bound ("min" or "max")
        bound: &'static str,
        /// The raw input
        raw: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
