//! Storefront - filter, catalog and profile state for a marketplace front end
//!
//! This library provides the state behind a marketplace's browse and profile
//! pages, independent of any UI framework: the shopper's filter selection with
//! draft and committed copies, derived filter chips, catalog filtering with
//! facet counts, and the buyer profile loader.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod filters;
pub mod logging;
pub mod output;
pub mod profile;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Catalog error
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Profile error
    #[error("Profile error: {0}")]
    Profile(#[from] profile::ProfileError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
