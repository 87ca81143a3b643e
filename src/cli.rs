//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for the `storefront` host binary using
//! the `clap` crate. The binary is a thin driver over the library: it builds a
//! filter selection through the engine and prints chips, matching products or
//! facet counts.
//!
//! # Commands
//!
//! - **chips**: Show the chips and active count for a selection
//! - **search**: List catalog products matching a selection
//! - **facets**: Show per-category and per-vendor counts for a selection
//! - **avatar**: Check an image against the avatar upload limit
//! - **config**: Show configuration
//!
//! # Examples
//!
//! ```bash
//! storefront chips -c electronics --min-price 10 --max-price 50 -r 4 --in-stock
//! storefront search --catalog products.toml --vendor techstore --on-sale
//! storefront -q facets --catalog products.json --free-shipping
//! ```

use crate::filters::{ApplyMode, AvailabilityFlag, FilterEngine, FilterSelection, PriceBound};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Filter flags shared by every command that takes a selection
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionArgs {
    /// Category id to include (repeatable)
    #[arg(short = 'c', long = "category", value_name = "ID")]
    pub categories: Vec<String>,

    /// Vendor id to include (repeatable)
    #[arg(long = "vendor", value_name = "ID")]
    pub vendors: Vec<String>,

    /// Minimum price (kept verbatim until the catalog query)
    #[arg(long = "min-price", value_name = "PRICE")]
    pub min_price: Option<String>,

    /// Maximum price (kept verbatim until the catalog query)
    #[arg(long = "max-price", value_name = "PRICE")]
    pub max_price: Option<String>,

    /// Minimum star rating
    #[arg(short = 'r', long = "rating", value_name = "STARS", value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Option<u8>,

    /// Only items in stock
    #[arg(long = "in-stock")]
    pub in_stock: bool,

    /// Only items on sale
    #[arg(long = "on-sale")]
    pub on_sale: bool,

    /// Only items with free shipping
    #[arg(long = "free-shipping")]
    pub free_shipping: bool,
}

impl SelectionArgs {
    /// Replay the flags as panel edits and apply them
    ///
    /// Going through the engine keeps the CLI on the same rules as any other
    /// host (deduplicated ids, clamped rating).
    #[must_use]
    pub fn to_selection(&self) -> FilterSelection {
        let mut engine = FilterEngine::new(ApplyMode::Deferred);

        for id in &self.categories {
            engine.toggle_category(id, true);
        }
        for id in &self.vendors {
            engine.toggle_vendor(id, true);
        }
        if let Some(min) = &self.min_price {
            engine.set_price_bound(PriceBound::Min, min.clone());
        }
        if let Some(max) = &self.max_price {
            engine.set_price_bound(PriceBound::Max, max.clone());
        }
        if let Some(rating) = self.rating {
            engine.set_min_rating(rating);
        }

        let flags = [
            (AvailabilityFlag::InStock, self.in_stock),
            (AvailabilityFlag::OnSale, self.on_sale),
            (AvailabilityFlag::FreeShipping, self.free_shipping),
        ];
        for (flag, enabled) in flags {
            if enabled {
                engine.set_availability(flag, true);
            }
        }

        engine.apply().clone()
    }
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration (built-in labels included) as TOML
    Show,
    /// Print the configuration file path
    Path,
}

/// Top-level commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the filter chips for a selection
    Chips {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// List catalog products matching a selection
    #[command(visible_alias = "s")]
    Search {
        /// Catalog file (TOML or JSON); defaults to the configured catalog
        #[arg(long = "catalog", value_name = "FILE")]
        catalog: Option<PathBuf>,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Show product counts per category and vendor
    Facets {
        /// Catalog file (TOML or JSON); defaults to the configured catalog
        #[arg(long = "catalog", value_name = "FILE")]
        catalog: Option<PathBuf>,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Check an image against the configured avatar upload limit
    Avatar {
        /// Image file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Storefront command-line host
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Marketplace filter and catalog tool", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use this config file instead of the default location
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_chips_flags() {
        let cli = Cli::try_parse_from([
            "storefront",
            "chips",
            "-c",
            "electronics",
            "-c",
            "electronics",
            "--min-price",
            "010",
            "-r",
            "4",
            "--in-stock",
        ])
        .unwrap();

        let Commands::Chips { selection } = cli.command else {
            panic!("expected chips command");
        };

        let built = selection.to_selection();
        assert_eq!(built.categories, vec!["electronics".to_string()]);
        assert_eq!(built.price_range.min, "010");
        assert_eq!(built.min_rating, 4);
        assert!(built.availability.in_stock);
        assert_eq!(built.active_count(), 4);
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let result = Cli::try_parse_from(["storefront", "chips", "-r", "6"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_avatar_command() {
        let cli = Cli::try_parse_from(["storefront", "avatar", "me.png"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Avatar { ref file } if file == &PathBuf::from("me.png")
        ));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "storefront",
            "search",
            "--catalog",
            "products.toml",
            "-q",
            "-vv",
        ])
        .unwrap();

        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Commands::Search { catalog: Some(ref path), .. } if path == &PathBuf::from("products.toml")
        ));
    }
}
