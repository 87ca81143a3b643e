//! Storefront CLI application entry point
//!
//! This is the command-line host for the storefront library. It builds a
//! filter selection from flags, then prints the resulting chips, matching
//! catalog products or facet counts.
//!
//! # Usage
//!
//! ```bash
//! # Show chips for a selection
//! storefront chips -c electronics --min-price 10 --max-price 50 -r 4 --in-stock
//!
//! # Filter a catalog file
//! storefront search --catalog products.toml -c books --free-shipping
//!
//! # Per-facet counts
//! storefront facets --catalog products.toml --on-sale
//!
//! # Check a picture against the upload limit
//! storefront avatar me.png
//!
//! # Quiet mode (only output results)
//! storefront -q search --catalog products.toml -c toys
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/storefront/config.toml` on Linux) and created on first run.

use colored::Colorize;
use std::path::{Path, PathBuf};
use storefront::{
    StorefrontError,
    catalog::{Catalog, CatalogQuery, FacetCounts},
    cli::{Cli, Commands, ConfigCommands},
    config::StorefrontConfig,
    filters::derive_chips,
    logging::{LogConfig, init_logging},
    output,
    profile::AvatarFile,
};
use tracing::info;

type Result<T> = std::result::Result<T, StorefrontError>;

fn load_config(explicit: Option<&Path>) -> Result<StorefrontConfig> {
    match explicit {
        Some(path) => Ok(StorefrontConfig::load_from(path)?),
        None => Ok(StorefrontConfig::load()?),
    }
}

/// Pick the catalog file from the command line or configuration
fn resolve_catalog(arg: Option<PathBuf>, config: &StorefrontConfig) -> Result<Catalog> {
    let path = arg.or_else(|| config.catalog.clone()).ok_or_else(|| {
        StorefrontError::InvalidInput(
            "No catalog file given; pass --catalog or set `catalog` in the config".to_string(),
        )
    })?;

    info!(path = %path.display(), "loading catalog");
    Ok(Catalog::load(&path)?)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let quiet = cli.quiet || config.quiet;
    let labels = config.effective_labels();

    match cli.command {
        Commands::Chips { selection } => {
            let selection = selection.to_selection();
            let chips = derive_chips(&selection, &labels);
            println!("{}", output::chip_bar(&chips, selection.active_count(), quiet));
        }
        Commands::Search { catalog, selection } => {
            let catalog = resolve_catalog(catalog, &config)?;
            let selection = selection.to_selection();
            let query = CatalogQuery::from_selection(&selection)?;
            let results = query.run(&catalog);

            if !quiet {
                println!("Filters: {selection}");
                println!("Found {} of {} product(s):", results.len(), catalog.len());
            }
            for product in results {
                println!("{}", output::product(product, &labels, quiet));
            }
        }
        Commands::Facets { catalog, selection } => {
            let catalog = resolve_catalog(catalog, &config)?;
            let selection = selection.to_selection();
            let counts = FacetCounts::compute(&catalog, &selection)?;
            println!("{}", output::facets(&counts, &labels));
        }
        Commands::Avatar { file } => {
            let avatar = AvatarFile::read(&file)?;
            config.check_avatar(&avatar)?;
            if !quiet {
                println!(
                    "{} {} ({}) can be uploaded",
                    "✓".green(),
                    avatar.file_name,
                    avatar.content_type
                );
            }
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let effective = StorefrontConfig {
                    labels,
                    ..config
                };
                let toml_string = toml::to_string_pretty(&effective).map_err(|e| {
                    StorefrontError::InvalidInput(format!("Failed to serialize config: {e}"))
                })?;
                print!("{toml_string}");
            }
            ConfigCommands::Path => match cli.config {
                Some(path) => println!("{}", path.display()),
                None => println!("{}", StorefrontConfig::config_path()?.display()),
            },
        },
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = init_logging(&LogConfig::from_verbosity(cli.verbose)) {
        eprintln!("Warning: failed to initialise logging: {e}");
    }

    if let Err(e) = run(cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
