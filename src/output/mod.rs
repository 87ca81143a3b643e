//! Output formatting for CLI display
//!
//! This module provides utilities for formatting filter chips, products and
//! facet counts in the CLI.

use crate::catalog::{FacetCounts, Product};
use crate::filters::{FilterChip, LabelLookup};
use colored::Colorize;

/// Print an error message to stderr
pub fn error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}

/// Format one chip as `[label ×]`
#[must_use]
pub fn chip(chip: &FilterChip, quiet: bool) -> String {
    if quiet {
        chip.id.clone()
    } else {
        format!("[{} {}]", chip.label.cyan(), "×".dimmed())
    }
}

/// Format the chip bar with its active-filter count
#[must_use]
pub fn chip_bar(chips: &[FilterChip], active: usize, quiet: bool) -> String {
    if quiet {
        return chips
            .iter()
            .map(|c| chip(c, true))
            .collect::<Vec<_>>()
            .join("\n");
    }

    if chips.is_empty() {
        return "No active filters".dimmed().to_string();
    }

    let rendered: Vec<String> = chips.iter().map(|c| chip(c, false)).collect();
    format!(
        "Active filters ({}): {}",
        active.to_string().bold(),
        rendered.join(" ")
    )
}

/// Format a product line
#[must_use]
pub fn product(product: &Product, labels: &LabelLookup, quiet: bool) -> String {
    if quiet {
        return product.id.clone();
    }

    let mut badges = Vec::new();
    if product.on_sale {
        badges.push("sale".yellow().to_string());
    }
    if product.free_shipping {
        badges.push("free shipping".green().to_string());
    }
    if !product.in_stock {
        badges.push("out of stock".red().to_string());
    }

    let badges = if badges.is_empty() {
        String::new()
    } else {
        format!(" [{}]", badges.join(", "))
    };

    format!(
        "  {} ${:.2} ★{:.1} ({} / {}){}",
        product.name.bold(),
        product.price,
        product.rating,
        labels.category(&product.category),
        labels.vendor(&product.vendor),
        badges
    )
}

/// Format facet counts as two labelled sections
#[must_use]
pub fn facets(counts: &FacetCounts, labels: &LabelLookup) -> String {
    let mut lines = vec!["Categories".bold().to_string()];
    for (id, count) in &counts.categories {
        lines.push(format!("  {} ({count})", labels.category(id)));
    }

    lines.push("Vendors".bold().to_string());
    for (id, count) in &counts.vendors {
        lines.push(format!("  {} ({count})", labels.vendor(id)));
    }

    lines.join("\n")
}
