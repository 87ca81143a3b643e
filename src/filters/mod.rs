//! Filter state module
//!
//! This module owns the shopper's filter selection for a browse session and
//! everything derived from it. It is UI-agnostic: panels bind their inputs to
//! the engine's edit operations and render chips from `derive_chips`.
//!
//! # Features
//!
//! - **Draft vs committed**: panel edits accumulate in a draft and are applied atomically
//! - **Chips**: one removable token per active criterion, with human-readable labels
//! - **Counting**: active-filter count for badges and for gating "Clear All"
//! - **Commit signal**: every commit carries a generation so hosts can supersede stale queries
//!
//! # Examples
//!
//! ```
//! use storefront::filters::{ApplyMode, FilterEngine, LabelLookup, PriceBound};
//!
//! let mut engine = FilterEngine::new(ApplyMode::Deferred);
//! engine.toggle_category("electronics", true);
//! engine.set_price_bound(PriceBound::Min, "10");
//! engine.set_price_bound(PriceBound::Max, "50");
//! engine.apply();
//!
//! let chips = engine.chips(&LabelLookup::default());
//! assert_eq!(chips[0].label, "Electronics");
//! assert_eq!(chips[1].label, "$10 - $50");
//! assert_eq!(engine.committed_count(), 2);
//! ```

pub mod chips;
pub mod engine;
pub mod labels;
pub mod types;

pub use chips::{ChipKind, FilterChip, derive_chips, price_label, rating_label};
pub use engine::{ApplyMode, Commit, CommitListener, FilterEngine};
pub use labels::LabelLookup;
pub use types::{
    Availability, AvailabilityFlag, FilterSelection, FilterSelectionBuilder, MAX_RATING,
    PriceBound, PriceRange,
};
