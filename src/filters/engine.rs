//! Filter state engine for browse sessions
//!
//! This module provides `FilterEngine`, which owns the two copies of the
//! shopper's filter selection:
//!
//! - **draft**: edits made in the filter panel that have not been applied yet
//! - **committed**: the selection currently driving catalog results
//!
//! # Workflow
//!
//! ```text
//! Panel edit (toggle / price / rating / availability)
//!     ↓
//! Draft updated
//!     ├─ ApplyMode::Immediate → apply()
//!     └─ ApplyMode::Deferred  → wait for apply()
//!         ↓
//! Committed replaced, generation bumped
//!     ↓
//! CommitListener notified → host re-queries the catalog
//! ```
//!
//! Chip removal and "clear all" act on the committed copy directly and also
//! notify the listener.

use super::chips::{self, ChipKind, FilterChip};
use super::labels::LabelLookup;
use super::types::{AvailabilityFlag, FilterSelection, PriceBound};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// When draft edits reach the committed selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplyMode {
    /// Edits accumulate until `apply` (mobile panel with an Apply button)
    #[default]
    Deferred,
    /// Every edit is applied right away (inline desktop panel)
    Immediate,
}

/// A newly committed selection, tagged with its sequence number
///
/// Hosts issue one catalog query per commit. A response for an older
/// generation than the latest seen commit is stale and can be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Monotonically increasing commit number
    pub generation: u64,
    /// The committed selection at this generation
    pub selection: FilterSelection,
}

/// Receiver for committed selections
pub trait CommitListener {
    /// Called after every apply, chip removal or clear
    fn on_commit(&mut self, commit: &Commit);
}

impl<F> CommitListener for F
where
    F: FnMut(&Commit),
{
    fn on_commit(&mut self, commit: &Commit) {
        self(commit);
    }
}

/// Draft and committed filter state for one browse session
#[derive(Default)]
pub struct FilterEngine {
    draft: FilterSelection,
    committed: FilterSelection,
    mode: ApplyMode,
    generation: u64,
    listener: Option<Box<dyn CommitListener>>,
}

impl FilterEngine {
    /// Create an engine with empty selections
    #[must_use]
    pub fn new(mode: ApplyMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Create an engine starting from a caller-supplied selection
    ///
    /// Draft and committed both start as `initial`, normalized (see
    /// [`FilterSelection::normalized`]).
    #[must_use]
    pub fn with_initial(initial: FilterSelection, mode: ApplyMode) -> Self {
        let initial = initial.normalized();
        Self {
            draft: initial.clone(),
            committed: initial,
            mode,
            generation: 0,
            listener: None,
        }
    }

    /// Install the callback that re-queries the catalog
    pub fn set_listener(&mut self, listener: impl CommitListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Builder-style variant of [`Self::set_listener`]
    #[must_use]
    pub fn with_listener(mut self, listener: impl CommitListener + 'static) -> Self {
        self.set_listener(listener);
        self
    }

    /// Current apply mode
    #[must_use]
    pub const fn mode(&self) -> ApplyMode {
        self.mode
    }

    /// Selection being edited
    #[must_use]
    pub const fn draft(&self) -> &FilterSelection {
        &self.draft
    }

    /// Selection driving catalog results
    #[must_use]
    pub const fn committed(&self) -> &FilterSelection {
        &self.committed
    }

    /// Sequence number of the latest commit (0 before the first)
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Check if the draft differs from the committed selection
    #[must_use]
    pub fn has_pending_changes(&self) -> bool {
        self.draft != self.committed
    }

    /// Include or exclude a category in the draft
    ///
    /// Unknown ids are accepted; the catalog decides what they match.
    pub fn toggle_category(&mut self, id: &str, included: bool) {
        if self.draft.set_category(id, included) {
            self.after_edit();
        }
    }

    /// Include or exclude a vendor in the draft
    pub fn toggle_vendor(&mut self, id: &str, included: bool) {
        if self.draft.set_vendor(id, included) {
            self.after_edit();
        }
    }

    /// Store a raw price bound in the draft without validating it
    pub fn set_price_bound(&mut self, bound: PriceBound, raw: impl Into<String>) {
        self.draft.set_price_bound(bound, raw.into());
        self.after_edit();
    }

    /// Select a minimum rating; selecting the active rating clears it
    pub fn set_min_rating(&mut self, rating: u8) {
        self.draft.toggle_min_rating(rating);
        self.after_edit();
    }

    /// Set one availability flag in the draft
    pub fn set_availability(&mut self, flag: AvailabilityFlag, value: bool) {
        self.draft.availability.set(flag, value);
        self.after_edit();
    }

    /// Copy the draft into the committed selection
    ///
    /// Always notifies the listener, even if nothing changed; use
    /// [`Self::has_pending_changes`] to skip redundant queries.
    pub fn apply(&mut self) -> &FilterSelection {
        self.committed = self.draft.clone();
        self.commit();
        &self.committed
    }

    /// Reset both draft and committed to the empty selection
    pub fn clear_all(&mut self) -> &FilterSelection {
        self.draft = FilterSelection::new();
        self.committed = FilterSelection::new();
        debug!("clearing all filters");
        self.commit();
        &self.committed
    }

    /// Reset the draft to the committed selection (panel opened)
    pub fn begin_edit(&mut self) {
        self.draft = self.committed.clone();
    }

    /// Throw away unapplied edits (panel closed without applying)
    pub fn discard_draft(&mut self) {
        self.begin_edit();
    }

    /// Active criteria in the draft (panel badge)
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.draft.active_count()
    }

    /// Active criteria in the committed selection
    #[must_use]
    pub fn committed_count(&self) -> usize {
        self.committed.active_count()
    }

    /// Whether "Clear All" should be enabled
    #[must_use]
    pub fn can_clear(&self) -> bool {
        self.active_count() > 0
    }

    /// Chips for the committed selection
    #[must_use]
    pub fn chips(&self, labels: &LabelLookup) -> Vec<FilterChip> {
        chips::derive_chips(&self.committed, labels)
    }

    /// Remove the criterion a chip stands for from the committed selection
    ///
    /// Chip removal is immediate. A deferred draft keeps its own edits; in
    /// immediate mode the draft follows the committed selection.
    pub fn remove_chip(&mut self, chip: &FilterChip) -> &FilterSelection {
        remove_criterion(&mut self.committed, chip.kind, &chip.ref_value);
        if self.mode == ApplyMode::Immediate {
            self.draft = self.committed.clone();
        }
        self.commit();
        &self.committed
    }

    fn after_edit(&mut self) {
        if self.mode == ApplyMode::Immediate {
            self.apply();
        }
    }

    fn commit(&mut self) {
        self.generation += 1;
        debug!(
            generation = self.generation,
            active = self.committed.active_count(),
            "committed filter selection"
        );

        if let Some(listener) = self.listener.as_mut() {
            let commit = Commit {
                generation: self.generation,
                selection: self.committed.clone(),
            };
            listener.on_commit(&commit);
        }
    }
}

/// Drop exactly one criterion from `selection`
fn remove_criterion(selection: &mut FilterSelection, kind: ChipKind, ref_value: &str) {
    match kind {
        ChipKind::Category => {
            selection.set_category(ref_value, false);
        }
        ChipKind::Vendor => {
            selection.set_vendor(ref_value, false);
        }
        ChipKind::PriceRange => selection.price_range.clear(),
        ChipKind::Rating => selection.min_rating = 0,
        ChipKind::Availability => match ref_value.parse::<AvailabilityFlag>() {
            Ok(flag) => selection.availability.set(flag, false),
            Err(e) => warn!("ignoring chip removal: {e}"),
        },
    }
}

impl fmt::Debug for FilterEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterEngine")
            .field("draft", &self.draft)
            .field("committed", &self.committed)
            .field("mode", &self.mode)
            .field("generation", &self.generation)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
