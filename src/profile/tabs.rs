//! Profile page tabs and the view each one shows

use super::types::ProfileStats;
use std::fmt;
use std::str::FromStr;

/// Tabs on the profile page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProfileTab {
    #[default]
    Listings,
    History,
    Saved,
    Settings,
}

/// Content panels a tab can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabView {
    MyListings,
    PurchaseHistory,
    SavedItems,
    Settings,
}

impl ProfileTab {
    /// All tabs in display order
    pub const ALL: [Self; 4] = [Self::Listings, Self::History, Self::Saved, Self::Settings];

    /// Stable id used in routes
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Listings => "listings",
            Self::History => "history",
            Self::Saved => "saved",
            Self::Settings => "settings",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Listings => "My Listings",
            Self::History => "Purchase History",
            Self::Saved => "Saved Items",
            Self::Settings => "Settings",
        }
    }

    /// View rendered for this tab
    #[must_use]
    pub const fn view(self) -> TabView {
        match self {
            Self::Listings => TabView::MyListings,
            Self::History => TabView::PurchaseHistory,
            Self::Saved => TabView::SavedItems,
            Self::Settings => TabView::Settings,
        }
    }

    /// View the legacy profile page rendered for this tab
    ///
    /// The legacy page fell through to purchase history for the listings tab,
    /// so "My Listings" never showed the listings panel. New code should use
    /// [`Self::view`].
    #[must_use]
    pub const fn legacy_view(self) -> TabView {
        match self {
            Self::Listings | Self::History => TabView::PurchaseHistory,
            Self::Saved => TabView::SavedItems,
            Self::Settings => TabView::Settings,
        }
    }

    /// Badge count for this tab (settings has none)
    #[must_use]
    pub const fn count(self, stats: &ProfileStats) -> Option<u32> {
        match self {
            Self::Listings => Some(stats.items_listed),
            Self::History => Some(stats.purchases_made),
            Self::Saved => Some(stats.saved_items),
            Self::Settings => None,
        }
    }
}

impl fmt::Display for ProfileTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProfileTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| format!("Unknown profile tab: {s}"))
    }
}

/// One rendered tab header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    pub tab: ProfileTab,
    pub label: &'static str,
    pub count: Option<u32>,
}

/// Tab headers with their badge counts
#[must_use]
pub fn tabs(stats: &ProfileStats) -> Vec<TabEntry> {
    ProfileTab::ALL
        .into_iter()
        .map(|tab| TabEntry {
            tab,
            label: tab.label(),
            count: tab.count(stats),
        })
        .collect()
}
