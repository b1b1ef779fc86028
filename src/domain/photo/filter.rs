// SPDX-License-Identifier: MPL-2.0
//! Category filtering for the gallery.
//!
//! [`CategoryFilter`] is a pure predicate over [`PhotoRecord`]s. The `"all"`
//! sentinel is the identity filter; any other string selects records whose
//! category tag is exactly equal to it.

use super::PhotoRecord;
use std::fmt;

/// Sentinel category name that matches every record.
pub const ALL_CATEGORIES: &str = "all";

/// Filter applied to the full record set to obtain the visible subset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every record.
    #[default]
    All,
    /// Show only records whose category equals this tag.
    ///
    /// Unknown tags are accepted and simply match nothing.
    Only(String),
}

impl CategoryFilter {
    /// Parses a category name, mapping the `"all"` sentinel to [`CategoryFilter::All`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(name.to_string())
        }
    }

    /// Returns the category name this filter was built from.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(tag) => tag,
        }
    }

    /// Returns `true` if the record passes this filter.
    #[must_use]
    pub fn matches(&self, record: &PhotoRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(tag) => record.category().as_str() == tag,
        }
    }

    /// Returns `true` if this filter narrows the record set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for CategoryFilter {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::photo::{Category, PhotoId};

    fn record(category: &str) -> PhotoRecord {
        PhotoRecord::new(
            PhotoId::new("p"),
            Category::new(category).expect("valid category"),
            "p.jpg",
            "P",
            "",
        )
    }

    #[test]
    fn all_sentinel_parses_to_identity_filter() {
        let filter = CategoryFilter::from_name("all");
        assert_eq!(filter, CategoryFilter::All);
        assert!(!filter.is_active());
        assert!(filter.matches(&record("nature")));
        assert!(filter.matches(&record("travel")));
    }

    #[test]
    fn sentinel_is_case_sensitive() {
        let filter = CategoryFilter::from_name("All");
        assert_eq!(filter, CategoryFilter::Only("All".into()));
        assert!(!filter.matches(&record("nature")));
    }

    #[test]
    fn only_filter_matches_exact_tag() {
        let filter = CategoryFilter::from_name("nature");
        assert!(filter.is_active());
        assert!(filter.matches(&record("nature")));
        assert!(!filter.matches(&record("Nature")));
        assert!(!filter.matches(&record("travel")));
    }

    #[test]
    fn name_round_trips_through_display() {
        assert_eq!(CategoryFilter::All.to_string(), "all");
        assert_eq!(CategoryFilter::from("events").name(), "events");
    }
}
