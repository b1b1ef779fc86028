// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: category filtering, selection and lightbox navigation.
//!
//! [`GalleryController`] owns the full ordered record set, the active
//! [`CategoryFilter`], the visible subset derived from it and the lightbox
//! state. It renders nothing; the presentation layer reads
//! [`GalleryController::visible_records`] for the grid and
//! [`GalleryController::current_display`] for the lightbox.
//!
//! # Lightbox state machine
//!
//! ```text
//! Closed --open_at(found)--> Open(i)
//! Open(i) --close()--------> Closed
//! Open(i) --show_previous--> Open(i - 1)   if i > 0
//! Open(i) --show_next------> Open(i + 1)   if i < last
//! Open(i) --set_category---> Closed
//! ```
//!
//! Edge navigation and lookups of records outside the visible subset are
//! silent no-ops. Changing the category always closes the lightbox, since a
//! selection index is meaningless once the visible subset changes.

pub mod input;

pub use input::{GalleryEvent, GalleryKey};

use crate::domain::photo::{Category, CategoryFilter, PhotoId, PhotoRecord, ALL_CATEGORIES};
use crate::error::Result;
use crate::manifest;

/// Visibility state of the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    /// No photo selected, lightbox hidden.
    #[default]
    Closed,
    /// Lightbox showing the visible record at `index`.
    Open {
        /// Position within the visible subset.
        index: usize,
    },
}

/// Snapshot of what the lightbox should currently display.
///
/// This struct contains everything needed to render the lightbox and its
/// navigation controls without access to the controller itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState<'a> {
    /// The selected record.
    pub record: &'a PhotoRecord,
    /// Position of the record within the visible subset (0-indexed).
    pub index: usize,
    /// Number of visible records.
    pub total: usize,
    /// Whether the "previous" control should be enabled.
    pub prev_enabled: bool,
    /// Whether the "next" control should be enabled.
    pub next_enabled: bool,
}

/// Single owner of the gallery session state.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryController {
    /// Full ordered record set, immutable after construction.
    records: Vec<PhotoRecord>,
    /// Distinct categories in order of first appearance.
    categories: Vec<Category>,
    /// Active category filter.
    filter: CategoryFilter,
    /// Positions into `records` of the visible subset, ascending.
    visible: Vec<usize>,
    /// Lightbox state; `Open` always indexes into `visible`.
    modal: ModalState,
}

impl GalleryController {
    /// Creates a controller showing every record with the lightbox closed.
    ///
    /// Record ids must be unique; lookups by id resolve to the first match.
    /// Use [`GalleryController::try_new`] for records that were not already
    /// checked by [`manifest::validate`].
    #[must_use]
    pub fn new(records: Vec<PhotoRecord>) -> Self {
        debug_assert!(
            manifest::validate(&records).is_ok(),
            "gallery records must have unique ids"
        );

        let mut categories: Vec<Category> = Vec::new();
        for record in &records {
            // A category spelled like the sentinel is reachable only through "all"
            if record.category().as_str() == ALL_CATEGORIES {
                continue;
            }
            if !categories.contains(record.category()) {
                categories.push(record.category().clone());
            }
        }

        let visible = (0..records.len()).collect();

        Self {
            records,
            categories,
            filter: CategoryFilter::All,
            visible,
            modal: ModalState::Closed,
        }
    }

    /// Creates a controller after checking that record ids are unique.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::DuplicateId`](crate::error::ManifestError::DuplicateId)
    /// naming the first repeated id.
    pub fn try_new(records: Vec<PhotoRecord>) -> Result<Self> {
        manifest::validate(&records)?;
        Ok(Self::new(records))
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Activates the category with the given name (`"all"` shows everything).
    ///
    /// Unknown categories are accepted and produce an empty visible subset.
    /// The lightbox is always closed afterwards.
    pub fn set_category(&mut self, category: &str) {
        self.set_filter(CategoryFilter::from_name(category));
    }

    /// Activates a category filter and recomputes the visible subset.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.visible = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| filter.matches(record))
            .map(|(position, _)| position)
            .collect();
        self.filter = filter;
        self.modal = ModalState::Closed;
    }

    /// Opens the lightbox on `record` if it is part of the visible subset.
    ///
    /// Returns `false` and leaves the state untouched when the record is not
    /// currently visible (e.g. a stale reference from before a filter change).
    pub fn open_at(&mut self, record: &PhotoRecord) -> bool {
        self.open_by_id(record.id())
    }

    /// Opens the lightbox on the visible record with the given id.
    pub fn open_by_id(&mut self, id: &PhotoId) -> bool {
        match self.visible_position(id) {
            Some(index) => {
                self.modal = ModalState::Open { index };
                true
            }
            None => false,
        }
    }

    /// Closes the lightbox. Calling it while already closed does nothing.
    pub fn close(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Moves the selection one step back. No wrap-around.
    ///
    /// Returns `true` if the selection changed.
    pub fn show_previous(&mut self) -> bool {
        match self.modal {
            ModalState::Open { index } if index > 0 => {
                self.modal = ModalState::Open { index: index - 1 };
                true
            }
            _ => false,
        }
    }

    /// Moves the selection one step forward. No wrap-around.
    ///
    /// Returns `true` if the selection changed.
    pub fn show_next(&mut self) -> bool {
        match self.modal {
            ModalState::Open { index } if index + 1 < self.visible.len() => {
                self.modal = ModalState::Open { index: index + 1 };
                true
            }
            _ => false,
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Returns what the lightbox should show, or `None` when nothing is selected.
    #[must_use]
    pub fn current_display(&self) -> Option<DisplayState<'_>> {
        let index = self.selected_index()?;
        let record = self.visible_record(index)?;
        let total = self.visible.len();

        Some(DisplayState {
            record,
            index,
            total,
            prev_enabled: index > 0,
            next_enabled: index + 1 < total,
        })
    }

    /// Returns the selected position within the visible subset.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        match self.modal {
            ModalState::Open { index } => Some(index),
            ModalState::Closed => None,
        }
    }

    /// Returns the lightbox state.
    #[must_use]
    pub fn modal(&self) -> ModalState {
        self.modal
    }

    /// Returns `true` while the lightbox is shown.
    #[must_use]
    pub fn modal_open(&self) -> bool {
        matches!(self.modal, ModalState::Open { .. })
    }

    /// Returns `true` while background scrolling must be suspended.
    ///
    /// Derived from the lightbox state so the two can never disagree.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.modal_open()
    }

    /// Returns the active category filter.
    #[must_use]
    pub fn active_filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Returns the full record set in its original order.
    #[must_use]
    pub fn all_records(&self) -> &[PhotoRecord] {
        &self.records
    }

    /// Returns the visible records in their original relative order.
    pub fn visible_records(&self) -> impl Iterator<Item = &PhotoRecord> + '_ {
        self.visible.iter().map(|&position| &self.records[position])
    }

    /// Returns the visible record at `index`, if any.
    #[must_use]
    pub fn visible_record(&self, index: usize) -> Option<&PhotoRecord> {
        self.visible
            .get(index)
            .and_then(|&position| self.records.get(position))
    }

    /// Returns the number of visible records.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Returns `true` if the record with this id passes the active filter.
    #[must_use]
    pub fn is_visible(&self, id: &PhotoId) -> bool {
        self.visible_position(id).is_some()
    }

    /// Returns the distinct categories in order of first appearance.
    ///
    /// A category named like the `"all"` sentinel is left out, since
    /// selecting it would show every record anyway.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn visible_position(&self, id: &PhotoId) -> Option<usize> {
        self.visible
            .iter()
            .position(|&position| self.records[position].id() == id)
    }
}

impl Default for GalleryController {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
