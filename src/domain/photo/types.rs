// SPDX-License-Identifier: MPL-2.0
//! Core photo types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.
//! Image references are opaque: the presentation layer decides how to turn
//! them into framework-specific handles.

use std::fmt;
use std::path::{Path, PathBuf};

/// Stable identity of a photo within a gallery.
///
/// Identity is what the gallery uses to locate a record in the visible
/// subset, so two records with the same id are considered the same photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(String);

impl PhotoId {
    /// Creates a new photo id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhotoId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Category tag attached to a photo.
///
/// Guaranteed non-empty after trimming; construction fails otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String);

impl Category {
    /// Creates a category, returning `None` for empty or whitespace-only tags.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Option<Self> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            None
        } else {
            Some(Self(tag))
        }
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One photo of the gallery.
///
/// Records are supplied once when the gallery is built and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    id: PhotoId,
    category: Category,
    image: PathBuf,
    title: String,
    description: String,
}

impl PhotoRecord {
    /// Creates a new photo record.
    #[must_use]
    pub fn new(
        id: PhotoId,
        category: Category,
        image: impl Into<PathBuf>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category,
            image: image.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Returns the stable identity of this photo.
    #[must_use]
    pub fn id(&self) -> &PhotoId {
        &self.id
    }

    /// Returns the category tag.
    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Returns the reference to the image asset.
    #[must_use]
    pub fn image(&self) -> &Path {
        &self.image
    }

    /// Returns the title shown in captions and in the lightbox.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the longer description shown in the lightbox.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
