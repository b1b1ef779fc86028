// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Grid**: Number of thumbnail columns
//! - **Thumbnail**: Thumbnail height in the grid
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default number of columns in the photo grid.
pub const DEFAULT_GRID_COLUMNS: u16 = 3;

/// Minimum number of columns in the photo grid.
pub const MIN_GRID_COLUMNS: u16 = 1;

/// Maximum number of columns in the photo grid.
pub const MAX_GRID_COLUMNS: u16 = 8;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default thumbnail height in logical pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: u16 = 180;

/// Minimum thumbnail height in logical pixels.
pub const MIN_THUMBNAIL_HEIGHT: u16 = 60;

/// Maximum thumbnail height in logical pixels.
pub const MAX_THUMBNAIL_HEIGHT: u16 = 480;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;

/// Default window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;

/// Minimum window width in logical pixels.
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Minimum window height in logical pixels.
pub const MIN_WINDOW_HEIGHT: u32 = 400;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_GRID_COLUMNS > 0);
    assert!(MAX_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);

    assert!(MIN_THUMBNAIL_HEIGHT > 0);
    assert!(MAX_THUMBNAIL_HEIGHT >= MIN_THUMBNAIL_HEIGHT);
    assert!(DEFAULT_THUMBNAIL_HEIGHT >= MIN_THUMBNAIL_HEIGHT);
    assert!(DEFAULT_THUMBNAIL_HEIGHT <= MAX_THUMBNAIL_HEIGHT);

    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_defaults_are_valid() {
        assert_eq!(DEFAULT_GRID_COLUMNS, 3);
        assert!(DEFAULT_GRID_COLUMNS >= MIN_GRID_COLUMNS);
        assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);
    }

    #[test]
    fn thumbnail_defaults_are_valid() {
        assert_eq!(DEFAULT_THUMBNAIL_HEIGHT, 180);
        assert!(DEFAULT_THUMBNAIL_HEIGHT >= MIN_THUMBNAIL_HEIGHT);
        assert!(DEFAULT_THUMBNAIL_HEIGHT <= MAX_THUMBNAIL_HEIGHT);
    }
}
