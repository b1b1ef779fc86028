// SPDX-License-Identifier: MPL-2.0
//! Photo domain module.
//!
//! Pure photo types and the category filter, with no I/O.

pub mod filter;
mod types;

pub use filter::{CategoryFilter, ALL_CATEGORIES};
pub use types::{Category, PhotoId, PhotoRecord};
