// SPDX-License-Identifier: MPL-2.0
//! Shared presentation infrastructure.
//!
//! The gallery screens themselves live in `app::view`; this module holds
//! what they are styled with.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized button and container styles
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod styles;
pub mod theming;
