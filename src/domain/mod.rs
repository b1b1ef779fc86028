// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`photo`]: Photo types ([`PhotoRecord`](photo::PhotoRecord),
//!   [`PhotoId`](photo::PhotoId), [`Category`](photo::Category),
//!   [`CategoryFilter`](photo::CategoryFilter))

pub mod photo;
