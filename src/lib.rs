// SPDX-License-Identifier: MPL-2.0
//! `folio_gallery` is a category-filtered photo gallery built with the Iced GUI framework.
//!
//! The core is [`gallery::GalleryController`], a small state machine owning
//! the active category, the visible subset of photos and the lightbox
//! selection. Everything else feeds it: [`manifest`] loads the photo list,
//! [`app`] turns clicks and key presses into gallery events and renders the
//! result, [`i18n`] localizes the UI with Fluent.

pub mod app;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod manifest;
pub mod ui;
