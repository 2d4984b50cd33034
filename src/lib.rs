// SPDX-License-Identifier: MPL-2.0
//! `pinch_gallery` is a single-screen photo viewer built with the Iced GUI
//! framework.
//!
//! It shows one page of a fixed catalog at a time, with pinch-to-zoom,
//! drag-to-pan, a bottom zoom control bar, and a slide-out thumbnail drawer
//! for switching pages. All interaction funnels into one view-state
//! controller; rendering is a pure function of its settled values.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
