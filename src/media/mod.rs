// SPDX-License-Identifier: MPL-2.0
//! Page catalog and embedded image assets.

pub mod assets;
pub mod catalog;

pub use assets::{PageHandles, PageImages};
pub use catalog::{Catalog, Page, PageId, THUMB_PREFIX};
