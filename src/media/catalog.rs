// SPDX-License-Identifier: MPL-2.0
//! The static, ordered catalog of viewable pages.
//!
//! Pages are created once at startup and never mutated. Every lookup is
//! bounds checked: an id that is not in the catalog simply resolves to
//! nothing instead of faulting, so callers can fail safe by keeping their
//! previous page.

use std::fmt;

/// Prefix used to derive a thumbnail asset name from the full image name.
pub const THUMB_PREFIX: &str = "thumb-";

/// Identifier of a page in the catalog. Ids are unique, stable, and assigned
/// in catalog order starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(u32);

impl PageId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One viewable page: a stable id plus the name of its full-size image.
///
/// The intrinsic dimensions are declared here so the view can compute the
/// fit-to-frame base size without decoding the asset first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub id: PageId,
    pub image_name: &'static str,
    pub width: u32,
    pub height: u32,
}

impl Page {
    /// Derives the thumbnail asset name from the full image name.
    #[must_use]
    pub fn thumbnail_name(&self) -> String {
        format!("{THUMB_PREFIX}{}", self.image_name)
    }
}

/// Ordered, immutable collection of pages.
#[derive(Debug, Clone)]
pub struct Catalog {
    pages: Vec<Page>,
}

impl Catalog {
    /// The built-in page set shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            pages: vec![
                Page {
                    id: PageId::new(1),
                    image_name: "squirrel",
                    width: 320,
                    height: 213,
                },
                Page {
                    id: PageId::new(2),
                    image_name: "fox",
                    width: 320,
                    height: 213,
                },
                Page {
                    id: PageId::new(3),
                    image_name: "owl",
                    width: 320,
                    height: 213,
                },
            ],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    /// First page in catalog order. The built-in catalog is never empty.
    #[must_use]
    pub fn first(&self) -> Option<&Page> {
        self.pages.first()
    }

    /// Looks up a page by id. Returns `None` for ids outside the catalog.
    #[must_use]
    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: PageId) -> bool {
        self.get(id).is_some()
    }

    /// Page preceding `id` in catalog order, if any.
    #[must_use]
    pub fn previous(&self, id: PageId) -> Option<&Page> {
        let position = self.pages.iter().position(|page| page.id == id)?;
        position.checked_sub(1).and_then(|p| self.pages.get(p))
    }

    /// Page following `id` in catalog order, if any.
    #[must_use]
    pub fn next(&self, id: PageId) -> Option<&Page> {
        let position = self.pages.iter().position(|page| page.id == id)?;
        self.pages.get(position + 1)
    }
}
