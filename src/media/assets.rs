// SPDX-License-Identifier: MPL-2.0
//! Embedded page images resolved to Iced image handles.
//!
//! Images are embedded at compile time so packaging never needs to locate
//! assets on disk. Handles are loaded eagerly at startup; a missing asset is
//! reported as an [`Error::Asset`](crate::error::Error) and rendered through
//! the viewer's error view.

use crate::error::{Error, Result};
use crate::media::catalog::{Catalog, Page, PageId};
use iced::widget::image::Handle;
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/images/"]
struct ImageAsset;

/// Full-size and thumbnail handles for one page.
#[derive(Debug, Clone)]
pub struct PageHandles {
    pub full: Handle,
    pub thumb: Handle,
}

/// All page images, keyed by page id.
#[derive(Debug, Clone, Default)]
pub struct PageImages {
    handles: HashMap<PageId, PageHandles>,
}

impl PageImages {
    /// Loads every page of the catalog from the embedded assets.
    pub fn load(catalog: &Catalog) -> Result<Self> {
        let mut handles = HashMap::new();

        for page in catalog.iter() {
            handles.insert(page.id, load_page(page)?);
        }

        Ok(Self { handles })
    }

    #[must_use]
    pub fn get(&self, id: PageId) -> Option<&PageHandles> {
        self.handles.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

fn load_page(page: &Page) -> Result<PageHandles> {
    Ok(PageHandles {
        full: handle_for(page.image_name)?,
        thumb: handle_for(&page.thumbnail_name())?,
    })
}

/// Resolves an image name (without extension) to a decoded handle.
fn handle_for(name: &str) -> Result<Handle> {
    let file_name = format!("{name}.png");
    let file = ImageAsset::get(&file_name)
        .ok_or_else(|| Error::Asset(format!("embedded image not found: {file_name}")))?;
    Ok(Handle::from_bytes(file.data.into_owned()))
}
