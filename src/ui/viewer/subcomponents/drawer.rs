// SPDX-License-Identifier: MPL-2.0
//! Drawer sub-component: open/closed flag and thumbnail selection.
//!
//! Selection is only reported as an effect; the orchestrator owns the
//! current page and applies the catalog bounds check, so a stale or
//! malformed id can never take the viewer to a page that does not exist.

use crate::media::PageId;

/// Drawer sub-component state.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    /// Whether the drawer is slid out.
    pub is_open: bool,
}

/// Messages for the drawer sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Tap on the drawer handle.
    ToggleDrawer,
    /// Tap on a thumbnail.
    SelectPage(PageId),
}

/// Effects produced by drawer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// A thumbnail was tapped; the orchestrator should switch pages.
    PageSelected(PageId),
}

impl State {
    /// Handle a drawer message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ToggleDrawer => {
                self.is_open = !self.is_open;
                Effect::None
            }
            Message::SelectPage(id) => Effect::PageSelected(id),
        }
    }
}
