// SPDX-License-Identifier: MPL-2.0
//! Photo viewer screen: page image rendering and the related overlay UI.

pub mod component;
pub mod controls;
pub mod drawer;
pub mod info_panel;
pub mod pane;
pub mod subcomponents;
