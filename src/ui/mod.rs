// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screen
//!
//! - [`viewer`] - The single photo viewer screen with zoom, pan, control
//!   bar, info panel, and thumbnail drawer
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (the zoom/pan transform)
//! - [`styles`] - Centralized styling (buttons, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod design_tokens;
pub mod icons;
pub mod state;
pub mod styles;
pub mod theming;
pub mod viewer;
