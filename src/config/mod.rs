// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. The viewer keeps no settings file: per the
//! product scope there is no persisted state across sessions, so every
//! tunable lives here as a compile-time constant.

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom scale at rest (1.0 = the page fits its frame).
pub const MIN_ZOOM_SCALE: f32 = 1.0;

/// Maximum zoom scale reachable by any gesture or button.
pub const MAX_ZOOM_SCALE: f32 = 5.0;

/// Scale increment applied by the zoom in/out buttons.
pub const ZOOM_STEP: f32 = 1.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;

/// Default window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;

/// Minimum window width in logical pixels.
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Minimum window height in logical pixels.
pub const MIN_WINDOW_HEIGHT: u32 = 420;
