// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: colors, opacity, spacing, sizing, radii.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Background of overlay surfaces (control bar, drawer, info panel).
    pub const OVERLAY_STRONG: f32 = 0.75;

    /// Hovered overlay buttons.
    pub const OVERLAY_HOVER: f32 = 0.85;

    /// Pressed overlay buttons.
    pub const OVERLAY_PRESSED: f32 = 0.95;

    /// Subtle borders on overlay surfaces.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Side length of the square control-bar icons.
    pub const CONTROL_ICON: f32 = 28.0;

    /// Height of the drawer handle chevron.
    pub const DRAWER_HANDLE: f32 = 40.0;

    /// Width of a drawer thumbnail.
    pub const THUMBNAIL_WIDTH: f32 = 80.0;
}

// ============================================================================
// Radii
// ============================================================================

pub mod radius {
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
}
