// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette::BLACK, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for overlay buttons (control bar, drawer handle, thumbnails).
pub fn overlay(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_HOVER,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => opacity::OVERLAY_STRONG,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Style for the transparent thumbnail buttons inside the drawer.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_SUBTLE,
        _ => 0.0,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
