// SPDX-License-Identifier: MPL-2.0
//! Bottom control bar: zoom out, reset, and zoom in buttons.
//!
//! The buttons are stateless; each press maps onto the same transitions the
//! gestures use, so a button can never leave a live, unclamped value behind.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette::WHITE, radius, sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, tooltip, Container, Row, Text};
use iced::{Element, Length};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    ZoomOut,
    ResetZoom,
    ZoomIn,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let bar = Row::new()
        .spacing(spacing::SM)
        .push(control_button(
            icons::zoom_out(),
            ctx.i18n.tr("viewer-zoom-out"),
            Message::ZoomOut,
        ))
        .push(control_button(
            icons::zoom_reset(),
            ctx.i18n.tr("viewer-zoom-reset"),
            Message::ResetZoom,
        ))
        .push(control_button(
            icons::zoom_in(),
            ctx.i18n.tr("viewer-zoom-in"),
            Message::ZoomIn,
        ));

    Container::new(bar)
        .padding([spacing::SM, spacing::MD])
        .style(styles::overlay::indicator(radius::MD))
        .into()
}

fn control_button<'a>(
    icon: Svg<'a>,
    label: String,
    message: Message,
) -> Element<'a, Message> {
    let icon = icon
        .style(styles::overlay::icon(WHITE))
        .width(Length::Fixed(sizing::CONTROL_ICON))
        .height(Length::Fixed(sizing::CONTROL_ICON));

    let control = button(icon)
        .on_press(message)
        .padding(spacing::XS)
        .style(styles::button::overlay(WHITE));

    tooltip(control, Text::new(label), tooltip::Position::Top).into()
}
