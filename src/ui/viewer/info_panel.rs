// SPDX-License-Identifier: MPL-2.0
//! Info panel overlay showing the live zoom scale and pan offset.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing};
use crate::ui::viewer::component::Message;
use iced::widget::{Container, Row, Text};
use iced::{Element, Vector};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view(ctx: ViewContext<'_>, scale: f32, offset: Vector) -> Element<'_, Message> {
    let readout = Row::new()
        .spacing(spacing::MD)
        .push(Text::new(format!(
            "{}: {}",
            ctx.i18n.tr("viewer-info-scale"),
            format_scale(scale)
        )))
        .push(Text::new(format!(
            "{}: {}",
            ctx.i18n.tr("viewer-info-offset"),
            format_offset(offset)
        )));

    Container::new(readout)
        .padding([spacing::XS, spacing::MD])
        .style(crate::ui::styles::overlay::indicator(radius::SM))
        .into()
}

/// Formats a scale as a multiplier with one decimal, e.g. `2.5x`.
fn format_scale(scale: f32) -> String {
    format!("{scale:.1}x")
}

/// Formats an offset as rounded whole pixels, e.g. `(12, -40)`.
fn format_offset(offset: Vector) -> String {
    format!("({:.0}, {:.0})", offset.x, offset.y)
}
