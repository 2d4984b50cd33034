// SPDX-License-Identifier: MPL-2.0
//! Slide-out thumbnail drawer view.
//!
//! The drawer sits at the trailing edge and has exactly two positions: when
//! closed only the handle chevron is shown, when open the thumbnails slide
//! out next to it. Thumbnails follow catalog order so selection maps
//! deterministically onto a page.

use crate::i18n::fluent::I18n;
use crate::media::{Catalog, PageImages};
use crate::ui::design_tokens::{palette::WHITE, radius, sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::viewer::subcomponents::drawer::Message;
use iced::widget::{button, tooltip, Container, Image, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub struct ViewModel<'a> {
    pub catalog: &'a Catalog,
    pub images: &'a PageImages,
    pub is_open: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>, model: ViewModel<'a>) -> Element<'a, Message> {
    let chevron = if model.is_open {
        icons::chevron_right()
    } else {
        icons::chevron_left()
    };

    let handle_label = if model.is_open {
        ctx.i18n.tr("drawer-handle-close")
    } else {
        ctx.i18n.tr("drawer-handle-open")
    };

    let handle = button(
        chevron
            .style(styles::overlay::icon(WHITE))
            .height(Length::Fixed(sizing::DRAWER_HANDLE)),
    )
    .on_press(Message::ToggleDrawer)
    .padding(spacing::XS)
    .style(styles::button::overlay(WHITE));

    let handle = tooltip(
        handle,
        Text::new(handle_label),
        tooltip::Position::Left,
    );

    let mut row = Row::new()
        .spacing(spacing::SM)
        .push(handle);

    // Thumbnail opacity is a binary function of the open flag: a closed
    // drawer renders no thumbnails at all.
    if model.is_open {
        for page in model.catalog.iter() {
            if let Some(handles) = model.images.get(page.id) {
                let thumbnail = Image::new(handles.thumb.clone())
                    .width(Length::Fixed(sizing::THUMBNAIL_WIDTH));

                let select = button(thumbnail)
                    .on_press(Message::SelectPage(page.id))
                    .padding(0)
                    .style(styles::button::thumbnail);

                row = row.push(tooltip(
                    select,
                    Text::new(ctx.i18n.tr("drawer-thumbnail")),
                    tooltip::Position::Bottom,
                ));
            }
        }
    }

    Container::new(row)
        .padding(spacing::XS)
        .style(styles::overlay::indicator(radius::MD))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Catalog;

    #[test]
    fn drawer_view_renders_open_and_closed() {
        let i18n = I18n::default();
        let catalog = Catalog::builtin();
        let images = PageImages::load(&catalog).expect("builtin assets load");

        for is_open in [false, true] {
            let _element = view(
                ViewContext { i18n: &i18n },
                ViewModel {
                    catalog: &catalog,
                    images: &images,
                    is_open,
                },
            );
        }
    }
}
