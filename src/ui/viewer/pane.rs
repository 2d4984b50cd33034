// SPDX-License-Identifier: MPL-2.0
//! Viewer pane that renders the page image scaled, panned, and centered
//! inside the available frame.
//!
//! Rendering is a pure function of the settled view state: opacity comes
//! from the visibility flag (0 or 1, no partial values), size from the zoom
//! scale, and position from the pan offset. Overflow is clipped by the
//! surrounding container.

use crate::media::Page;
use crate::ui::viewer::component::Message;
use iced::widget::image::Handle;
use iced::widget::{responsive, Container, Image, Space};
use iced::{Element, Length, Padding, Size, Vector};

pub struct ViewContext<'a> {
    pub page: &'a Page,
    pub handle: &'a Handle,
}

#[derive(Debug, Clone, Copy)]
pub struct ViewModel {
    pub scale: f32,
    pub offset: Vector,
    pub visible: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>, model: ViewModel) -> Element<'a, Message> {
    if !model.visible {
        // Binary opacity gate: before the mount transition fires the page
        // simply is not drawn.
        return Space::new().width(Length::Fill).height(Length::Fill).into();
    }

    responsive(move |available: Size| view_inner(&ctx, model, available)).into()
}

fn view_inner<'a>(
    ctx: &ViewContext<'a>,
    model: ViewModel,
    available: Size,
) -> Element<'a, Message> {
    let size = scaled_page_size(ctx.page.width, ctx.page.height, available, model.scale);
    let padding = placement_padding(size, available, model.offset);

    let image = Image::new(ctx.handle.clone())
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height));

    Container::new(image)
        .padding(padding)
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .into()
}

/// Computes the rendered page size: fit-to-frame base size times the zoom
/// scale.
#[allow(clippy::cast_precision_loss)] // u32 to f32 for dimensions: f32 is exact up to 16M
fn scaled_page_size(page_width: u32, page_height: u32, available: Size, scale: f32) -> Size {
    if page_width == 0 || page_height == 0 || available.width <= 0.0 || available.height <= 0.0 {
        return Size::new(1.0, 1.0);
    }

    let fit_x = available.width / page_width as f32;
    let fit_y = available.height / page_height as f32;
    let fit = fit_x.min(fit_y);

    if !fit.is_finite() || fit <= 0.0 {
        return Size::new(1.0, 1.0);
    }

    let factor = (fit * scale).max(0.01);
    Size::new(
        (page_width as f32 * factor).max(1.0),
        (page_height as f32 * factor).max(1.0),
    )
}

/// Padding that centers the page in the frame and then shifts it by the pan
/// offset. Negative components are floored at zero; the clip container hides
/// the overflow on the opposite side.
fn placement_padding(size: Size, available: Size, offset: Vector) -> Padding {
    let horizontal = (available.width - size.width) / 2.0;
    let vertical = (available.height - size.height) / 2.0;

    Padding {
        top: (vertical + offset.y).max(0.0),
        right: (horizontal - offset.x).max(0.0),
        bottom: (vertical - offset.y).max(0.0),
        left: (horizontal + offset.x).max(0.0),
    }
}
