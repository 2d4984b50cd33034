// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The component owns the three sub-components (pointer, gesture, drawer)
//! and wires them together: raw window events feed the pointer, pointer
//! effects feed the gesture, and drawer selections switch the current page.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{Catalog, PageId, PageImages};
use crate::ui::viewer::subcomponents::{drawer as drawer_state, gesture, pointer};
use crate::ui::viewer::{controls, drawer, info_panel, pane};
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment, event, keyboard, mouse, window, Element, Length};
use std::time::Instant;

/// Messages emitted by viewer-related widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// First frame after startup; reveals the page.
    Appeared,
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    /// Periodic tick while a pinch is live, used to settle it.
    Tick(Instant),
    Controls(controls::Message),
    Drawer(drawer_state::Message),
    ToggleErrorDetails,
}

#[derive(Debug, Clone)]
pub struct ErrorState {
    friendly_key: &'static str,
    friendly_text: String,
    details: String,
    show_details: bool,
}

impl ErrorState {
    fn refresh_translation(&mut self, i18n: &I18n) {
        self.friendly_text = i18n.tr(self.friendly_key);
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn is_showing_details(&self) -> bool {
        self.show_details
    }
}

/// Environment information required to render the viewer.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Complete viewer component state.
pub struct State {
    /// Binary visibility gate flipped by [`Message::Appeared`].
    visible: bool,
    current_page: PageId,
    catalog: Catalog,
    images: Option<PageImages>,
    error: Option<ErrorState>,
    gesture: gesture::State,
    pointer: pointer::State,
    drawer: drawer_state::State,
}

impl State {
    pub fn new(i18n: &I18n) -> Self {
        let catalog = Catalog::builtin();
        // The built-in catalog is never empty; the fallback id is inert.
        let current_page = catalog.first().map_or(PageId::new(1), |page| page.id);

        let (images, error) = match PageImages::load(&catalog) {
            Ok(images) => (Some(images), None),
            Err(Error::Asset(details)) => {
                let mut error = ErrorState {
                    friendly_key: "error-load-image-heading",
                    friendly_text: String::new(),
                    details,
                    show_details: false,
                };
                error.refresh_translation(i18n);
                (None, Some(error))
            }
        };

        Self {
            visible: false,
            current_page,
            catalog,
            images,
            error,
            gesture: gesture::State::default(),
            pointer: pointer::State::default(),
            drawer: drawer_state::State::default(),
        }
    }

    pub fn current_page(&self) -> PageId {
        self.current_page
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer.is_open
    }

    pub fn error(&self) -> Option<&ErrorState> {
        self.error.as_ref()
    }

    pub fn zoom_scale(&self) -> f32 {
        self.gesture.scale()
    }

    pub fn pan_offset(&self) -> iced::Vector {
        self.gesture.offset()
    }

    /// Whether the settle tick subscription must keep running.
    pub fn is_pinch_live(&self) -> bool {
        self.pointer.is_pinch_live()
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Appeared => {
                self.visible = true;
            }
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
            Message::Tick(now) => {
                let effect = self.pointer.handle(pointer::Message::Tick(now));
                self.apply_pointer_effect(effect);
            }
            Message::Controls(control) => self.handle_controls(control),
            Message::Drawer(msg) => {
                match self.drawer.handle(msg) {
                    drawer_state::Effect::None => {}
                    drawer_state::Effect::PageSelected(id) => self.select_page(id),
                }
            }
            Message::ToggleErrorDetails => {
                if let Some(error) = &mut self.error {
                    error.show_details = !error.show_details;
                }
            }
        }
    }

    fn handle_controls(&mut self, message: controls::Message) {
        let msg = match message {
            controls::Message::ZoomOut => gesture::Message::StepZoomOut,
            controls::Message::ResetZoom => gesture::Message::Reset,
            controls::Message::ZoomIn => gesture::Message::StepZoomIn,
        };
        self.gesture.handle(msg);
    }

    fn handle_raw_event(&mut self, event: event::Event) {
        match event {
            event::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::CursorMoved { position } => {
                    let effect = self.pointer.handle(pointer::Message::Moved(position));
                    self.apply_pointer_effect(effect);
                }
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    let effect = self.pointer.handle(pointer::Message::Pressed);
                    self.apply_pointer_effect(effect);
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => {
                    let effect = self.pointer.handle(pointer::Message::Released);
                    self.apply_pointer_effect(effect);
                }
                mouse::Event::WheelScrolled { delta } => {
                    let effect = self.pointer.handle(pointer::Message::Wheel {
                        delta,
                        current_scale: self.gesture.scale(),
                    });
                    self.apply_pointer_effect(effect);
                }
                _ => {}
            },
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.handle_key_pressed(&key);
            }
            _ => {}
        }
    }

    fn handle_key_pressed(&mut self, key: &keyboard::Key) {
        match key {
            keyboard::Key::Character(c) => match c.as_str() {
                "+" | "=" => {
                    self.gesture.handle(gesture::Message::StepZoomIn);
                }
                "-" => {
                    self.gesture.handle(gesture::Message::StepZoomOut);
                }
                "0" => {
                    self.gesture.handle(gesture::Message::Reset);
                }
                _ => {}
            },
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                if let Some(page) = self.catalog.previous(self.current_page) {
                    self.select_page(page.id);
                }
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                if let Some(page) = self.catalog.next(self.current_page) {
                    self.select_page(page.id);
                }
            }
            _ => {}
        }
    }

    fn apply_pointer_effect(&mut self, effect: pointer::Effect) {
        let msg = match effect {
            pointer::Effect::None => return,
            pointer::Effect::DoubleTap => gesture::Message::DoubleTap,
            pointer::Effect::DragChanged(translation) => {
                gesture::Message::DragChanged(translation)
            }
            pointer::Effect::DragEnded => gesture::Message::DragEnded,
            pointer::Effect::PinchChanged(magnification) => {
                gesture::Message::PinchChanged(magnification)
            }
            pointer::Effect::PinchEnded => gesture::Message::PinchEnded,
        };
        self.gesture.handle(msg);
    }

    /// Switches to another page. The zoom scale and pan offset carry over;
    /// only a reset or gesture changes them.
    fn select_page(&mut self, id: PageId) {
        // Unknown identifiers leave the current page in place.
        if self.catalog.contains(id) {
            self.current_page = id;
            self.visible = true;
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        if let Some(error) = &self.error {
            return error_view(env.i18n, error);
        }

        let Some(images) = &self.images else {
            return Text::new(env.i18n.tr("error-load-image-heading")).into();
        };

        let Some(page) = self.catalog.get(self.current_page) else {
            return Text::new(env.i18n.tr("error-load-image-heading")).into();
        };

        let Some(handles) = images.get(page.id) else {
            return Text::new(env.i18n.tr("error-load-image-heading")).into();
        };

        let pane_view = pane::view(
            pane::ViewContext {
                page,
                handle: &handles.full,
            },
            pane::ViewModel {
                scale: self.gesture.scale(),
                offset: self.gesture.offset(),
                visible: self.visible,
            },
        );

        let mut stack = Stack::new().push(
            Container::new(pane_view)
                .width(Length::Fill)
                .height(Length::Fill),
        );

        // Overlays share the visibility gate with the page itself.
        if self.visible {
            let info =
                info_panel::view(
                    info_panel::ViewContext { i18n: env.i18n },
                    self.gesture.scale(),
                    self.gesture.offset(),
                );

            stack = stack.push(
                Container::new(info)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .padding(crate::ui::design_tokens::spacing::MD),
            );

            let controls_view =
                controls::view(controls::ViewContext { i18n: env.i18n }).map(Message::Controls);

            stack = stack.push(
                Container::new(controls_view)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Bottom)
                    .padding(crate::ui::design_tokens::spacing::LG),
            );

            let drawer_view = drawer::view(
                drawer::ViewContext { i18n: env.i18n },
                drawer::ViewModel {
                    catalog: &self.catalog,
                    images,
                    is_open: self.drawer.is_open,
                },
            )
            .map(Message::Drawer);

            stack = stack.push(
                Container::new(drawer_view)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right)
                    .padding(crate::ui::design_tokens::spacing::XL),
            );
        }

        stack.into()
    }
}

fn error_view<'a>(i18n: &'a I18n, error: &'a ErrorState) -> Element<'a, Message> {
    let heading = Container::new(Text::new(i18n.tr("error-load-image-heading")).size(24))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let summary = Container::new(Text::new(error.friendly_text.as_str()).width(Length::Fill))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let toggle_label = if error.show_details {
        i18n.tr("error-details-hide")
    } else {
        i18n.tr("error-details-show")
    };

    let toggle_button =
        Container::new(button(Text::new(toggle_label)).on_press(Message::ToggleErrorDetails))
            .align_x(alignment::Horizontal::Center);

    let mut error_content = Column::new()
        .spacing(12)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(summary)
        .push(toggle_button);

    if error.show_details {
        let details_heading =
            Container::new(Text::new(i18n.tr("error-details-technical-heading")).size(16))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center);

        let details_body = Container::new(Text::new(error.details.as_str()).width(Length::Fill))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Left);

        error_content = error_content.push(
            Column::new()
                .spacing(8)
                .width(Length::Fill)
                .push(details_heading)
                .push(details_body),
        );
    }

    Container::new(error_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(16)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_ZOOM_SCALE, MIN_ZOOM_SCALE};
    use crate::test_utils::assert_abs_diff_eq;
    use iced::mouse::ScrollDelta;
    use iced::Point;

    fn fresh() -> State {
        State::new(&I18n::default())
    }

    fn raw(state: &mut State, event: event::Event) {
        state.handle_message(Message::RawEvent {
            window: window::Id::unique(),
            event,
        });
    }

    fn key(state: &mut State, key: keyboard::Key) {
        state.handle_key_pressed(&key);
    }

    #[test]
    fn starts_hidden_on_first_page() {
        let state = fresh();
        assert!(!state.is_visible());
        assert_eq!(state.current_page(), PageId::new(1));
        assert!(state.error().is_none());
    }

    #[test]
    fn appeared_reveals_the_page() {
        let mut state = fresh();
        state.handle_message(Message::Appeared);
        assert!(state.is_visible());
    }

    #[test]
    fn zoom_in_button_steps_the_scale() {
        let mut state = fresh();
        state.handle_message(Message::Controls(controls::Message::ZoomIn));
        assert_abs_diff_eq!(state.zoom_scale(), 2.0);
    }

    #[test]
    fn reset_button_restores_rest_state() {
        let mut state = fresh();
        state.handle_message(Message::Controls(controls::Message::ZoomIn));
        state.handle_message(Message::Controls(controls::Message::ResetZoom));
        assert_abs_diff_eq!(state.zoom_scale(), MIN_ZOOM_SCALE);
        assert_abs_diff_eq!(state.pan_offset().x, 0.0);
        assert_abs_diff_eq!(state.pan_offset().y, 0.0);
    }

    #[test]
    fn drawer_selection_switches_page_and_keeps_transform() {
        let mut state = fresh();
        state.handle_message(Message::Controls(controls::Message::ZoomIn));

        state.handle_message(Message::Drawer(drawer_state::Message::SelectPage(
            PageId::new(2),
        )));

        assert_eq!(state.current_page(), PageId::new(2));
        assert!(state.is_visible());
        assert_abs_diff_eq!(state.zoom_scale(), 2.0);
    }

    #[test]
    fn unknown_page_selection_is_ignored() {
        let mut state = fresh();
        state.handle_message(Message::Drawer(drawer_state::Message::SelectPage(
            PageId::new(99),
        )));
        assert_eq!(state.current_page(), PageId::new(1));
    }

    #[test]
    fn arrow_keys_navigate_pages() {
        let mut state = fresh();
        key(&mut state, keyboard::Key::Named(keyboard::key::Named::ArrowRight));
        assert_eq!(state.current_page(), PageId::new(2));

        key(&mut state, keyboard::Key::Named(keyboard::key::Named::ArrowLeft));
        assert_eq!(state.current_page(), PageId::new(1));

        // First page has no predecessor.
        key(&mut state, keyboard::Key::Named(keyboard::key::Named::ArrowLeft));
        assert_eq!(state.current_page(), PageId::new(1));
    }

    #[test]
    fn zoom_keys_step_and_reset() {
        let mut state = fresh();
        key(&mut state, keyboard::Key::Character("+".into()));
        key(&mut state, keyboard::Key::Character("+".into()));
        assert_abs_diff_eq!(state.zoom_scale(), 3.0);

        key(&mut state, keyboard::Key::Character("-".into()));
        assert_abs_diff_eq!(state.zoom_scale(), 2.0);

        key(&mut state, keyboard::Key::Character("0".into()));
        assert_abs_diff_eq!(state.zoom_scale(), MIN_ZOOM_SCALE);
    }

    #[test]
    fn drag_then_release_settles_within_bounds() {
        let mut state = fresh();
        state.handle_message(Message::Controls(controls::Message::ZoomIn));

        raw(
            &mut state,
            event::Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(100.0, 100.0),
            }),
        );
        raw(
            &mut state,
            event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
        );
        raw(
            &mut state,
            event::Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(160.0, 80.0),
            }),
        );

        assert_abs_diff_eq!(state.pan_offset().x, 60.0);
        assert_abs_diff_eq!(state.pan_offset().y, -20.0);

        raw(
            &mut state,
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
        );

        // Zoomed in, so the offset survives the release.
        assert_abs_diff_eq!(state.pan_offset().x, 60.0);
    }

    #[test]
    fn error_details_toggle_flips_visibility() {
        let i18n = I18n::default();
        let mut error = ErrorState {
            friendly_key: "error-load-image-heading",
            friendly_text: String::new(),
            details: "embedded image not found: missing.png".to_string(),
            show_details: false,
        };
        error.refresh_translation(&i18n);
        assert!(!error.friendly_text.is_empty());
        assert!(error.details().contains("missing.png"));

        let mut state = fresh();
        state.error = Some(error);

        state.handle_message(Message::ToggleErrorDetails);
        assert!(state.error().is_some_and(ErrorState::is_showing_details));

        state.handle_message(Message::ToggleErrorDetails);
        assert!(!state.error().is_some_and(ErrorState::is_showing_details));
    }

    #[test]
    fn wheel_pinch_settles_after_idle_tick() {
        let mut state = fresh();
        raw(
            &mut state,
            event::Event::Mouse(mouse::Event::WheelScrolled {
                delta: ScrollDelta::Lines { x: 0.0, y: 40.0 },
            }),
        );

        // Live value may exceed the settled maximum.
        assert!(state.zoom_scale() > MAX_ZOOM_SCALE);
        assert!(state.is_pinch_live());

        let later = Instant::now() + pointer::PINCH_SETTLE_DELAY;
        state.handle_message(Message::Tick(later));

        assert!(!state.is_pinch_live());
        assert_abs_diff_eq!(state.zoom_scale(), MAX_ZOOM_SCALE);
    }
}
