// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows through the viewer component: raw window events in,
//! settled zoom/pan state out.

use iced::mouse::{self, ScrollDelta};
use iced::{event, window, Point};
use pinch_gallery::config::{MAX_ZOOM_SCALE, MIN_ZOOM_SCALE};
use pinch_gallery::i18n::fluent::I18n;
use pinch_gallery::media::PageId;
use pinch_gallery::ui::viewer::component::{Message, State};
use pinch_gallery::ui::viewer::subcomponents::{drawer, pointer};
use pinch_gallery::ui::viewer::controls;
use std::time::Instant;

fn fresh() -> State {
    let mut state = State::new(&I18n::default());
    state.handle_message(Message::Appeared);
    state
}

fn mouse_event(state: &mut State, event: mouse::Event) {
    state.handle_message(Message::RawEvent {
        window: window::Id::unique(),
        event: event::Event::Mouse(event),
    });
}

fn double_click(state: &mut State, position: Point) {
    for _ in 0..2 {
        mouse_event(state, mouse::Event::CursorMoved { position });
        mouse_event(state, mouse::Event::ButtonPressed(mouse::Button::Left));
        mouse_event(state, mouse::Event::ButtonReleased(mouse::Button::Left));
    }
}

fn settle_pinch(state: &mut State) {
    let later = Instant::now() + pointer::PINCH_SETTLE_DELAY;
    state.handle_message(Message::Tick(later));
}

#[test]
fn startup_reveals_first_page_at_rest() {
    let state = fresh();
    assert!(state.is_visible());
    assert!(state.error().is_none());
    assert_eq!(state.current_page(), PageId::new(1));
    assert_eq!(state.zoom_scale(), MIN_ZOOM_SCALE);
}

#[test]
fn double_click_toggles_between_rest_and_max_zoom() {
    let mut state = fresh();

    double_click(&mut state, Point::new(200.0, 150.0));
    assert_eq!(state.zoom_scale(), MAX_ZOOM_SCALE);

    double_click(&mut state, Point::new(200.0, 150.0));
    assert_eq!(state.zoom_scale(), MIN_ZOOM_SCALE);
    assert_eq!(state.pan_offset().x, 0.0);
    assert_eq!(state.pan_offset().y, 0.0);
}

#[test]
fn drag_while_unzoomed_snaps_back_on_release() {
    let mut state = fresh();

    mouse_event(
        &mut state,
        mouse::Event::CursorMoved {
            position: Point::new(100.0, 100.0),
        },
    );
    mouse_event(&mut state, mouse::Event::ButtonPressed(mouse::Button::Left));
    mouse_event(
        &mut state,
        mouse::Event::CursorMoved {
            position: Point::new(220.0, 180.0),
        },
    );

    // Live drag tracks the translation even at rest scale.
    assert_eq!(state.pan_offset().x, 120.0);
    assert_eq!(state.pan_offset().y, 80.0);

    mouse_event(&mut state, mouse::Event::ButtonReleased(mouse::Button::Left));
    assert_eq!(state.pan_offset().x, 0.0);
    assert_eq!(state.pan_offset().y, 0.0);
    assert_eq!(state.zoom_scale(), MIN_ZOOM_SCALE);
}

#[test]
fn drag_while_zoomed_keeps_offset_on_release() {
    let mut state = fresh();
    double_click(&mut state, Point::new(200.0, 150.0));

    mouse_event(
        &mut state,
        mouse::Event::CursorMoved {
            position: Point::new(100.0, 100.0),
        },
    );
    mouse_event(&mut state, mouse::Event::ButtonPressed(mouse::Button::Left));
    mouse_event(
        &mut state,
        mouse::Event::CursorMoved {
            position: Point::new(60.0, 130.0),
        },
    );
    mouse_event(&mut state, mouse::Event::ButtonReleased(mouse::Button::Left));

    assert_eq!(state.pan_offset().x, -40.0);
    assert_eq!(state.pan_offset().y, 30.0);
    assert_eq!(state.zoom_scale(), MAX_ZOOM_SCALE);
}

#[test]
fn wheel_pinch_overshoot_settles_at_max() {
    let mut state = fresh();

    mouse_event(
        &mut state,
        mouse::Event::WheelScrolled {
            delta: ScrollDelta::Lines { x: 0.0, y: 40.0 },
        },
    );
    assert!(state.is_pinch_live());

    settle_pinch(&mut state);
    assert!(!state.is_pinch_live());
    assert_eq!(state.zoom_scale(), MAX_ZOOM_SCALE);
}

#[test]
fn wheel_pinch_undershoot_settles_at_rest() {
    let mut state = fresh();

    mouse_event(
        &mut state,
        mouse::Event::WheelScrolled {
            delta: ScrollDelta::Lines { x: 0.0, y: -8.0 },
        },
    );

    // Live undershoot below 1.0 is permitted until the gesture settles.
    assert!(state.zoom_scale() < MIN_ZOOM_SCALE);

    settle_pinch(&mut state);
    assert_eq!(state.zoom_scale(), MIN_ZOOM_SCALE);
    assert_eq!(state.pan_offset().x, 0.0);
}

#[test]
fn zoom_buttons_step_and_snap_to_rest() {
    let mut state = fresh();

    state.handle_message(Message::Controls(controls::Message::ZoomIn));
    state.handle_message(Message::Controls(controls::Message::ZoomIn));
    assert_eq!(state.zoom_scale(), 3.0);

    state.handle_message(Message::Controls(controls::Message::ZoomOut));
    state.handle_message(Message::Controls(controls::Message::ZoomOut));
    assert_eq!(state.zoom_scale(), MIN_ZOOM_SCALE);

    // At rest another zoom-out press is a no-op.
    state.handle_message(Message::Controls(controls::Message::ZoomOut));
    assert_eq!(state.zoom_scale(), MIN_ZOOM_SCALE);
}

#[test]
fn reset_button_clears_zoom_and_pan() {
    let mut state = fresh();
    double_click(&mut state, Point::new(200.0, 150.0));

    mouse_event(
        &mut state,
        mouse::Event::CursorMoved {
            position: Point::new(0.0, 0.0),
        },
    );
    mouse_event(&mut state, mouse::Event::ButtonPressed(mouse::Button::Left));
    mouse_event(
        &mut state,
        mouse::Event::CursorMoved {
            position: Point::new(70.0, 70.0),
        },
    );
    mouse_event(&mut state, mouse::Event::ButtonReleased(mouse::Button::Left));

    state.handle_message(Message::Controls(controls::Message::ResetZoom));
    assert_eq!(state.zoom_scale(), MIN_ZOOM_SCALE);
    assert_eq!(state.pan_offset().x, 0.0);
    assert_eq!(state.pan_offset().y, 0.0);
}

#[test]
fn drawer_toggle_and_thumbnail_selection() {
    let mut state = fresh();
    assert!(!state.is_drawer_open());

    state.handle_message(Message::Drawer(drawer::Message::ToggleDrawer));
    assert!(state.is_drawer_open());

    state.handle_message(Message::Drawer(drawer::Message::SelectPage(PageId::new(3))));
    assert_eq!(state.current_page(), PageId::new(3));
    // Selecting a page leaves the drawer open.
    assert!(state.is_drawer_open());

    state.handle_message(Message::Drawer(drawer::Message::ToggleDrawer));
    assert!(!state.is_drawer_open());
}

#[test]
fn selecting_unknown_page_keeps_current_page() {
    let mut state = fresh();
    state.handle_message(Message::Drawer(drawer::Message::SelectPage(PageId::new(
        42,
    ))));
    assert_eq!(state.current_page(), PageId::new(1));
}

#[test]
fn page_switch_carries_zoom_and_pan_over() {
    let mut state = fresh();
    double_click(&mut state, Point::new(200.0, 150.0));

    state.handle_message(Message::Drawer(drawer::Message::SelectPage(PageId::new(2))));
    assert_eq!(state.current_page(), PageId::new(2));
    assert_eq!(state.zoom_scale(), MAX_ZOOM_SCALE);
}

#[test]
fn view_renders_in_every_reachable_state() {
    let i18n = I18n::default();
    let mut state = State::new(&i18n);

    // Hidden, at rest.
    let _ = state.view(pinch_gallery::ui::viewer::component::ViewEnv { i18n: &i18n });

    // Visible, zoomed, drawer open.
    state.handle_message(Message::Appeared);
    state.handle_message(Message::Controls(controls::Message::ZoomIn));
    state.handle_message(Message::Drawer(drawer::Message::ToggleDrawer));
    let _ = state.view(pinch_gallery::ui::viewer::component::ViewEnv { i18n: &i18n });
}
