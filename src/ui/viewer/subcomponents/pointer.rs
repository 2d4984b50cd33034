// SPDX-License-Identifier: MPL-2.0
//! Pointer sub-component translating raw mouse input into semantic gesture
//! effects, with double-click detection and wheel-driven magnification.
//!
//! Drag: a left press anchors the gesture at the cursor; every move while
//! pressed reports the translation from that anchor. A release without
//! meaningful movement counts as a click instead, and two clicks within
//! [`DOUBLE_CLICK_THRESHOLD`] form a double-tap.
//!
//! Pinch: the first wheel event opens a live magnification at the current
//! settled scale; further events adjust it. Wheel input has no release
//! event, so the gesture settles from a periodic tick once no wheel event
//! has arrived for [`PINCH_SETTLE_DELAY`].

use iced::mouse::ScrollDelta;
use iced::{Point, Vector};
use std::time::{Duration, Instant};

/// Time threshold for double-click detection.
pub const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);

/// Idle time after the last wheel event before a live pinch settles.
pub const PINCH_SETTLE_DELAY: Duration = Duration::from_millis(250);

/// Cursor travel below this distance still counts as a click, not a drag.
const DRAG_CLICK_TOLERANCE: f32 = 4.0;

/// Magnification change per wheel line.
const WHEEL_LINE_FACTOR: f32 = 0.25;

/// Magnification change per wheel pixel (trackpads report pixel deltas).
const WHEEL_PIXEL_FACTOR: f32 = 0.01;

/// Live pinch tracking.
#[derive(Debug, Clone, Copy)]
struct Pinch {
    /// Raw, unclamped magnification accumulated from wheel input.
    magnification: f32,
    /// When the last wheel event arrived, for settle detection.
    last_input: Instant,
}

/// Pointer sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Current cursor position within the window.
    cursor: Option<Point>,
    /// Where the active press started, if any.
    press_origin: Option<Point>,
    /// Whether the active press exceeded the click tolerance.
    dragged: bool,
    /// Last click timestamp for double-click detection.
    last_click: Option<Instant>,
    /// Live pinch, if one is in progress.
    pinch: Option<Pinch>,
}

/// Messages for the pointer sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Left mouse button pressed at the tracked cursor position.
    Pressed,
    /// Cursor moved.
    Moved(Point),
    /// Left mouse button released.
    Released,
    /// Wheel scrolled; `current_scale` seeds a new live pinch.
    Wheel { delta: ScrollDelta, current_scale: f32 },
    /// Periodic tick used to settle a live pinch.
    Tick(Instant),
}

/// Semantic gesture effects for the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Double-tap detected.
    DoubleTap,
    /// Live drag translation from the press origin.
    DragChanged(Vector),
    /// Drag finished.
    DragEnded,
    /// Live magnification update (raw, unclamped).
    PinchChanged(f32),
    /// Pinch settled.
    PinchEnded,
}

impl State {
    /// Handle a pointer message.
    ///
    /// Takes `Message` by value following Iced's `update(message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Pressed => {
                self.press_origin = self.cursor;
                self.dragged = false;
                Effect::None
            }
            Message::Moved(position) => {
                self.cursor = Some(position);

                let Some(origin) = self.press_origin else {
                    return Effect::None;
                };

                let translation =
                    Vector::new(position.x - origin.x, position.y - origin.y);

                if !self.dragged && translation_length(translation) <= DRAG_CLICK_TOLERANCE {
                    return Effect::None;
                }

                self.dragged = true;
                Effect::DragChanged(translation)
            }
            Message::Released => {
                if self.press_origin.take().is_none() {
                    return Effect::None;
                }

                if self.dragged {
                    self.dragged = false;
                    return Effect::DragEnded;
                }

                let now = Instant::now();
                let is_double_click = self
                    .last_click
                    .is_some_and(|t| now.duration_since(t) < DOUBLE_CLICK_THRESHOLD);

                self.last_click = Some(now);

                if is_double_click {
                    self.last_click = None; // Reset to avoid triple-click
                    Effect::DoubleTap
                } else {
                    Effect::None
                }
            }
            Message::Wheel {
                delta,
                current_scale,
            } => {
                let amount = wheel_amount(delta);
                let magnification = match self.pinch {
                    Some(pinch) => pinch.magnification + amount,
                    None => current_scale + amount,
                };

                self.pinch = Some(Pinch {
                    magnification,
                    last_input: Instant::now(),
                });

                Effect::PinchChanged(magnification)
            }
            Message::Tick(now) => {
                let Some(pinch) = self.pinch else {
                    return Effect::None;
                };

                if now.duration_since(pinch.last_input) >= PINCH_SETTLE_DELAY {
                    self.pinch = None;
                    Effect::PinchEnded
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Whether a pinch is live and the settle tick must keep running.
    #[must_use]
    pub fn is_pinch_live(&self) -> bool {
        self.pinch.is_some()
    }
}

fn translation_length(v: Vector) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Converts a wheel delta into a magnification change.
fn wheel_amount(delta: ScrollDelta) -> f32 {
    match delta {
        ScrollDelta::Lines { y, .. } => y * WHEEL_LINE_FACTOR,
        ScrollDelta::Pixels { y, .. } => y * WHEEL_PIXEL_FACTOR,
    }
}
