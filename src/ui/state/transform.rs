// SPDX-License-Identifier: MPL-2.0
//! Zoom/pan transform state machine for the page image.
//!
//! The state is continuous rather than enum-based: it is fully characterized
//! by the scale and offset, plus settle rules. Gestures report raw,
//! unclamped magnitudes while they are live (for responsive visual feedback)
//! and are normalized only at commit points: the `*_ended` handlers and
//! [`Transform::reset`]. Clamping every intermediate event would change the
//! gesture feel, so live values may transiently leave the rest range.
//!
//! Rest invariant, restored by every settle rule: the scale stays within
//! [`MIN_ZOOM_SCALE`]..=[`MAX_ZOOM_SCALE`], and at scale 1.0 the offset is
//! zero.

use crate::config::{MAX_ZOOM_SCALE, MIN_ZOOM_SCALE, ZOOM_STEP};
use iced::Vector;

/// Zoom scale and pan offset of the page image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Current zoom scale. 1.0 means the page fits its frame.
    pub scale: f32,
    /// Current pan offset in logical pixels. Only visually meaningful while
    /// zoomed in, but tracked verbatim during a live drag regardless.
    pub offset: Vector,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: MIN_ZOOM_SCALE,
            offset: Vector::new(0.0, 0.0),
        }
    }
}

impl Transform {
    /// Restores the rest state: scale 1.0, zero offset. Idempotent, and the
    /// only operation guaranteed to re-establish the rest invariant.
    pub fn reset(&mut self) {
        self.scale = MIN_ZOOM_SCALE;
        self.offset = Vector::new(0.0, 0.0);
    }

    /// Whether the current value satisfies the rest invariant.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        let in_range = (MIN_ZOOM_SCALE..=MAX_ZOOM_SCALE).contains(&self.scale);
        let offset_ok = self.scale > MIN_ZOOM_SCALE
            || (self.offset.x == 0.0 && self.offset.y == 0.0);
        in_range && offset_ok
    }

    /// Whether the page is zoomed in at all.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.scale > MIN_ZOOM_SCALE
    }

    /// Double-tap: jump from rest to maximum zoom, otherwise back to rest.
    pub fn double_tap(&mut self) {
        if self.scale == MIN_ZOOM_SCALE {
            self.scale = MAX_ZOOM_SCALE;
        } else {
            self.reset();
        }
    }

    /// Live drag update: the offset tracks the raw gesture translation.
    /// Updates are coalesced to the latest translation per gesture.
    pub fn drag_changed(&mut self, translation: Vector) {
        self.offset = translation;
    }

    /// Drag commit: an unzoomed page snaps back, collapsing any accumulated
    /// offset; a zoomed page keeps the last reported offset.
    pub fn drag_ended(&mut self) {
        if self.scale <= MIN_ZOOM_SCALE {
            self.reset();
        }
    }

    /// Live pinch update: within the rest range the scale tracks the raw
    /// magnification directly, which permits a transient scale below 1.0.
    /// An overshoot from a previous live update is pulled back to the
    /// maximum.
    pub fn pinch_changed(&mut self, magnification: f32) {
        if self.scale >= MIN_ZOOM_SCALE && self.scale <= MAX_ZOOM_SCALE {
            self.scale = magnification;
        } else if self.scale > MAX_ZOOM_SCALE {
            self.scale = MAX_ZOOM_SCALE;
        }
    }

    /// Pinch commit: clamp an overshoot, snap an undershoot back to rest.
    pub fn pinch_ended(&mut self) {
        if self.scale > MAX_ZOOM_SCALE {
            self.scale = MAX_ZOOM_SCALE;
        } else if self.scale <= MIN_ZOOM_SCALE {
            self.reset();
        }
    }

    /// Zoom in button: one step up, clamped to the maximum. Always leaves a
    /// settled value.
    pub fn step_in(&mut self) {
        if self.scale < MAX_ZOOM_SCALE {
            self.scale += ZOOM_STEP;

            if self.scale > MAX_ZOOM_SCALE {
                self.scale = MAX_ZOOM_SCALE;
            }
        }
    }

    /// Zoom out button: one step down; a result at or below 1.0 snaps to
    /// exactly 1.0 with a zero offset rather than leaving a sub-1.0
    /// remainder. The decrement itself does not touch the offset.
    pub fn step_out(&mut self) {
        if self.scale > MIN_ZOOM_SCALE {
            self.scale -= ZOOM_STEP;

            if self.scale <= MIN_ZOOM_SCALE {
                self.reset();
            }
        }
    }
}
