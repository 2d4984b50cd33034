// SPDX-License-Identifier: MPL-2.0
//! Gesture sub-component encapsulating the zoom/pan Transform and its
//! transition rules.
//!
//! Double-tap, drag, and pinch arrive here as semantic messages (the raw
//! pointer mapping lives in [`pointer`](super::pointer)); the control bar
//! buttons funnel into the same transitions so every interaction source
//! shares one state machine.

use crate::ui::state::Transform;
use iced::Vector;

/// Gesture sub-component state.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    /// The underlying zoom/pan transform.
    pub inner: Transform,
}

/// Messages for the gesture sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Double-tap on the page image.
    DoubleTap,
    /// Live drag update with the raw gesture translation.
    DragChanged(Vector),
    /// Drag gesture finished.
    DragEnded,
    /// Live pinch update with the raw magnification.
    PinchChanged(f32),
    /// Pinch gesture finished.
    PinchEnded,
    /// Zoom in by one step (control bar / keyboard).
    StepZoomIn,
    /// Zoom out by one step (control bar / keyboard).
    StepZoomOut,
    /// Reset to the rest state.
    Reset,
}

/// Effects produced by gesture handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// The transform changed and the image must be re-rendered.
    TransformChanged,
}

impl State {
    /// Handle a gesture message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let before = self.inner;

        match msg {
            Message::DoubleTap => self.inner.double_tap(),
            Message::DragChanged(translation) => self.inner.drag_changed(translation),
            Message::DragEnded => self.inner.drag_ended(),
            Message::PinchChanged(magnification) => self.inner.pinch_changed(magnification),
            Message::PinchEnded => self.inner.pinch_ended(),
            Message::StepZoomIn => self.inner.step_in(),
            Message::StepZoomOut => self.inner.step_out(),
            Message::Reset => self.inner.reset(),
        }

        if self.inner == before {
            Effect::None
        } else {
            Effect::TransformChanged
        }
    }

    /// Current zoom scale.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.inner.scale
    }

    /// Current pan offset.
    #[must_use]
    pub fn offset(&self) -> Vector {
        self.inner.offset
    }
}
