// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Raw window events feed the viewer's pointer handling, and a periodic
//! tick runs only while a wheel-driven pinch is live so it can settle.

use super::Message;
use crate::ui::viewer::component;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick period for pinch settle detection.
const SETTLE_TICK_PERIOD: Duration = Duration::from_millis(100);

/// Routes native events to the viewer.
///
/// Wheel scroll is always forwarded so the pinch gesture wins over any
/// widget scrolling; everything else is forwarded only when no widget
/// captured it.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if matches!(
            event,
            event::Event::Mouse(iced::mouse::Event::WheelScrolled { .. })
        ) {
            return Some(Message::Viewer(component::Message::RawEvent {
                window: window_id,
                event: event.clone(),
            }));
        }

        match status {
            event::Status::Ignored => Some(Message::Viewer(component::Message::RawEvent {
                window: window_id,
                event: event.clone(),
            })),
            event::Status::Captured => None,
        }
    })
}

/// Periodic tick that settles a live pinch once wheel input goes idle.
/// Inactive the rest of the time so an idle app schedules no timers.
pub fn create_settle_subscription(viewer: &component::State) -> Subscription<Message> {
    if viewer.is_pinch_live() {
        time::every(SETTLE_TICK_PERIOD).map(|now| Message::Viewer(component::Message::Tick(now)))
    } else {
        Subscription::none()
    }
}
