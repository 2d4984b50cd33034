// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the viewer.
//!
//! The `App` struct wires together localization, theming, and the viewer
//! component, and keeps the Iced bootstrap (window settings, subscriptions,
//! title) in one place so user-facing behavior is easy to audit.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::component;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    viewer: component::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("current_page", &self.viewer.current_page())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(
            config::WINDOW_DEFAULT_WIDTH as f32,
            config::WINDOW_DEFAULT_HEIGHT as f32,
        ),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the launcher `Flags` and schedules
    /// the mount transition that reveals the page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang);
        let viewer = component::State::new(&i18n);

        let app = App {
            i18n,
            theme_mode: flags.theme.unwrap_or_default(),
            viewer,
        };

        (
            app,
            Task::done(Message::Viewer(component::Message::Appeared)),
        )
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => {
                self.viewer.handle_message(viewer_message);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        self.viewer
            .view(component::ViewEnv { i18n: &self.i18n })
            .map(Message::Viewer)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_settle_subscription(&self.viewer),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_schedules_the_mount_transition() {
        let (app, _task) = App::new(Flags::default());
        // The page stays hidden until the scheduled Appeared message lands.
        assert!(!app.viewer.is_visible());
    }

    #[test]
    fn theme_flag_overrides_the_system_default() {
        let (app, _task) = App::new(Flags {
            lang: None,
            theme: Some(ThemeMode::Dark),
        });
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn appeared_message_reveals_the_viewer() {
        let (mut app, _task) = App::new(Flags::default());
        let _ = app.update(Message::Viewer(component::Message::Appeared));
        assert!(app.viewer.is_visible());
    }
}
