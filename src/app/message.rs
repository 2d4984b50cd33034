// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::theming::ThemeMode;
use crate::ui::viewer::component;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
}

/// Runtime flags parsed from the command line by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override, e.g. `--lang fr`.
    pub lang: Option<String>,
    /// Theme mode override, e.g. `--theme dark`.
    pub theme: Option<ThemeMode>,
}
