// SPDX-License-Identifier: MPL-2.0
use pinch_gallery::app::{self, Flags};
use pinch_gallery::ui::theming::ThemeMode;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").ok().flatten(),
        theme: args
            .opt_value_from_str::<_, String>("--theme")
            .ok()
            .flatten()
            .and_then(|value| ThemeMode::parse(&value)),
    };

    app::run(flags)
}
