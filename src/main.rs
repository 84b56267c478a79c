//! Songcard - animated song list, setting cards and context menus
//! Built with iced

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod i18n;
mod ui;
mod utils;

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(app::INITIAL_WINDOW_SIZE)
        .antialiasing(true)
        .run()
}
