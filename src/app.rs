//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Subscription, Task, Theme};

use crate::features::config::items;
use crate::features::menu::{DirPlaylistProvider, PlaylistProvider};
use crate::features::{Config, PointerButton, library};
use crate::i18n::Locale;
pub use message::{Message, Page, PushId, SwitchId};
pub use state::{App, SearchState, UiState};
use state::{CoreState, LibraryState};

pub const INITIAL_WINDOW_SIZE: iced::Size = iced::Size::new(1400.0, 900.0);

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        let locale = Locale::from_env();

        let ui = UiState::new(&config, locale);
        let app = Self {
            core: CoreState::new(config, locale),
            library: LibraryState::default(),
            ui,
        };

        let init_task = Task::batch([
            Task::perform(library::load(), |result| {
                Message::LibraryLoaded(result.map_err(|e| format!("{e:#}")))
            }),
            load_playlists(),
        ]);

        (app, init_task)
    }

    pub fn theme(&self) -> Theme {
        if self.core.config.get_bool(&items::DARK_MODE) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self) -> String {
        let count = self.library.song_tab.list().len();
        format!("Songcard - {count} songs")
    }

    /// Subscriptions for animation frames, cursor tracking and resizes
    pub fn subscription(&self) -> Subscription<Message> {
        let now = iced::time::Instant::now();

        let animation_sub = if self.has_active_animations(now) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            Subscription::none()
        };

        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        // Context menus open at the cursor
        let mouse_sub = iced::event::listen().filter_map(|event| match event {
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { position }) => {
                Some(Message::CursorMoved(position))
            }
            _ => None,
        });

        // Releases are delivered even when a widget captured them, so a card
        // pressed and dragged elsewhere still receives its release
        let release_sub = iced::event::listen_with(pointer_release);

        Subscription::batch([animation_sub, resize_sub, mouse_sub, release_sub])
    }
}

fn pointer_release(
    event: iced::Event,
    _status: iced::event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    use iced::mouse::{Button, Event as MouseEvent};

    let iced::Event::Mouse(MouseEvent::ButtonReleased(button)) = event else {
        return None;
    };
    let button = match button {
        Button::Left => PointerButton::Primary,
        Button::Right => PointerButton::Secondary,
        Button::Middle => PointerButton::Middle,
        _ => return None,
    };
    Some(Message::PointerReleased(button))
}

/// List playlist files off the UI thread
pub(crate) fn load_playlists() -> Task<Message> {
    Task::perform(
        async {
            let Some(provider) = DirPlaylistProvider::default_dir().map(DirPlaylistProvider::new)
            else {
                return Ok::<_, String>(Vec::new());
            };
            tokio::task::spawn_blocking(move || provider.playlist_names())
                .await
                .map_err(|e| e.to_string())?
                .map_err(|e| format!("{e:#}"))
        },
        Message::PlaylistsLoaded,
    )
}
