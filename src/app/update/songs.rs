//! Song list message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{CardEvent, TabSignal};
use crate::ui::components::song_list;

impl App {
    /// Handle library and song card messages
    pub fn handle_songs(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::LibraryLoaded(Ok(songs)) => {
                tracing::info!("Library loaded with {} songs", songs.len());
                self.library.song_tab.update_window(songs.clone());
                self.library.loaded = true;
                self.ui.row_hover.clear();
                self.resize_cards();
                Some(Task::none())
            }

            Message::LibraryLoaded(Err(e)) => {
                tracing::warn!("Failed to load library: {}", e);
                self.library.loaded = true;
                Some(Task::none())
            }

            Message::PlaylistsLoaded(Ok(names)) => {
                tracing::debug!(count = names.len(), "playlists loaded");
                self.library.playlists = names.clone();
                Some(Task::none())
            }

            Message::PlaylistsLoaded(Err(e)) => {
                tracing::warn!("Failed to list playlists: {}", e);
                Some(Task::none())
            }

            Message::RemoveSongs(paths) => {
                let removed = self.library.song_tab.delete_songs(paths);
                tracing::info!("Removed {} of {} requested songs", removed, paths.len());
                self.ui.row_hover.clear();
                Some(Task::none())
            }

            Message::PointerReleased(button) => {
                let signals = self
                    .library
                    .song_tab
                    .release_pointer(*button, Instant::now());
                Some(self.apply_tab_signals(signals))
            }

            Message::Card(index, event) => {
                match event {
                    CardEvent::Enter => self.ui.row_hover.set(Some(*index)),
                    CardEvent::Leave if self.ui.row_hover.current() == Some(index) => {
                        self.ui.row_hover.set(None)
                    }
                    _ => {}
                }
                let signals = self
                    .library
                    .song_tab
                    .handle_card(*index, *event, Instant::now());
                Some(self.apply_tab_signals(signals))
            }

            Message::CheckAll => {
                let signals = self.library.song_tab.check_all();
                Some(self.apply_tab_signals(signals))
            }

            Message::ExitSelectionMode => {
                let signals = self.library.song_tab.exit_selection_mode();
                Some(self.apply_tab_signals(signals))
            }

            Message::DeleteChecked => {
                let signal = self.library.song_tab.request_remove_checked();
                Some(self.apply_tab_signals(signal.into_iter().collect()))
            }

            _ => None,
        }
    }

    /// Turn tab signals into state changes and follow-up messages
    pub(crate) fn apply_tab_signals(&mut self, signals: Vec<TabSignal>) -> Task<Message> {
        let mut tasks = Vec::new();
        for signal in signals {
            match signal {
                TabSignal::Play(index) => {
                    tracing::info!(index, "play requested");
                    self.library.song_tab.list_mut().set_playing(Some(index));
                }
                TabSignal::SelectionModeChanged(open) => {
                    tracing::debug!(open, "selection mode changed");
                }
                TabSignal::CheckedCountChanged(count) => {
                    tracing::debug!(count, "checked songs");
                }
                TabSignal::RemoveSongs(paths) => {
                    tasks.push(Task::done(Message::RemoveSongs(paths)));
                }
            }
        }
        Task::batch(tasks)
    }

    /// Size every card to the current window width
    pub(crate) fn resize_cards(&mut self) {
        if self.ui.window.width <= 0.0 {
            return;
        }
        let width = song_list::card_width(self.ui.window.width);
        self.library.song_tab.list_mut().resize(width);
    }
}
