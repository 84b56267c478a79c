//! Context menu message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::menu::{
    AddToMenu, AddToSignal, EditAction, FieldSnapshot, LineEditMenu, SongMenu, SongMenuAction,
    Submenu,
};
use crate::features::{CardEvent, PointerButton};

impl App {
    /// Handle song card and search field context menus
    pub fn handle_menu(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::CardContextMenu(index) => {
                let signals = self.library.song_tab.handle_card(
                    *index,
                    CardEvent::Release(PointerButton::Secondary),
                    Instant::now(),
                );
                let task = self.apply_tab_signals(signals);
                self.open_song_menu(*index);
                Some(task)
            }

            Message::OpenAddToMenu(index) => {
                self.open_song_menu(*index).open_submenu(Submenu::AddTo);
                Some(Task::none())
            }

            Message::SongMenuAction(action) => Some(self.run_song_menu_action(action)),

            Message::CloseMenus => {
                self.ui.close_menus();
                Some(Task::none())
            }

            Message::SearchChanged(query) => {
                self.ui.search.set_query(query.clone());
                Some(Task::none())
            }

            Message::SearchContextMenu => {
                self.ui.song_menu = None;
                Some(iced::clipboard::read().map(Message::SearchClipboardRead))
            }

            Message::SearchClipboardRead(clipboard) => {
                let search = &mut self.ui.search;
                let field = FieldSnapshot {
                    has_text: !search.query.is_empty(),
                    has_selection: search.selected_all && !search.query.is_empty(),
                };
                let clipboard_has_text = clipboard.as_deref().is_some_and(|t| !t.is_empty());
                search.menu = LineEditMenu::open(
                    field,
                    clipboard_has_text,
                    (self.ui.cursor.x, self.ui.cursor.y),
                    self.core.locale,
                    Instant::now(),
                );
                match search.menu.as_mut() {
                    Some(menu) => menu.fit_within((self.ui.window.width, self.ui.window.height)),
                    None => tracing::debug!("nothing to offer in edit menu"),
                }
                Some(Task::none())
            }

            Message::LineEditAction(action) => {
                self.ui.search.menu = None;
                Some(self.run_edit_action(*action))
            }

            Message::PasteText(text) => {
                if let Some(text) = text.as_deref().filter(|t| !t.is_empty()) {
                    let search = &mut self.ui.search;
                    let query = if search.selected_all {
                        text.to_string()
                    } else {
                        format!("{}{}", search.query, text)
                    };
                    search.set_query(query);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Replace any open menu with a song menu at the cursor
    fn open_song_menu(&mut self, index: usize) -> &mut SongMenu {
        self.ui.search.menu = None;
        self.ui.song_menu.insert(SongMenu::new(
            index,
            (self.ui.cursor.x, self.ui.cursor.y),
            self.core.menu_style(),
            &self.library.playlists,
            self.core.locale,
        ))
    }

    fn run_song_menu_action(&mut self, action: &SongMenuAction) -> Task<Message> {
        let Some(menu) = self.ui.song_menu.as_mut() else {
            return Task::none();
        };
        let index = menu.index;

        if let SongMenuAction::OpenSubmenu(submenu) = action {
            menu.open_submenu(*submenu);
            return Task::none();
        }
        self.ui.song_menu = None;

        match action {
            SongMenuAction::Play => {
                self.library.song_tab.list_mut().set_playing(Some(index));
                Task::none()
            }
            SongMenuAction::AddTo(add_to) => {
                match AddToMenu::trigger(add_to) {
                    AddToSignal::AddToNowPlaying => {
                        tracing::info!(index, "add to now playing");
                    }
                    AddToSignal::CreatePlaylist => {
                        tracing::info!(index, "create playlist with song");
                    }
                    AddToSignal::AddSongsToPlaylist(name) => {
                        tracing::info!(index, playlist = %name, "add song to playlist");
                    }
                }
                Task::none()
            }
            SongMenuAction::Download(quality) => {
                tracing::info!(index, quality = quality.as_str(), "download requested");
                Task::none()
            }
            SongMenuAction::Delete => {
                let signal = self.library.song_tab.request_remove(index);
                self.apply_tab_signals(signal.into_iter().collect())
            }
            SongMenuAction::Select => {
                let signals = self.library.song_tab.handle_card(
                    index,
                    CardEvent::CheckboxToggled,
                    Instant::now(),
                );
                self.apply_tab_signals(signals)
            }
            SongMenuAction::OpenSubmenu(_) => Task::none(),
        }
    }

    fn run_edit_action(&mut self, action: EditAction) -> Task<Message> {
        let search = &mut self.ui.search;
        match action {
            EditAction::Cut => {
                let text = search.query.clone();
                search.set_query(String::new());
                iced::clipboard::write(text)
            }
            EditAction::Copy => iced::clipboard::write(search.query.clone()),
            EditAction::Paste => iced::clipboard::read().map(Message::PasteText),
            EditAction::Cancel => {
                if let Some(previous) = search.previous.take() {
                    search.set_query(previous);
                }
                Task::none()
            }
            EditAction::SelectAll => {
                search.selected_all = true;
                Task::none()
            }
        }
    }
}
