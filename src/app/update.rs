//! Message update handlers - thin dispatcher delegating to submodules

mod menu;
mod settings;
mod songs;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_songs(&message) {
            return task;
        }
        if let Some(task) = self.handle_menu(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::super::state::{CoreState, LibraryState, UiState};
    use super::*;
    use crate::app::{PushId, SwitchId};
    use crate::features::menu::MenuStyle;
    use crate::features::{CardEvent, Config, PointerButton, SongRecord};
    use crate::i18n::{Key, Language, Locale};

    const PRIMARY: PointerButton = PointerButton::Primary;

    fn app() -> App {
        let config = Config::default();
        let locale = Locale::new(Language::English);
        App {
            ui: UiState::new(&config, locale),
            core: CoreState::new(config, locale),
            library: LibraryState::default(),
        }
    }

    fn loaded(count: usize) -> App {
        let songs = (0..count)
            .map(|i| SongRecord {
                file: PathBuf::from(format!("/music/{i}.flac")),
                name: format!("Song {i}"),
                track_number: i as u32 + 1,
                artist: "Artist".into(),
                duration: 180,
            })
            .collect();
        let mut app = app();
        let _ = app.update(Message::LibraryLoaded(Ok(songs)));
        app
    }

    fn selected(app: &App) -> Vec<bool> {
        let list = app.library.song_tab.list();
        list.cards().iter().map(|c| c.is_selected()).collect()
    }

    #[test]
    fn typing_updates_query() {
        let mut app = app();
        let _ = app.update(Message::SearchChanged("blue".into()));
        assert_eq!(app.ui.search.query, "blue");

        let _ = app.update(Message::SearchChanged("blues".into()));
        assert_eq!(app.ui.search.query, "blues");
        assert_eq!(app.ui.search.previous.as_deref(), Some("blue"));
    }

    #[test]
    fn drag_to_another_card_selects_the_pressed_one() {
        let mut app = loaded(3);

        for message in [
            Message::Card(0, CardEvent::Enter),
            Message::Card(0, CardEvent::Press(PRIMARY)),
            Message::Card(0, CardEvent::Leave),
            Message::Card(1, CardEvent::Enter),
            Message::Card(1, CardEvent::Release(PRIMARY)),
        ] {
            let _ = app.update(message);
        }

        assert_eq!(selected(&app), vec![true, false, false]);
        assert!(!app.library.song_tab.list().cards()[0].is_pressed());
    }

    #[test]
    fn release_outside_the_list_finishes_the_press() {
        let mut app = loaded(2);
        let _ = app.update(Message::Card(1, CardEvent::Press(PRIMARY)));
        let _ = app.update(Message::Card(1, CardEvent::Leave));
        let _ = app.update(Message::PointerReleased(PRIMARY));

        assert_eq!(selected(&app), vec![false, true]);
        assert!(!app.library.song_tab.list().cards()[1].is_pressed());

        // Nothing pressed: a stray release changes nothing
        let _ = app.update(Message::PointerReleased(PRIMARY));
        assert_eq!(selected(&app), vec![false, true]);
    }

    #[test]
    fn volume_is_clamped() {
        let mut app = app();
        let _ = app.update(Message::RangeChanged(150));
        assert_eq!(app.ui.settings.volume.value(), 100);
    }

    #[test]
    fn aero_switch_changes_menu_style() {
        let mut app = app();
        assert_eq!(app.core.menu_style(), MenuStyle::Dwm);

        let _ = app.update(Message::SwitchToggled(SwitchId::AeroMenu, true));
        assert_eq!(app.core.menu_style(), MenuStyle::Aero);

        let _ = app.update(Message::SwitchToggled(SwitchId::AcrylicMenu, true));
        assert!(matches!(app.core.menu_style(), MenuStyle::Acrylic(_)));
    }

    #[test]
    fn language_toggle_relabels_and_closes_menus() {
        let mut app = loaded(1);
        let _ = app.update(Message::CardContextMenu(0));
        assert!(app.ui.song_menu.is_some());

        let _ = app.update(Message::PushClicked(PushId::ToggleLanguage));
        let chinese = Locale::new(Language::Chinese);
        assert_eq!(app.core.locale.language, Language::Chinese);
        assert_eq!(
            app.ui.settings.dark_mode.card.title(),
            chinese.get(Key::SettingsDarkMode)
        );
        assert!(app.ui.song_menu.is_none());

        let _ = app.update(Message::PushClicked(PushId::ToggleLanguage));
        assert_eq!(app.ui.settings.dark_mode.card.title(), "Dark mode");
    }

    #[test]
    fn edit_menu_stays_inside_window() {
        let mut app = app();
        let _ = app.update(Message::SearchChanged("abc".into()));
        let _ = app.update(Message::WindowResized(iced::Size::new(800.0, 600.0)));
        let _ = app.update(Message::CursorMoved(iced::Point::new(790.0, 590.0)));
        let _ = app.update(Message::SearchClipboardRead(Some("x".into())));

        let menu = app.ui.search.menu.as_ref().unwrap();
        let target = menu.target_geometry();
        assert!(target.x + target.width <= 800.0);
        assert!(target.y + target.height <= 600.0);
    }
}
