//! "Add to" submenu

use super::{MenuAction, MenuEntry, MenuIcon, actions, label};
use crate::i18n::{Key, Locale};
use crate::utils::truncate_text;

/// Longer playlist names are elided in the menu
const MAX_LABEL_CHARS: usize = 32;
/// Rows shown before the submenu starts scrolling
pub const MAX_VISIBLE_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddToAction {
    NowPlaying,
    NewPlaylist,
    Playlist(String),
}

/// What the menu asks its owner to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddToSignal {
    AddToNowPlaying,
    CreatePlaylist,
    /// Add the songs to an existing playlist
    AddSongsToPlaylist(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToMenu {
    entries: Vec<MenuEntry<AddToAction>>,
}

impl AddToMenu {
    /// "Now playing", a separator, "New playlist", then one row per playlist
    pub fn new(playlists: &[String], locale: Locale) -> Self {
        let mut entries = vec![
            MenuEntry::Action(
                MenuAction::new(AddToAction::NowPlaying, label(locale, Key::MenuNowPlaying))
                    .icon(MenuIcon::Playing),
            ),
            MenuEntry::Separator,
            MenuEntry::Action(
                MenuAction::new(AddToAction::NewPlaylist, label(locale, Key::MenuNewPlaylist))
                    .icon(MenuIcon::Add),
            ),
        ];
        entries.extend(playlists.iter().map(|name| {
            MenuEntry::Action(
                MenuAction::new(
                    AddToAction::Playlist(name.clone()),
                    truncate_text(name, MAX_LABEL_CHARS),
                )
                .icon(MenuIcon::Album),
            )
        }));
        Self { entries }
    }

    pub fn entries(&self) -> &[MenuEntry<AddToAction>] {
        &self.entries
    }

    pub fn action_count(&self) -> usize {
        actions(&self.entries).count()
    }

    /// Row limit for the panel, or `None` when every row fits
    pub fn visible_rows(&self) -> Option<usize> {
        (self.action_count() > MAX_VISIBLE_ROWS).then_some(MAX_VISIBLE_ROWS)
    }

    pub fn trigger(action: &AddToAction) -> AddToSignal {
        match action {
            AddToAction::NowPlaying => AddToSignal::AddToNowPlaying,
            AddToAction::NewPlaylist => AddToSignal::CreatePlaylist,
            AddToAction::Playlist(name) => AddToSignal::AddSongsToPlaylist(name.clone()),
        }
    }
}
