//! Context menu models
//!
//! Menus are plain lists of [`MenuEntry`] values. Triggering an entry
//! yields the entry's action, which the owner turns into a signal. The
//! surface look is chosen by [`MenuStyle`].

mod add_to;
mod download;
mod line_edit;
mod playlists;
mod song_menu;

pub use add_to::{AddToAction, AddToMenu, AddToSignal};
pub use download::{DownloadMenu, DownloadQuality};
pub use line_edit::{EditAction, FieldSnapshot, LineEditMenu};
pub use playlists::{DirPlaylistProvider, PlaylistProvider};
pub use song_menu::{SongMenu, SongMenuAction, Submenu};

use crate::features::config::{Config, Rgba, items};
use crate::i18n::{Key, Locale};

/// Default tint of acrylic menus (`e5e5e5` at 80% alpha)
pub const ACRYLIC_TINT: Rgba = Rgba {
    r: 0xe5,
    g: 0xe5,
    b: 0xe5,
    a: 0xcc,
};

/// Surface treatment of a popup menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStyle {
    /// Blurred translucent surface with a drop shadow
    Aero,
    /// Tinted translucent surface
    Acrylic(Rgba),
    /// Opaque surface with a compositor-style shadow
    Dwm,
}

impl MenuStyle {
    /// Acrylic wins over Aero; with neither enabled menus use the DWM surface
    pub fn from_config(config: &Config) -> Self {
        if config.get_bool(&items::ACRYLIC_MENU) {
            MenuStyle::Acrylic(ACRYLIC_TINT)
        } else if config.get_bool(&items::AERO_MENU) {
            MenuStyle::Aero
        } else {
            MenuStyle::Dwm
        }
    }
}

/// Small glyph shown left of an action label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Playing,
    Add,
    Album,
    Cut,
    Copy,
    Paste,
    Cancel,
}

/// One clickable row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuAction<A> {
    pub action: A,
    pub label: String,
    pub icon: Option<MenuIcon>,
    pub shortcut: Option<&'static str>,
}

impl<A> MenuAction<A> {
    pub fn new(action: A, label: impl Into<String>) -> Self {
        Self {
            action,
            label: label.into(),
            icon: None,
            shortcut: None,
        }
    }

    pub fn icon(mut self, icon: MenuIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn shortcut(mut self, shortcut: &'static str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry<A> {
    Action(MenuAction<A>),
    Separator,
}

/// Actions of a menu, skipping separators
pub fn actions<A>(entries: &[MenuEntry<A>]) -> impl Iterator<Item = &MenuAction<A>> {
    entries.iter().filter_map(|e| match e {
        MenuEntry::Action(a) => Some(a),
        MenuEntry::Separator => None,
    })
}

pub(crate) fn label(locale: Locale, key: Key) -> String {
    locale.get(key).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::config::ConfigValue;

    #[test]
    fn style_follows_menu_settings() {
        let mut config = Config::default();
        assert_eq!(MenuStyle::from_config(&config), MenuStyle::Dwm);

        config.set(&items::AERO_MENU, ConfigValue::Bool(true));
        assert_eq!(MenuStyle::from_config(&config), MenuStyle::Aero);

        config.set(&items::ACRYLIC_MENU, ConfigValue::Bool(true));
        assert_eq!(MenuStyle::from_config(&config), MenuStyle::Acrylic(ACRYLIC_TINT));
    }

    #[test]
    fn actions_skip_separators() {
        let entries = vec![
            MenuEntry::Action(MenuAction::new(1, "one")),
            MenuEntry::Separator,
            MenuEntry::Action(MenuAction::new(2, "two").shortcut("Ctrl+T")),
        ];
        let found: Vec<_> = actions(&entries).map(|a| a.action).collect();
        assert_eq!(found, vec![1, 2]);
    }
}
