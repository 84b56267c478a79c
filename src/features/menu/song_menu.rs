//! Right-click menu of a song card

use std::time::Instant;

use super::{
    AddToAction, AddToMenu, DownloadMenu, DownloadQuality, MenuAction, MenuEntry, MenuStyle, label,
};
use crate::i18n::{Key, Locale};
use crate::ui::animation::MenuFade;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SongMenuAction {
    Play,
    OpenSubmenu(Submenu),
    AddTo(AddToAction),
    Download(DownloadQuality),
    Delete,
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submenu {
    AddTo,
    Download,
}

/// Open context menu anchored at the cursor, targeting one card
#[derive(Debug)]
pub struct SongMenu {
    pub index: usize,
    pub position: (f32, f32),
    pub style: MenuStyle,
    entries: Vec<MenuEntry<SongMenuAction>>,
    add_to: AddToMenu,
    open_submenu: Option<Submenu>,
    fade: MenuFade,
}

impl SongMenu {
    pub fn new(
        index: usize,
        position: (f32, f32),
        style: MenuStyle,
        playlists: &[String],
        locale: Locale,
    ) -> Self {
        let entries = vec![
            MenuEntry::Action(MenuAction::new(SongMenuAction::Play, label(locale, Key::MenuPlay))),
            MenuEntry::Action(MenuAction::new(
                SongMenuAction::OpenSubmenu(Submenu::AddTo),
                label(locale, Key::MenuAddTo),
            )),
            MenuEntry::Action(MenuAction::new(
                SongMenuAction::OpenSubmenu(Submenu::Download),
                label(locale, Key::MenuDownload),
            )),
            MenuEntry::Separator,
            MenuEntry::Action(MenuAction::new(
                SongMenuAction::Delete,
                label(locale, Key::MenuDelete),
            )),
            MenuEntry::Action(MenuAction::new(
                SongMenuAction::Select,
                label(locale, Key::MenuSelect),
            )),
        ];

        let mut fade = MenuFade::default();
        fade.show();

        Self {
            index,
            position,
            style,
            entries,
            add_to: AddToMenu::new(playlists, locale),
            open_submenu: None,
            fade,
        }
    }

    pub fn entries(&self) -> &[MenuEntry<SongMenuAction>] {
        &self.entries
    }

    /// Entries of the open submenu, already mapped to song menu actions
    pub fn submenu_entries(&self, locale: Locale) -> Option<(Submenu, Vec<MenuEntry<SongMenuAction>>)> {
        let submenu = self.open_submenu?;
        let entries = match submenu {
            Submenu::AddTo => map_entries(self.add_to.entries().to_vec(), SongMenuAction::AddTo),
            Submenu::Download => map_entries(DownloadMenu::entries(locale), SongMenuAction::Download),
        };
        Some((submenu, entries))
    }

    /// Row limit of the open submenu, if it is long enough to scroll
    pub fn submenu_visible_rows(&self) -> Option<usize> {
        match self.open_submenu? {
            Submenu::AddTo => self.add_to.visible_rows(),
            Submenu::Download => None,
        }
    }

    pub fn open_submenu(&mut self, submenu: Submenu) {
        self.open_submenu = Some(submenu);
    }

    pub fn opacity(&self) -> f32 {
        self.fade.opacity()
    }

    pub fn is_animating(&self) -> bool {
        self.fade.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.fade.tick(now);
    }
}

fn map_entries<A, F>(entries: Vec<MenuEntry<A>>, f: F) -> Vec<MenuEntry<SongMenuAction>>
where
    F: Fn(A) -> SongMenuAction,
{
    entries
        .into_iter()
        .map(|entry| match entry {
            MenuEntry::Action(a) => MenuEntry::Action(MenuAction {
                action: f(a.action),
                label: a.label,
                icon: a.icon,
                shortcut: a.shortcut,
            }),
            MenuEntry::Separator => MenuEntry::Separator,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::menu::actions;
    use crate::features::menu::add_to::MAX_VISIBLE_ROWS;

    fn menu() -> SongMenu {
        SongMenu::new(2, (10.0, 20.0), MenuStyle::Dwm, &["Mix".into()], Locale::default())
    }

    #[test]
    fn top_level_actions() {
        let menu = menu();
        let found: Vec<_> = actions(menu.entries()).map(|a| a.action.clone()).collect();
        assert_eq!(found.first(), Some(&SongMenuAction::Play));
        assert!(found.contains(&SongMenuAction::Delete));
        assert!(found.contains(&SongMenuAction::Select));
    }

    #[test]
    fn submenus_map_to_song_actions() {
        let mut menu = menu();
        assert!(menu.submenu_entries(Locale::default()).is_none());

        menu.open_submenu(Submenu::AddTo);
        let (kind, entries) = menu.submenu_entries(Locale::default()).unwrap();
        assert_eq!(kind, Submenu::AddTo);
        assert!(actions(&entries).any(|a| a.action
            == SongMenuAction::AddTo(AddToAction::Playlist("Mix".into()))));

        menu.open_submenu(Submenu::Download);
        let (_, entries) = menu.submenu_entries(Locale::default()).unwrap();
        assert_eq!(actions(&entries).count(), 3);
    }

    #[test]
    fn only_long_add_to_submenu_scrolls() {
        let playlists: Vec<String> = (0..20).map(|i| format!("List {i}")).collect();
        let mut menu = SongMenu::new(0, (0.0, 0.0), MenuStyle::Dwm, &playlists, Locale::default());
        assert_eq!(menu.submenu_visible_rows(), None);

        menu.open_submenu(Submenu::AddTo);
        assert_eq!(menu.submenu_visible_rows(), Some(MAX_VISIBLE_ROWS));

        menu.open_submenu(Submenu::Download);
        assert_eq!(menu.submenu_visible_rows(), None);

        let mut short = self::menu();
        short.open_submenu(Submenu::AddTo);
        assert_eq!(short.submenu_visible_rows(), None);
    }
}
