//! Application state definitions

use iced::{Point, Size};

use crate::app::message::Page;
use crate::features::menu::{LineEditMenu, MenuStyle, SongMenu};
use crate::features::setting_cards::{
    ColorSettingCard, HyperlinkCard, PushSettingCard, RangeSettingCard, SettingCard, SettingIcon,
    SwitchSettingCard,
};
use crate::features::config::items;
use crate::features::{Config, SongTab};
use crate::i18n::{Key, Locale};
use crate::ui::animation::RowHover;

pub const HELP_URL: &str = "https://github.com/iced-rs/iced";

/// Main application state
pub struct App {
    /// Configuration and locale
    pub core: CoreState,
    /// Songs and playlists
    pub library: LibraryState,
    /// Navigation, popups, animations
    pub ui: UiState,
}

pub struct CoreState {
    pub config: Config,
    pub locale: Locale,
}

impl CoreState {
    pub fn new(config: Config, locale: Locale) -> Self {
        Self { config, locale }
    }

    pub fn accent(&self) -> iced::Color {
        self.config.get_color(&items::ACCENT_COLOR).into()
    }

    pub fn menu_style(&self) -> MenuStyle {
        MenuStyle::from_config(&self.config)
    }
}

#[derive(Default)]
pub struct LibraryState {
    pub song_tab: SongTab,
    /// Playlist names offered by the "Add to" submenu
    pub playlists: Vec<String>,
    pub loaded: bool,
}

/// State of the search field and its edit menu
#[derive(Default)]
pub struct SearchState {
    pub query: String,
    /// Value before the last edit, restored by the Cancel action
    pub previous: Option<String>,
    /// iced text inputs don't expose their selection, so "Select all" is tracked here
    pub selected_all: bool,
    pub menu: Option<LineEditMenu>,
}

impl SearchState {
    pub fn set_query(&mut self, query: String) {
        if query != self.query {
            self.previous = Some(std::mem::replace(&mut self.query, query));
        }
        self.selected_all = false;
    }
}

/// Cards on the settings page
pub struct SettingsCards {
    pub dark_mode: SwitchSettingCard,
    pub acrylic_menu: SwitchSettingCard,
    pub aero_menu: SwitchSettingCard,
    pub accent_color: ColorSettingCard,
    pub volume: RangeSettingCard,
    pub rescan: PushSettingCard,
    pub reset: PushSettingCard,
    pub language: PushSettingCard,
    pub help: HyperlinkCard,
}

impl SettingsCards {
    pub fn new(config: &Config, locale: Locale) -> Self {
        let card = |icon| SettingCard::new(icon, "", None);

        let mut cards = Self {
            dark_mode: SwitchSettingCard::new(
                card(SettingIcon::Brush),
                Some(items::DARK_MODE),
                config,
            ),
            acrylic_menu: SwitchSettingCard::new(
                card(SettingIcon::Transparent),
                Some(items::ACRYLIC_MENU),
                config,
            ),
            aero_menu: SwitchSettingCard::new(
                card(SettingIcon::BackgroundFill),
                Some(items::AERO_MENU),
                config,
            ),
            accent_color: ColorSettingCard::new(
                card(SettingIcon::Palette),
                items::ACCENT_COLOR,
                config,
            ),
            volume: RangeSettingCard::new(card(SettingIcon::Music), items::VOLUME, config),
            rescan: PushSettingCard::new("", card(SettingIcon::MusicFolder)),
            reset: PushSettingCard::primary("", card(SettingIcon::Update)),
            language: PushSettingCard::new("", card(SettingIcon::Web)),
            help: HyperlinkCard::new(HELP_URL, "", card(SettingIcon::Help)),
        };
        cards.relabel(locale);
        cards
    }

    /// Set every title, description and button text in `locale`
    pub fn relabel(&mut self, locale: Locale) {
        let label = |card: &mut SettingCard, title: Key, content: Key| {
            card.set_title(locale.get(title));
            card.set_content(locale.get(content));
        };

        label(&mut self.dark_mode.card, Key::SettingsDarkMode, Key::SettingsDarkModeDesc);
        label(
            &mut self.acrylic_menu.card,
            Key::SettingsAcrylicMenu,
            Key::SettingsAcrylicMenuDesc,
        );
        label(&mut self.aero_menu.card, Key::SettingsAeroMenu, Key::SettingsAeroMenuDesc);
        label(
            &mut self.accent_color.card,
            Key::SettingsAccentColor,
            Key::SettingsAccentColorDesc,
        );
        label(&mut self.volume.card, Key::SettingsVolume, Key::SettingsVolumeDesc);
        label(&mut self.rescan.card, Key::SettingsPlaylists, Key::SettingsPlaylistsDesc);
        label(&mut self.reset.card, Key::SettingsReset, Key::SettingsResetDesc);
        label(&mut self.language.card, Key::SettingsLanguage, Key::SettingsLanguageDesc);
        label(&mut self.help.card, Key::SettingsHelp, Key::SettingsHelpDesc);

        self.rescan.text = locale.get(Key::SettingsRescan).to_string();
        self.reset.text = locale.get(Key::SettingsResetButton).to_string();
        self.language.text = locale.get(Key::OtherLanguage).to_string();
        self.help.text = locale.get(Key::SettingsHelpLink).to_string();
    }

    /// Re-read every bound value, e.g. after a reset
    pub fn sync(&mut self, config: &Config) {
        self.dark_mode.sync(config);
        self.acrylic_menu.sync(config);
        self.aero_menu.sync(config);
        self.accent_color.sync(config);
        self.volume.sync(config);
    }
}

pub struct UiState {
    pub page: Page,
    pub song_menu: Option<SongMenu>,
    pub search: SearchState,
    pub settings: SettingsCards,
    /// Hover fade of the song rows, keyed by card index
    pub row_hover: RowHover<usize>,
    pub cursor: Point,
    pub window: Size,
}

impl UiState {
    pub fn new(config: &Config, locale: Locale) -> Self {
        Self {
            page: Page::default(),
            song_menu: None,
            search: SearchState::default(),
            settings: SettingsCards::new(config, locale),
            row_hover: RowHover::default(),
            cursor: Point::ORIGIN,
            window: crate::app::INITIAL_WINDOW_SIZE,
        }
    }

    pub fn close_menus(&mut self) {
        self.song_menu = None;
        self.search.menu = None;
    }
}

impl App {
    /// Whether any animation still needs frame ticks
    pub fn has_active_animations(&self, now: iced::time::Instant) -> bool {
        self.library.song_tab.list().is_animating()
            || self.ui.row_hover.is_animating()
            || self.ui.song_menu.as_ref().is_some_and(SongMenu::is_animating)
            || self
                .ui
                .search
                .menu
                .as_ref()
                .is_some_and(|m| m.is_animating(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn search_remembers_previous_value() {
        let mut search = SearchState::default();
        search.set_query("abc".into());
        search.set_query("abcd".into());
        assert_eq!(search.previous.as_deref(), Some("abc"));

        search.selected_all = true;
        search.set_query("abcd".into());
        assert!(!search.selected_all);
        assert_eq!(search.previous.as_deref(), Some("abc"));
    }

    #[test]
    fn settings_cards_follow_config() {
        let mut config = Config::default();
        let mut cards = SettingsCards::new(&config, Locale::default());
        assert!(cards.dark_mode.is_checked());
        assert_eq!(cards.volume.value(), 30);
        assert!(cards.reset.primary);

        cards.volume.on_value_changed(&mut config, 70);
        cards.aero_menu.set_checked(&mut config, true);
        config.reset();
        cards.sync(&config);
        assert_eq!(cards.volume.value(), 30);
        assert!(!cards.aero_menu.is_checked());
    }

    #[test]
    fn relabel_switches_every_card() {
        let config = Config::default();
        let mut cards = SettingsCards::new(&config, Locale::new(Language::English));
        assert_eq!(cards.dark_mode.card.title(), "Dark mode");
        assert_eq!(cards.language.text, "中文");

        let chinese = Locale::new(Language::Chinese);
        cards.relabel(chinese);
        assert_eq!(cards.dark_mode.card.title(), chinese.get(Key::SettingsDarkMode));
        assert_eq!(
            cards.aero_menu.card.content(),
            Some(chinese.get(Key::SettingsAeroMenuDesc))
        );
        assert_eq!(cards.reset.text, chinese.get(Key::SettingsResetButton));
        assert_eq!(cards.help.text, chinese.get(Key::SettingsHelpLink));
        assert_eq!(cards.language.text, "English");
    }
}
