//! Internationalization support
//!
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Guess from a `LANG`-style locale string such as `zh_CN.UTF-8`
    pub fn from_locale_string(s: &str) -> Self {
        if s.to_ascii_lowercase().starts_with("zh") {
            Language::Chinese
        } else {
            Language::English
        }
    }

    /// The language the settings toggle switches to
    pub fn other(self) -> Self {
        match self {
            Language::English => Language::Chinese,
            Language::Chinese => Language::English,
        }
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    AppName,

    // Navigation
    NavSongs,
    NavSettings,

    // Songs page
    SongsTitle,
    SearchPlaceholder,
    EmptyLibrary,
    SelectedCount,
    SelectAll,
    CancelSelection,
    DeleteSelected,

    // Song card context menu
    MenuPlay,
    MenuAddTo,
    MenuDelete,
    MenuSelect,
    MenuDownload,

    // Add-to menu
    MenuNowPlaying,
    MenuNewPlaylist,

    // Download menu
    QualityStandard,
    QualityHigh,
    QualitySuper,

    // Line edit menu
    MenuCut,
    MenuCopy,
    MenuPaste,
    MenuCancel,
    MenuSelectAll,

    // Switch card
    SwitchOn,
    SwitchOff,

    // Settings page
    SettingsTitle,
    SettingsDarkMode,
    SettingsDarkModeDesc,
    SettingsAccentColor,
    SettingsAccentColorDesc,
    SettingsAcrylicMenu,
    SettingsAcrylicMenuDesc,
    SettingsAeroMenu,
    SettingsAeroMenuDesc,
    SettingsVolume,
    SettingsVolumeDesc,
    SettingsPlaylists,
    SettingsPlaylistsDesc,
    SettingsRescan,
    SettingsReset,
    SettingsResetDesc,
    SettingsResetButton,
    SettingsHelp,
    SettingsHelpDesc,
    SettingsHelpLink,
    SettingsLanguage,
    SettingsLanguageDesc,
    OtherLanguage,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Pick the language from the `LANG` environment variable
    pub fn from_env() -> Self {
        let lang = std::env::var("LANG").unwrap_or_default();
        Self::new(Language::from_locale_string(&lang))
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[Key] = &[
        Key::AppName,
        Key::NavSongs,
        Key::NavSettings,
        Key::SongsTitle,
        Key::SearchPlaceholder,
        Key::EmptyLibrary,
        Key::SelectedCount,
        Key::SelectAll,
        Key::CancelSelection,
        Key::DeleteSelected,
        Key::MenuPlay,
        Key::MenuAddTo,
        Key::MenuDelete,
        Key::MenuSelect,
        Key::MenuDownload,
        Key::MenuNowPlaying,
        Key::MenuNewPlaylist,
        Key::QualityStandard,
        Key::QualityHigh,
        Key::QualitySuper,
        Key::MenuCut,
        Key::MenuCopy,
        Key::MenuPaste,
        Key::MenuCancel,
        Key::MenuSelectAll,
        Key::SwitchOn,
        Key::SwitchOff,
        Key::SettingsTitle,
        Key::SettingsDarkMode,
        Key::SettingsDarkModeDesc,
        Key::SettingsAccentColor,
        Key::SettingsAccentColorDesc,
        Key::SettingsAcrylicMenu,
        Key::SettingsAcrylicMenuDesc,
        Key::SettingsVolume,
        Key::SettingsVolumeDesc,
        Key::SettingsPlaylists,
        Key::SettingsPlaylistsDesc,
        Key::SettingsRescan,
        Key::SettingsReset,
        Key::SettingsResetDesc,
        Key::SettingsResetButton,
        Key::SettingsHelp,
        Key::SettingsHelpDesc,
        Key::SettingsHelpLink,
    ];

    #[test]
    fn every_key_is_translated() {
        for lang in [Language::English, Language::Chinese] {
            for key in ALL_KEYS {
                assert_ne!(t(lang, *key), "???", "{lang:?} is missing {key:?}");
            }
        }
    }

    #[test]
    fn language_from_locale_string() {
        assert_eq!(Language::from_locale_string("zh_CN.UTF-8"), Language::Chinese);
        assert_eq!(Language::from_locale_string("en_US.UTF-8"), Language::English);
        assert_eq!(Language::from_locale_string(""), Language::English);
    }

    #[test]
    fn other_language_round_trips() {
        assert_eq!(Language::English.other(), Language::Chinese);
        assert_eq!(Language::English.other().other(), Language::English);
        assert_eq!(t(Language::English, Key::OtherLanguage), "中文");
        assert_eq!(t(Language::Chinese, Key::OtherLanguage), "English");
    }
}
