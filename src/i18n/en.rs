//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(Key::AppName, "Songcard");

    // Navigation
    m.insert(Key::NavSongs, "Songs");
    m.insert(Key::NavSettings, "Settings");

    // Songs page
    m.insert(Key::SongsTitle, "My music");
    m.insert(Key::SearchPlaceholder, "Filter songs");
    m.insert(Key::EmptyLibrary, "No songs in the library yet");
    m.insert(Key::SelectedCount, "selected");
    m.insert(Key::SelectAll, "Select all");
    m.insert(Key::CancelSelection, "Cancel");
    m.insert(Key::DeleteSelected, "Delete");

    // Song card context menu
    m.insert(Key::MenuPlay, "Play");
    m.insert(Key::MenuAddTo, "Add to");
    m.insert(Key::MenuDelete, "Delete");
    m.insert(Key::MenuSelect, "Select");
    m.insert(Key::MenuDownload, "Download");

    // Add-to menu
    m.insert(Key::MenuNowPlaying, "Now playing");
    m.insert(Key::MenuNewPlaylist, "New playlist");

    // Download menu
    m.insert(Key::QualityStandard, "Standard");
    m.insert(Key::QualityHigh, "HQ");
    m.insert(Key::QualitySuper, "SQ");

    // Line edit menu
    m.insert(Key::MenuCut, "Cut");
    m.insert(Key::MenuCopy, "Copy");
    m.insert(Key::MenuPaste, "Paste");
    m.insert(Key::MenuCancel, "Cancel");
    m.insert(Key::MenuSelectAll, "Select all");

    // Switch card
    m.insert(Key::SwitchOn, "On");
    m.insert(Key::SwitchOff, "Off");

    // Settings page
    m.insert(Key::SettingsTitle, "Settings");
    m.insert(Key::SettingsDarkMode, "Dark mode");
    m.insert(Key::SettingsDarkModeDesc, "Use the dark color scheme");
    m.insert(Key::SettingsAccentColor, "Accent color");
    m.insert(
        Key::SettingsAccentColorDesc,
        "Color of selected songs and primary buttons",
    );
    m.insert(Key::SettingsAcrylicMenu, "Acrylic menus");
    m.insert(
        Key::SettingsAcrylicMenuDesc,
        "Draw context menus with a translucent tinted surface",
    );
    m.insert(Key::SettingsAeroMenu, "Aero menus");
    m.insert(
        Key::SettingsAeroMenuDesc,
        "Use a translucent surface when acrylic menus are off",
    );
    m.insert(Key::SettingsVolume, "Default volume");
    m.insert(Key::SettingsVolumeDesc, "Volume used when the player starts");
    m.insert(Key::SettingsPlaylists, "Playlists");
    m.insert(
        Key::SettingsPlaylistsDesc,
        "Reload playlist names shown in the \"Add to\" menu",
    );
    m.insert(Key::SettingsRescan, "Rescan");
    m.insert(Key::SettingsReset, "Reset settings");
    m.insert(
        Key::SettingsResetDesc,
        "Restore every option on this page to its default",
    );
    m.insert(Key::SettingsResetButton, "Reset");
    m.insert(Key::SettingsHelp, "Help");
    m.insert(Key::SettingsHelpDesc, "Read about the iced toolkit");
    m.insert(Key::SettingsHelpLink, "Open website");
    m.insert(Key::SettingsLanguage, "Language");
    m.insert(Key::SettingsLanguageDesc, "Switch the interface language");
    m.insert(Key::OtherLanguage, "中文");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
