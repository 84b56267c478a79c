//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(Key::AppName, "Songcard");

    // Navigation
    m.insert(Key::NavSongs, "歌曲");
    m.insert(Key::NavSettings, "设置");

    // Songs page
    m.insert(Key::SongsTitle, "我的音乐");
    m.insert(Key::SearchPlaceholder, "筛选歌曲");
    m.insert(Key::EmptyLibrary, "曲库中还没有歌曲");
    m.insert(Key::SelectedCount, "已选择");
    m.insert(Key::SelectAll, "全选");
    m.insert(Key::CancelSelection, "取消");
    m.insert(Key::DeleteSelected, "删除");

    // Song card context menu
    m.insert(Key::MenuPlay, "播放");
    m.insert(Key::MenuAddTo, "添加到");
    m.insert(Key::MenuDelete, "删除");
    m.insert(Key::MenuSelect, "选择");
    m.insert(Key::MenuDownload, "下载");

    // Add-to menu
    m.insert(Key::MenuNowPlaying, "正在播放");
    m.insert(Key::MenuNewPlaylist, "新的播放列表");

    // Download menu
    m.insert(Key::QualityStandard, "标准");
    m.insert(Key::QualityHigh, "高品");
    m.insert(Key::QualitySuper, "超品");

    // Line edit menu
    m.insert(Key::MenuCut, "剪切");
    m.insert(Key::MenuCopy, "复制");
    m.insert(Key::MenuPaste, "粘贴");
    m.insert(Key::MenuCancel, "取消操作");
    m.insert(Key::MenuSelectAll, "全选");

    // Switch card
    m.insert(Key::SwitchOn, "开");
    m.insert(Key::SwitchOff, "关");

    // Settings page
    m.insert(Key::SettingsTitle, "设置");
    m.insert(Key::SettingsDarkMode, "深色模式");
    m.insert(Key::SettingsDarkModeDesc, "使用深色配色方案");
    m.insert(Key::SettingsAccentColor, "主题色");
    m.insert(Key::SettingsAccentColorDesc, "选中歌曲与主要按钮的颜色");
    m.insert(Key::SettingsAcrylicMenu, "亚克力菜单");
    m.insert(Key::SettingsAcrylicMenuDesc, "右键菜单使用半透明着色背景");
    m.insert(Key::SettingsAeroMenu, "Aero 菜单");
    m.insert(Key::SettingsAeroMenuDesc, "关闭亚克力菜单时使用半透明背景");
    m.insert(Key::SettingsVolume, "默认音量");
    m.insert(Key::SettingsVolumeDesc, "播放器启动时使用的音量");
    m.insert(Key::SettingsPlaylists, "播放列表");
    m.insert(Key::SettingsPlaylistsDesc, "重新读取“添加到”菜单中的播放列表");
    m.insert(Key::SettingsRescan, "重新扫描");
    m.insert(Key::SettingsReset, "重置设置");
    m.insert(Key::SettingsResetDesc, "将本页所有选项恢复为默认值");
    m.insert(Key::SettingsResetButton, "重置");
    m.insert(Key::SettingsHelp, "帮助");
    m.insert(Key::SettingsHelpDesc, "了解 iced 工具包");
    m.insert(Key::SettingsHelpLink, "打开网站");
    m.insert(Key::SettingsLanguage, "语言");
    m.insert(Key::SettingsLanguageDesc, "切换界面语言");
    m.insert(Key::OtherLanguage, "English");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
