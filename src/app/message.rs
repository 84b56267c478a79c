//! Application messages

use std::path::PathBuf;

use iced::{Color, Point, Size};

use crate::features::menu::{EditAction, SongMenuAction};
use crate::features::{CardEvent, PointerButton, SongRecord};

/// Top-level pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Songs,
    Settings,
}

/// Switch setting cards on the settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchId {
    DarkMode,
    AcrylicMenu,
    AeroMenu,
}

/// Push setting cards on the settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushId {
    RescanPlaylists,
    ResetSettings,
    ToggleLanguage,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Navigation ============
    Navigate(Page),

    // ============ Library ============
    /// Library snapshot finished loading
    LibraryLoaded(Result<Vec<SongRecord>, String>),
    /// Playlist names for the "Add to" submenu
    PlaylistsLoaded(Result<Vec<String>, String>),
    /// Remove these files from the library
    RemoveSongs(Vec<PathBuf>),

    // ============ Song cards ============
    /// Pointer or checkbox input on the card at this index
    Card(usize, CardEvent),
    /// Right button released over a card: open its context menu
    CardContextMenu(usize),
    /// Button released anywhere in the window
    PointerReleased(PointerButton),
    /// "Add" button on a card: open its menu at the "Add to" submenu
    OpenAddToMenu(usize),
    CheckAll,
    ExitSelectionMode,
    DeleteChecked,

    // ============ Menus ============
    SongMenuAction(SongMenuAction),
    CloseMenus,

    // ============ Search field ============
    SearchChanged(String),
    /// Right click on the search field; the clipboard is read first
    SearchContextMenu,
    /// Clipboard contents read before opening the edit menu
    SearchClipboardRead(Option<String>),
    LineEditAction(EditAction),
    /// Clipboard contents arrived for a paste
    PasteText(Option<String>),

    // ============ Settings ============
    SwitchToggled(SwitchId, bool),
    RangeChanged(i32),
    PushClicked(PushId),
    OpenHyperlink,
    OpenColorPicker,
    CancelColorPicker,
    SubmitColor(Color),

    // ============ Window ============
    CursorMoved(Point),
    WindowResized(Size),
    /// Frame tick while anything is animating
    AnimationTick,
}
