//! Right-click menu of a single-line text field
//!
//! Which actions appear depends on whether the clipboard holds text,
//! whether the field has text and whether some of it is selected. The menu
//! grows from a 1×1 box at the cursor to its full size. A field with text
//! also gets the Cancel row, and the panel then keeps an icon column for
//! rows without a glyph.

use std::time::{Duration, Instant};

use super::{MenuAction, MenuEntry, MenuIcon, label};
use crate::i18n::{Key, Locale};
use crate::ui::animation::Tween;
use crate::utils::measure_text;

const OPEN_DURATION: Duration = Duration::from_millis(300);
const ITEM_HEIGHT: f32 = 40.0;
const VERTICAL_PADDING: f32 = 10.0;
/// Icon, shortcut column and margins around the label
const CHROME_WIDTH: f32 = 130.0;
const LABEL_SIZE: f32 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Cut,
    Copy,
    Paste,
    Cancel,
    SelectAll,
}

impl EditAction {
    const ORDER: [EditAction; 5] = [
        EditAction::Cut,
        EditAction::Copy,
        EditAction::Paste,
        EditAction::Cancel,
        EditAction::SelectAll,
    ];

    pub fn shortcut(self) -> &'static str {
        match self {
            EditAction::Cut => "Ctrl+X",
            EditAction::Copy => "Ctrl+C",
            EditAction::Paste => "Ctrl+V",
            EditAction::Cancel => "Ctrl+Z",
            EditAction::SelectAll => "Ctrl+A",
        }
    }

    fn key(self) -> Key {
        match self {
            EditAction::Cut => Key::MenuCut,
            EditAction::Copy => Key::MenuCopy,
            EditAction::Paste => Key::MenuPaste,
            EditAction::Cancel => Key::MenuCancel,
            EditAction::SelectAll => Key::MenuSelectAll,
        }
    }

    fn icon(self) -> Option<MenuIcon> {
        match self {
            EditAction::Cut => Some(MenuIcon::Cut),
            EditAction::Copy => Some(MenuIcon::Copy),
            EditAction::Paste => Some(MenuIcon::Paste),
            EditAction::Cancel => Some(MenuIcon::Cancel),
            EditAction::SelectAll => None,
        }
    }
}

/// What the menu needs to know about its text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldSnapshot {
    pub has_text: bool,
    pub has_selection: bool,
}

/// Actions to show, or `None` when the menu should not open at all
pub fn available_actions(field: FieldSnapshot, clipboard_has_text: bool) -> Option<Vec<EditAction>> {
    use EditAction::*;

    let keep = |skip: &[EditAction]| -> Vec<EditAction> {
        EditAction::ORDER
            .into_iter()
            .filter(|a| !skip.contains(a))
            .collect()
    };

    match (clipboard_has_text, field.has_text, field.has_selection) {
        (true, true, true) => Some(keep(&[])),
        (true, true, false) => Some(keep(&[Cut, Copy])),
        (true, false, _) => Some(vec![Paste]),
        (false, true, true) => Some(keep(&[Paste])),
        (false, true, false) => Some(keep(&[Cut, Copy, Paste])),
        (false, false, _) => None,
    }
}

/// Position and size of the menu surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone)]
pub struct LineEditMenu {
    entries: Vec<MenuEntry<EditAction>>,
    has_cancel_action: bool,
    x: f32,
    y: f32,
    width: Tween,
    height: Tween,
}

impl LineEditMenu {
    /// Build and start opening the menu at `(x, y)`
    pub fn open(
        field: FieldSnapshot,
        clipboard_has_text: bool,
        (x, y): (f32, f32),
        locale: Locale,
        now: Instant,
    ) -> Option<Self> {
        let actions = available_actions(field, clipboard_has_text)?;

        let entries: Vec<MenuEntry<EditAction>> = actions
            .iter()
            .map(|&a| {
                let mut action = MenuAction::new(a, label(locale, a.key())).shortcut(a.shortcut());
                action.icon = a.icon();
                MenuEntry::Action(action)
            })
            .collect();

        let widest = entries
            .iter()
            .filter_map(|e| match e {
                MenuEntry::Action(a) => Some(measure_text(&a.label, LABEL_SIZE)),
                MenuEntry::Separator => None,
            })
            .fold(0.0_f32, f32::max);
        let target_width = CHROME_WIDTH + widest;
        let target_height = actions.len() as f32 * ITEM_HEIGHT + VERTICAL_PADDING;

        // Starting from zero size trips layout, so grow from 1×1
        let mut width = Tween::new(OPEN_DURATION);
        width.start(1.0, target_width, now);
        let mut height = Tween::new(OPEN_DURATION);
        height.start(1.0, target_height, now);

        Some(Self {
            entries,
            has_cancel_action: field.has_text,
            x,
            y,
            width,
            height,
        })
    }

    pub fn entries(&self) -> &[MenuEntry<EditAction>] {
        &self.entries
    }

    pub fn has_cancel_action(&self) -> bool {
        self.has_cancel_action
    }

    pub fn geometry(&self, now: Instant) -> MenuGeometry {
        MenuGeometry {
            x: self.x,
            y: self.y,
            width: self.width.value_at(now),
            height: self.height.value_at(now),
        }
    }

    /// Fully opened size
    pub fn target_geometry(&self) -> MenuGeometry {
        MenuGeometry {
            x: self.x,
            y: self.y,
            width: self.width.target(),
            height: self.height.target(),
        }
    }

    /// Move the anchor so the fully opened menu stays inside `(width, height)`
    pub fn fit_within(&mut self, (width, height): (f32, f32)) {
        let target = self.target_geometry();
        self.x = self.x.min(width - target.width).max(0.0);
        self.y = self.y.min(height - target.height).max(0.0);
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.width.is_running(now) || self.height.is_running(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EditAction::*;

    fn field(has_text: bool, has_selection: bool) -> FieldSnapshot {
        FieldSnapshot {
            has_text,
            has_selection,
        }
    }

    #[test]
    fn action_table() {
        assert_eq!(
            available_actions(field(true, true), true),
            Some(vec![Cut, Copy, Paste, Cancel, SelectAll])
        );
        assert_eq!(
            available_actions(field(true, false), true),
            Some(vec![Paste, Cancel, SelectAll])
        );
        assert_eq!(available_actions(field(false, false), true), Some(vec![Paste]));
        assert_eq!(
            available_actions(field(true, true), false),
            Some(vec![Cut, Copy, Cancel, SelectAll])
        );
        assert_eq!(
            available_actions(field(true, false), false),
            Some(vec![Cancel, SelectAll])
        );
        assert_eq!(available_actions(field(false, false), false), None);
    }

    #[test]
    fn grows_from_one_pixel_to_target() {
        let t0 = Instant::now();
        let menu = LineEditMenu::open(field(true, false), true, (50.0, 80.0), Locale::default(), t0)
            .unwrap();

        let start = menu.geometry(t0);
        assert_eq!((start.x, start.y), (50.0, 80.0));
        assert_eq!((start.width, start.height), (1.0, 1.0));
        assert!(menu.is_animating(t0));

        let target = menu.target_geometry();
        assert_eq!(target.height, 3.0 * 40.0 + 10.0);
        assert!(target.width > 130.0);

        let end = menu.geometry(t0 + OPEN_DURATION);
        assert_eq!(end, target);
        assert!(!menu.is_animating(t0 + OPEN_DURATION));
    }

    #[test]
    fn fit_within_keeps_menu_on_screen() {
        let now = Instant::now();
        let open = |at| {
            LineEditMenu::open(field(true, true), true, at, Locale::default(), now).unwrap()
        };

        let mut menu = open((900.0, 700.0));
        let target = menu.target_geometry();
        menu.fit_within((1000.0, 800.0));
        let fitted = menu.geometry(now);
        assert_eq!(fitted.x, 1000.0 - target.width);
        assert_eq!(fitted.y, 800.0 - target.height);

        let mut menu = open((40.0, 60.0));
        menu.fit_within((1000.0, 800.0));
        assert_eq!((menu.geometry(now).x, menu.geometry(now).y), (40.0, 60.0));

        // Larger than the window: pinned to the top-left corner
        let mut menu = open((40.0, 60.0));
        menu.fit_within((50.0, 50.0));
        assert_eq!((menu.geometry(now).x, menu.geometry(now).y), (0.0, 0.0));
    }

    #[test]
    fn cancel_flag_tracks_field_text() {
        let now = Instant::now();
        let with_text = LineEditMenu::open(field(true, false), false, (0.0, 0.0), Locale::default(), now)
            .unwrap();
        assert!(with_text.has_cancel_action());

        let empty = LineEditMenu::open(field(false, false), true, (0.0, 0.0), Locale::default(), now)
            .unwrap();
        assert!(!empty.has_cancel_action());
        assert!(LineEditMenu::open(field(false, false), false, (0.0, 0.0), Locale::default(), now).is_none());
    }
}
