//! Context menu overlay
//!
//! Draws the open song menu (with its submenu) or the search field's edit
//! menu at the cursor position recorded when it opened. A transparent
//! backdrop closes the menu on any click outside it.

use std::time::Instant;

use iced::widget::{Space, mouse_area, row, scrollable, stack};
use iced::{Element, Fill, Padding};

use crate::app::{Message, UiState};
use crate::features::menu::{MenuStyle, SongMenuAction};
use crate::i18n::Locale;
use crate::ui::widgets::{MENU_ITEM_HEIGHT, MENU_MIN_WIDTH, menu_panel};

/// Vertical padding around a panel's rows
const PANEL_PADDING: f32 = 10.0;

/// Overlay for whichever menu is open, if any
pub fn view<'a>(ui: &'a UiState, locale: Locale, now: Instant) -> Option<Element<'a, Message>> {
    if let Some(menu) = &ui.song_menu {
        let opens_submenu = |a: &SongMenuAction| matches!(a, SongMenuAction::OpenSubmenu(_));

        let main = menu_panel(
            menu.entries().to_vec(),
            menu.style,
            menu.opacity(),
            true,
            Message::SongMenuAction,
            opens_submenu,
        )
        .width(MENU_MIN_WIDTH);

        let panels: Element<'a, Message> = match menu.submenu_entries(locale) {
            Some((_, entries)) => {
                let panel = menu_panel(
                    entries,
                    menu.style,
                    menu.opacity(),
                    true,
                    Message::SongMenuAction,
                    opens_submenu,
                )
                .width(MENU_MIN_WIDTH);

                let submenu: Element<'a, Message> = match menu.submenu_visible_rows() {
                    Some(rows) => scrollable(panel)
                        .height(rows as f32 * MENU_ITEM_HEIGHT + PANEL_PADDING)
                        .into(),
                    None => panel.into(),
                };
                row![main, submenu].spacing(4).into()
            }
            None => main.into(),
        };

        return Some(overlay(panels, menu.position));
    }

    if let Some(menu) = &ui.search.menu {
        let geometry = menu.geometry(now);
        let panel = menu_panel(
            menu.entries().to_vec(),
            MenuStyle::Dwm,
            1.0,
            menu.has_cancel_action(),
            Message::LineEditAction,
            |_| false,
        )
        .width(geometry.width)
        .height(geometry.height);

        return Some(overlay(panel.into(), (geometry.x, geometry.y)));
    }

    None
}

fn overlay<'a>(panel: Element<'a, Message>, (x, y): (f32, f32)) -> Element<'a, Message> {
    let backdrop = mouse_area(Space::new().width(Fill).height(Fill))
        .on_press(Message::CloseMenus)
        .on_right_press(Message::CloseMenus);

    let positioned = iced::widget::container(panel).padding(Padding {
        top: y.max(0.0),
        left: x.max(0.0),
        right: 0.0,
        bottom: 0.0,
    });

    stack![backdrop, positioned].into()
}
