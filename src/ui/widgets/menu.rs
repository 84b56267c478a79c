//! Popup menu panel
//!
//! Renders a list of [`MenuEntry`] rows on a styled surface. The caller
//! positions the panel and decides what a selected action does.

use iced::widget::{Container, Space, button, column, container, row, svg, text};
use iced::{Alignment, Background, Element, Fill, Padding};

use crate::features::menu::{MenuEntry, MenuStyle};
use crate::ui::{icons, theme};

pub const ITEM_HEIGHT: f32 = 40.0;
pub const MIN_WIDTH: f32 = 170.0;
const ICON_SIZE: f32 = 16.0;

/// Build a menu panel; `has_submenu` marks rows that open another menu
///
/// With `icon_column` set, rows without an icon keep an empty slot so every
/// label lines up.
pub fn menu_panel<'a, A, M, F, G>(
    entries: Vec<MenuEntry<A>>,
    style: MenuStyle,
    opacity: f32,
    icon_column: bool,
    on_select: F,
    has_submenu: G,
) -> Container<'a, M>
where
    A: 'a,
    M: Clone + 'a,
    F: Fn(A) -> M,
    G: Fn(&A) -> bool,
{
    let rows: Vec<Element<'a, M>> = entries
        .into_iter()
        .map(|entry| match entry {
            MenuEntry::Separator => container(
                container(Space::new().width(Fill).height(1)).style(|t| container::Style {
                    background: Some(Background::Color(theme::border_color(t))),
                    ..Default::default()
                }),
            )
            .padding([4, 12])
            .into(),
            MenuEntry::Action(action) => {
                let icon: Option<Element<'a, M>> = match action.icon {
                    Some(icon) => Some(
                        svg(icons::handle(icons::menu_icon(icon)))
                            .width(ICON_SIZE)
                            .height(ICON_SIZE)
                            .style(|t, _status| svg::Style {
                                color: Some(theme::text_primary(t)),
                            })
                            .into(),
                    ),
                    None if icon_column => Some(Space::new().width(ICON_SIZE).into()),
                    None => None,
                };

                let trailing: Element<'a, M> = if has_submenu(&action.action) {
                    svg(icons::handle(icons::CHEVRON_RIGHT))
                        .width(12)
                        .height(12)
                        .style(|t, _status| svg::Style {
                            color: Some(theme::text_secondary(t)),
                        })
                        .into()
                } else if let Some(shortcut) = action.shortcut {
                    text(shortcut)
                        .size(12)
                        .style(|t| text::Style {
                            color: Some(theme::text_muted(t)),
                        })
                        .into()
                } else {
                    Space::new().width(0).into()
                };

                let mut content = row![].spacing(12).align_y(Alignment::Center);
                if let Some(icon) = icon {
                    content = content.push(icon);
                }
                let content = content
                    .push(text(action.label).size(14))
                    .push(Space::new().width(Fill))
                    .push(trailing);

                button(content)
                    .width(Fill)
                    .height(ITEM_HEIGHT)
                    .padding(Padding::new(0.0).left(12.0).right(12.0))
                    .style(theme::menu_item)
                    .on_press(on_select(action.action))
                    .into()
            }
        })
        .collect();

    container(column(rows))
        .padding(5)
        .clip(true)
        .style(move |t| theme::menu_surface(style, opacity, t))
}
