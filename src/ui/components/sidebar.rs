//! Sidebar navigation

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::app::{Message, Page};
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};

pub const WIDTH: f32 = 220.0;

pub fn view(active: Page, accent: Color, locale: Locale) -> Element<'static, Message> {
    let title = text(locale.get(Key::AppName)).size(20).style(|t| text::Style {
        color: Some(theme::text_primary(t)),
    });

    column![
        container(title).padding(Padding::new(24.0).bottom(20.0)),
        nav_item(Page::Songs, icons::MUSIC, Key::NavSongs, active, accent, locale),
        nav_item(Page::Settings, icons::SETTINGS, Key::NavSettings, active, accent, locale),
        Space::new().height(Fill),
    ]
    .spacing(4)
    .padding(Padding::new(0.0).left(8.0).right(8.0))
    .width(WIDTH)
    .into()
}

fn nav_item(
    page: Page,
    icon: &'static str,
    key: Key,
    active: Page,
    accent: Color,
    locale: Locale,
) -> Element<'static, Message> {
    let is_active = page == active;
    button(
        row![
            svg(icons::handle(icon))
                .width(18)
                .height(18)
                .style(move |t, _status| svg::Style {
                    color: Some(if is_active { accent } else { theme::text_secondary(t) }),
                }),
            text(locale.get(key)).size(14),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .width(Fill)
    .padding([10, 16])
    .style(theme::nav_button(is_active, accent))
    .on_press(Message::Navigate(page))
    .into()
}
