//! Search bar component
//! Rounded filter input with an edit context menu on right click

use iced::widget::{Space, container, mouse_area, row, svg, text_input};
use iced::{Alignment, Color, Element, Padding};

use crate::app::{Message, SearchState};
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};

pub fn view<'a>(search: &'a SearchState, accent: Color, locale: Locale) -> Element<'a, Message> {
    let selected_all = search.selected_all && !search.query.is_empty();

    let input = text_input(locale.get(Key::SearchPlaceholder), &search.query)
        .on_input(Message::SearchChanged)
        .padding(Padding::new(10.0).left(0.0))
        .size(14)
        .style(move |t, _status| text_input::Style {
            background: iced::Background::Color(Color::TRANSPARENT),
            border: iced::Border::default(),
            icon: theme::text_muted(t),
            placeholder: theme::text_muted(t),
            // Whole value highlighted after "Select all"
            value: if selected_all { accent } else { theme::text_primary(t) },
            selection: accent,
        });

    let content = row![
        Space::new().width(14),
        svg(icons::handle(icons::MUSIC))
            .width(16)
            .height(16)
            .style(|t, _status| svg::Style {
                color: Some(theme::text_muted(t)),
            }),
        Space::new().width(10),
        input,
        Space::new().width(14),
    ]
    .align_y(Alignment::Center);

    mouse_area(
        container(content)
            .width(320)
            .style(|t| iced::widget::container::Style {
                background: Some(iced::Background::Color(theme::surface(t))),
                border: iced::Border {
                    radius: 20.0.into(),
                    width: 1.0,
                    color: theme::border_color(t),
                },
                ..Default::default()
            }),
    )
    .on_right_press(Message::SearchContextMenu)
    .into()
}
