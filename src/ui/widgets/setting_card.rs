//! Setting card frame: icon, title, optional description and a control
//!
//! The control (switch, slider, button...) is built by the caller, so the
//! frame carries no messages of its own.

use iced::widget::{Space, column, container, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::features::setting_cards::SettingCard;
use crate::ui::{icons, theme};

const ICON_SIZE: f32 = 16.0;

pub fn setting_card<'a, M: 'a>(card: &'a SettingCard, control: Element<'a, M>) -> Element<'a, M> {
    let icon = svg(icons::handle(icons::setting_icon(card.icon)))
        .width(ICON_SIZE)
        .height(ICON_SIZE)
        .style(|t, _status| svg::Style {
            color: Some(theme::text_primary(t)),
        });

    let title = text(card.title()).size(14).style(|t| text::Style {
        color: Some(theme::text_primary(t)),
    });

    let labels: Element<'a, M> = match card.content() {
        Some(content) => column![
            title,
            text(content).size(12).style(|t| text::Style {
                color: Some(theme::text_secondary(t)),
            }),
        ]
        .spacing(4)
        .into(),
        None => title.into(),
    };

    container(
        row![
            Space::new().width(4),
            icon,
            Space::new().width(16),
            labels,
            Space::new().width(Fill),
            control,
        ]
        .align_y(Alignment::Center),
    )
    .width(Fill)
    .height(card.height())
    .padding(Padding::new(0.0).left(16.0).right(16.0))
    .align_y(Alignment::Center)
    .style(theme::setting_card)
    .into()
}
