//! Song card row component
//!
//! Renders one [`SongCard`] from its state tags. Every pointer event the
//! row receives is forwarded as `Message::Card`; nothing is decided here.

use std::time::Instant;

use iced::widget::text::Wrapping;
use iced::widget::{Space, button, checkbox, container, mouse_area, row, svg, text};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::app::Message;
use crate::features::song_card::{CARD_HEIGHT, LABEL_TEXT_SIZE, SongCard};
use crate::features::{CardEvent, PointerButton};
use crate::ui::{icons, theme};
use crate::utils::format_duration;

/// Space reserved left of the name column for the checkbox
pub const CHECKBOX_SLOT: f32 = 46.0;
const NAME_TEXT_SIZE: f32 = 14.0;
const BUTTON_SIZE: f32 = 32.0;
const DURATION_SLOT: f32 = 44.0;

pub fn view<'a>(
    card: &'a SongCard,
    hover: f32,
    accent: Color,
    now: Instant,
) -> Element<'a, Message> {
    let index = card.index();
    let song = card.song();
    let layout = card.layout();
    let state = card.state();
    let label = card.label_state();
    let [name_shift, artist_shift, duration_shift] = card.shift_offsets(now);

    let checkbox_slot: Element<'a, Message> = if card.checkbox_visible() {
        container(
            checkbox(card.is_checked())
                .on_toggle(move |_| Message::Card(index, CardEvent::CheckboxToggled))
                .size(18),
        )
        .width(CHECKBOX_SLOT)
        .center_x(CHECKBOX_SLOT)
        .into()
    } else {
        Space::new().width(CHECKBOX_SLOT).into()
    };

    let name = text(&song.name)
        .size(NAME_TEXT_SIZE)
        .wrapping(Wrapping::None)
        .style(move |t| text::Style {
            color: Some(theme::card_label(label, accent, true, t)),
        });

    let name_column: Element<'a, Message> = if card.buttons_visible() {
        row![
            container(name).width(Fill).clip(true),
            card_button(icons::PLAY, Message::Card(index, CardEvent::PlayButton)),
            card_button(icons::ADD, Message::OpenAddToMenu(index)),
        ]
        .spacing(4)
        .align_y(Alignment::Center)
        .into()
    } else {
        container(name).width(Fill).clip(true).into()
    };

    let artist = text(&song.artist)
        .size(LABEL_TEXT_SIZE)
        .wrapping(Wrapping::None)
        .style(move |t| text::Style {
            color: Some(theme::card_label(label, accent, false, t)),
        });

    let duration = text(format_duration(song.duration))
        .size(LABEL_TEXT_SIZE)
        .style(move |t| text::Style {
            color: Some(theme::card_label(label, accent, false, t)),
        });

    // Spacers place each column at its layout x plus the current shift
    let artist_gap = layout.artist_x() - layout.name_width() + artist_shift - name_shift;
    let artist_end = layout.artist_x() + artist_shift + layout.artist_width();
    let duration_gap = layout.duration_x() + duration_shift - CHECKBOX_SLOT - artist_end;

    let content = row![
        checkbox_slot,
        Space::new().width(name_shift.max(0.0)),
        container(name_column).width(layout.name_width()),
        Space::new().width(artist_gap.max(0.0)),
        container(artist).width(layout.artist_width()).clip(true),
        Space::new().width(duration_gap.max(0.0)),
        container(duration).width(DURATION_SLOT),
        Space::new().width(Fill),
    ]
    .align_y(Alignment::Center)
    .height(CARD_HEIGHT);

    let body = container(content)
        .width(Fill)
        .padding(Padding::new(0.0).right(8.0))
        .style(move |t| theme::song_card(state, accent, hover, t));

    mouse_area(body)
        .on_enter(Message::Card(index, CardEvent::Enter))
        .on_exit(Message::Card(index, CardEvent::Leave))
        .on_press(Message::Card(index, CardEvent::Press(PointerButton::Primary)))
        .on_release(Message::Card(index, CardEvent::Release(PointerButton::Primary)))
        .on_double_click(Message::Card(index, CardEvent::DoubleClick))
        .on_right_press(Message::Card(index, CardEvent::Press(PointerButton::Secondary)))
        .on_right_release(Message::CardContextMenu(index))
        .on_middle_press(Message::Card(index, CardEvent::Press(PointerButton::Middle)))
        .on_middle_release(Message::Card(index, CardEvent::Release(PointerButton::Middle)))
        .into()
}

fn card_button(icon: &'static str, message: Message) -> Element<'static, Message> {
    button(
        svg(icons::handle(icon))
            .width(16)
            .height(16)
            .style(|t, _status| svg::Style {
                color: Some(theme::text_primary(t)),
            }),
    )
    .width(BUTTON_SIZE)
    .height(BUTTON_SIZE)
    .padding(8)
    .style(theme::icon_button)
    .on_press(message)
    .into()
}
