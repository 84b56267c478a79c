//! Song list component: selection bar plus one card row per song

use std::time::Instant;

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Color, Element, Fill, Padding};

use super::{sidebar, song_card};
use crate::app::Message;
use crate::features::SongTab;
use crate::features::song_card::SongCard;
use crate::i18n::{Key, Locale};
use crate::ui::animation::RowHover;
use crate::ui::theme;

/// Horizontal padding of the songs page
pub const PAGE_PADDING: f32 = 30.0;
const SCROLLBAR_WIDTH: f32 = 10.0;

/// Card width for a given window width
pub fn card_width(window_width: f32) -> f32 {
    (window_width - sidebar::WIDTH - 2.0 * PAGE_PADDING - SCROLLBAR_WIDTH).max(0.0)
}

/// Whether a card passes the search filter (case-insensitive, name or artist)
pub fn matches_query(card: &SongCard, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    let song = card.song();
    song.name.to_lowercase().contains(&query) || song.artist.to_lowercase().contains(&query)
}

pub fn view<'a>(
    tab: &'a SongTab,
    row_hover: &'a RowHover<usize>,
    accent: Color,
    query: &str,
    locale: Locale,
    now: Instant,
) -> Element<'a, Message> {
    let list = tab.list();
    if list.is_empty() {
        return container(text(locale.get(Key::EmptyLibrary)).size(14).style(|t| {
            text::Style {
                color: Some(theme::text_secondary(t)),
            }
        }))
        .width(Fill)
        .height(200)
        .center_x(Fill)
        .center_y(200)
        .into();
    }

    let rows: Vec<Element<'a, Message>> = list
        .cards()
        .iter()
        .filter(|card| matches_query(card, query))
        .map(|card| song_card::view(card, row_hover.progress(&card.index()), accent, now))
        .collect();

    scrollable(
        column(rows)
            .spacing(0)
            .padding(Padding::new(0.0).right(SCROLLBAR_WIDTH)),
    )
    .height(Fill)
    .into()
}

/// Bar shown while selection mode is open
pub fn selection_bar(tab: &SongTab, accent: Color, locale: Locale) -> Element<'static, Message> {
    let list = tab.list();
    if !list.selection_mode() {
        return Space::new().height(0).into();
    }

    let count = text(format!(
        "{} {}",
        list.checked_count(),
        locale.get(Key::SelectedCount)
    ))
    .size(14);

    let all_checked = list.checked_count() == list.len();
    let select_all = button(text(locale.get(Key::SelectAll)).size(13))
        .padding([6, 16])
        .style(theme::secondary_button)
        .on_press_maybe((!all_checked).then_some(Message::CheckAll));

    container(
        row![
            count,
            Space::new().width(Fill),
            select_all,
            button(text(locale.get(Key::DeleteSelected)).size(13))
                .padding([6, 16])
                .style(theme::primary_button(accent))
                .on_press(Message::DeleteChecked),
            button(text(locale.get(Key::CancelSelection)).size(13))
                .padding([6, 16])
                .style(theme::secondary_button)
                .on_press(Message::ExitSelectionMode),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding([10, 16])
    .width(Fill)
    .style(theme::setting_card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::SongRecord;
    use std::path::PathBuf;

    fn card(name: &str, artist: &str) -> SongCard {
        SongCard::new(
            0,
            SongRecord {
                file: PathBuf::from("/m/x.mp3"),
                name: name.to_string(),
                track_number: 1,
                artist: artist.to_string(),
                duration: 10,
            },
        )
    }

    #[test]
    fn filter_matches_name_or_artist() {
        let c = card("Blue Monday", "New Order");
        assert!(matches_query(&c, ""));
        assert!(matches_query(&c, "  blue "));
        assert!(matches_query(&c, "ORDER"));
        assert!(!matches_query(&c, "joy"));
    }

    #[test]
    fn card_width_leaves_room_for_chrome() {
        assert_eq!(card_width(0.0), 0.0);
        let w = card_width(1400.0);
        assert!(w < 1400.0 - sidebar::WIDTH);
    }
}
