//! Songs page: header with search field, selection bar and the song list

use std::time::Instant;

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::App;
use crate::app::Message;
use crate::i18n::Key;
use crate::ui::components::{search_bar, song_list};
use crate::ui::theme;

pub fn view(app: &App, now: Instant) -> Element<'_, Message> {
    let locale = app.core.locale;
    let accent = app.core.accent();
    let tab = &app.library.song_tab;

    let header = row![
        text(locale.get(Key::SongsTitle)).size(32).style(|t| text::Style {
            color: Some(theme::text_primary(t)),
        }),
        Space::new().width(12),
        text(format!("{}", tab.list().len())).size(14).style(|t| text::Style {
            color: Some(theme::text_muted(t)),
        }),
        Space::new().width(Fill),
        search_bar::view(&app.ui.search, accent, locale),
    ]
    .align_y(Alignment::Center);

    let list: Element<'_, Message> = if app.library.loaded {
        song_list::view(
            tab,
            &app.ui.row_hover,
            accent,
            &app.ui.search.query,
            locale,
            now,
        )
    } else {
        Space::new().height(Fill).into()
    };

    container(
        column![
            header,
            song_list::selection_bar(tab, accent, locale),
            list,
        ]
        .spacing(16),
    )
    .width(Fill)
    .height(Fill)
    .padding(
        Padding::new(song_list::PAGE_PADDING)
            .top(40.0)
            .bottom(0.0),
    )
    .into()
}
