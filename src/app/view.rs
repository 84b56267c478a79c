//! Application view rendering

use iced::time::Instant;
use iced::widget::{container, row, stack};
use iced::{Element, Fill};

use super::App;
use super::message::{Message, Page};
use crate::ui::{components, pages, theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();
        let locale = self.core.locale;

        let page: Element<'_, Message> = match self.ui.page {
            Page::Songs => pages::songs::view(self, now),
            Page::Settings => pages::settings::view(self),
        };

        let sidebar = container(components::sidebar::view(
            self.ui.page,
            self.core.accent(),
            locale,
        ))
        .height(Fill)
        .style(theme::sidebar);

        let base = container(row![sidebar, page])
            .width(Fill)
            .height(Fill)
            .style(theme::main_content);

        match components::context_menu::view(&self.ui, locale, now) {
            Some(menu) => stack![base, menu].into(),
            None => base.into(),
        }
    }
}
