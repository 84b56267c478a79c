//! Window, navigation and animation message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Navigate(page) => {
                self.ui.close_menus();
                self.ui.row_hover.clear();
                self.ui.page = *page;
                Some(Task::none())
            }

            Message::CursorMoved(position) => {
                self.ui.cursor = *position;
                Some(Task::none())
            }

            Message::WindowResized(size) => {
                self.ui.window = *size;
                self.resize_cards();
                Some(Task::none())
            }

            Message::AnimationTick => {
                let now = Instant::now();
                self.ui.row_hover.tick(now);
                if let Some(menu) = self.ui.song_menu.as_mut() {
                    menu.tick(now);
                }
                let signals = self.library.song_tab.tick(now);
                Some(self.apply_tab_signals(signals))
            }

            _ => None,
        }
    }
}
