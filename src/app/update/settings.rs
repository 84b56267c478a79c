//! Settings page message handlers

use iced::Task;

use crate::app::message::{Message, PushId, SwitchId};
use crate::app::state::App;
use crate::i18n::Locale;

impl App {
    /// Handle setting card messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        let config = &mut self.core.config;
        let cards = &mut self.ui.settings;

        match message {
            Message::SwitchToggled(id, checked) => {
                let card = match id {
                    SwitchId::DarkMode => &mut cards.dark_mode,
                    SwitchId::AcrylicMenu => &mut cards.acrylic_menu,
                    SwitchId::AeroMenu => &mut cards.aero_menu,
                };
                card.set_checked(config, *checked);
                tracing::debug!(?id, checked, "switch setting changed");
                Some(Task::none())
            }

            Message::RangeChanged(value) => {
                let stored = cards.volume.on_value_changed(config, *value);
                tracing::debug!(value = stored, "volume setting changed");
                Some(Task::none())
            }

            Message::PushClicked(PushId::RescanPlaylists) => {
                tracing::info!("Rescanning playlists");
                Some(crate::app::load_playlists())
            }

            Message::PushClicked(PushId::ResetSettings) => {
                tracing::info!("Resetting settings to defaults");
                config.reset();
                cards.sync(config);
                Some(Task::none())
            }

            Message::PushClicked(PushId::ToggleLanguage) => {
                let locale = Locale::new(self.core.locale.language.other());
                self.core.locale = locale;
                cards.relabel(locale);
                // Open menus carry labels in the old language
                self.ui.close_menus();
                tracing::info!(language = ?locale.language, "interface language changed");
                Some(Task::none())
            }

            Message::OpenHyperlink => {
                if let Err(e) = cards.help.open() {
                    tracing::warn!("{:#}", e);
                }
                Some(Task::none())
            }

            Message::OpenColorPicker => {
                cards.accent_color.open_picker();
                Some(Task::none())
            }

            Message::CancelColorPicker => {
                cards.accent_color.cancel_picker();
                Some(Task::none())
            }

            Message::SubmitColor(color) => {
                let stored = cards.accent_color.on_color_changed(config, (*color).into());
                tracing::debug!(color = %stored.to_hex(), "accent color changed");
                Some(Task::none())
            }

            _ => None,
        }
    }
}
