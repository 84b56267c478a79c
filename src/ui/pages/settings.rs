//! Settings page
//!
//! Every row is a setting card; the control on its right comes from the
//! card's kind (switch, slider, color, push button or hyperlink).

use iced::widget::{Space, button, column, container, row, scrollable, slider, text, toggler};
use iced::{Alignment, Background, Border, Color, Element, Fill, Padding};

use crate::app::{App, Message, PushId, SwitchId};
use crate::features::setting_cards::{
    ColorSettingCard, HyperlinkCard, PushSettingCard, RangeSettingCard, SwitchSettingCard,
};
use crate::i18n::{Key, Locale};
use crate::ui::theme;
use crate::ui::widgets::setting_card;

pub fn view(app: &App) -> Element<'_, Message> {
    let locale = app.core.locale;
    let accent = app.core.accent();
    let cards = &app.ui.settings;

    let title = text(locale.get(Key::SettingsTitle)).size(32).style(|t| text::Style {
        color: Some(theme::text_primary(t)),
    });

    let content = column![
        title,
        Space::new().height(16),
        switch_card(&cards.dark_mode, SwitchId::DarkMode, locale),
        switch_card(&cards.acrylic_menu, SwitchId::AcrylicMenu, locale),
        switch_card(&cards.aero_menu, SwitchId::AeroMenu, locale),
        color_card(&cards.accent_color),
        range_card(&cards.volume),
        push_card(&cards.rescan, PushId::RescanPlaylists, accent),
        push_card(&cards.reset, PushId::ResetSettings, accent),
        push_card(&cards.language, PushId::ToggleLanguage, accent),
        hyperlink_card(&cards.help),
    ]
    .spacing(6)
    .padding(Padding::new(40.0).left(30.0).right(30.0));

    scrollable(container(content).width(Fill)).height(Fill).into()
}

fn switch_card<'a>(
    card: &'a SwitchSettingCard,
    id: SwitchId,
    locale: Locale,
) -> Element<'a, Message> {
    let label = if card.is_checked() {
        locale.get(Key::SwitchOn)
    } else {
        locale.get(Key::SwitchOff)
    };

    let control = row![
        text(label).size(14),
        toggler(card.is_checked())
            .on_toggle(move |checked| Message::SwitchToggled(id, checked))
            .size(20),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    setting_card(&card.card, control.into())
}

fn range_card(card: &RangeSettingCard) -> Element<'_, Message> {
    let (min, max) = card.range();
    let control = row![
        text(card.value().to_string()).size(14),
        slider(min..=max, card.value(), Message::RangeChanged)
            .step(1)
            .width(268),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    setting_card(&card.card, control.into())
}

fn push_card(card: &PushSettingCard, id: PushId, accent: Color) -> Element<'_, Message> {
    let push = button(text(card.text.as_str()).size(14))
        .padding([6, 20])
        .on_press(Message::PushClicked(id));
    let push = if card.primary {
        push.style(theme::primary_button(accent))
    } else {
        push.style(theme::secondary_button)
    };

    setting_card(&card.card, push.into())
}

fn hyperlink_card(card: &HyperlinkCard) -> Element<'_, Message> {
    let link = button(text(card.text.as_str()).size(14))
        .padding([6, 12])
        .style(theme::text_button)
        .on_press(Message::OpenHyperlink);

    setting_card(&card.card, link.into())
}

fn color_card(card: &ColorSettingCard) -> Element<'_, Message> {
    let color: Color = card.color().into();

    let swatch = button(Space::new().width(0).height(0))
        .width(96)
        .height(32)
        .style(move |t, _status| button::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: 5.0.into(),
                width: 1.0,
                color: theme::border_color(t),
            },
            ..Default::default()
        })
        .on_press(Message::OpenColorPicker);

    let picker = iced_aw::ColorPicker::new(
        card.picker_open(),
        color,
        swatch,
        Message::CancelColorPicker,
        Message::SubmitColor,
    );

    setting_card(&card.card, picker.into())
}
