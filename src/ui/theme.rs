//! Theme and style lookup tables
//!
//! Colors come in dark and light variants chosen from the active iced
//! theme. Song card colors are looked up from [`CardState`] and
//! [`LabelState`] alone; the accent color is supplied by config.

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::features::menu::MenuStyle;
use crate::features::song_card::{CardState, LabelState};

fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
    pub const SIDEBAR: Color = color!(0x1b1b1b);
    pub const SURFACE: Color = color!(0x242424);
    pub const BORDER: Color = color!(0x333333);
    pub const TEXT_MUTED: Color = color!(0x888888);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SIDEBAR: Color = color!(0xf3f3f3);
    pub const SURFACE: Color = color!(0xfbfbfb);
    pub const BORDER: Color = color!(0xe5e5e5);
    pub const TEXT_MUTED: Color = color!(0x777777);
    pub const TEXT_SECONDARY: Color = color!(0x5c5c5c);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

macro_rules! themed {
    ($name:ident, $field:ident) => {
        pub fn $name(theme: &Theme) -> Color {
            if is_dark(theme) { dark::$field } else { light::$field }
        }
    };
}

themed!(background, BACKGROUND);
themed!(sidebar_bg, SIDEBAR);
themed!(surface, SURFACE);
themed!(border_color, BORDER);
themed!(text_muted, TEXT_MUTED);
themed!(text_secondary, TEXT_SECONDARY);
themed!(text_primary, TEXT_PRIMARY);

/// Foreground overlay used for hover/press tints
pub fn hover_bg_alpha(theme: &Theme, alpha: f32) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, alpha)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, alpha)
    }
}

fn with_alpha(c: Color, a: f32) -> Color {
    Color { a, ..c }
}

fn mix(a: Color, b: Color, t: f32) -> Color {
    Color {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
        a: a.a + (b.a - a.a) * t,
    }
}

// ============================================================================
// Song card lookup tables
// ============================================================================

/// Background of a song card
///
/// `hover` is the row's hover fade in [0, 1]; it only softens the enter
/// tint of unselected cards so the highlight fades instead of popping.
pub fn card_background(state: CardState, accent: Color, hover: f32, theme: &Theme) -> Color {
    match state {
        CardState::NotSelectedLeave => hover_bg_alpha(theme, 0.05 * hover),
        CardState::NotSelectedEnter => hover_bg_alpha(theme, 0.05 * hover.max(0.6)),
        CardState::NotSelectedPressed => hover_bg_alpha(theme, 0.10),
        CardState::SelectedLeave => accent,
        CardState::SelectedEnter => mix(accent, Color::WHITE, 0.12),
        CardState::SelectedPressed => mix(accent, Color::BLACK, 0.15),
    }
}

/// Text color of card labels; `primary` is the song name column
pub fn card_label(label: LabelState, accent: Color, primary: bool, theme: &Theme) -> Color {
    match label {
        LabelState::Selected => Color::WHITE,
        LabelState::NotSelectedPlay => accent,
        LabelState::NotSelectedNotPlay if primary => text_primary(theme),
        LabelState::NotSelectedNotPlay => text_secondary(theme),
    }
}

pub fn song_card(state: CardState, accent: Color, hover: f32, theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(card_background(state, accent, hover, theme))),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Container styles
// ============================================================================

pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

pub fn sidebar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(sidebar_bg(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Setting card row
pub fn setting_card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

/// Popup menu surface for the configured style
pub fn menu_surface(style: MenuStyle, opacity: f32, theme: &Theme) -> container::Style {
    let (bg, shadow_alpha) = match style {
        MenuStyle::Aero => (with_alpha(surface(theme), 0.75), 0.35),
        MenuStyle::Acrylic(tint) => {
            let tint: Color = tint.into();
            let base = if is_dark(theme) {
                mix(tint, Color::BLACK, 0.8)
            } else {
                tint
            };
            (base, 0.2)
        }
        MenuStyle::Dwm => (surface(theme), 0.3),
    };

    container::Style {
        background: Some(Background::Color(with_alpha(bg, bg.a * opacity))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: with_alpha(border_color(theme), opacity),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, shadow_alpha * opacity),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button styles
// ============================================================================

/// Accent-filled button
pub fn primary_button(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => mix(accent, Color::WHITE, 0.12),
            button::Status::Pressed => mix(accent, Color::BLACK, 0.15),
            _ => accent,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: Color::WHITE,
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Outlined neutral button
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: text_primary(theme),
        border: Border {
            radius: 4.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg_alpha(theme, 0.08))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(hover_bg_alpha(theme, 0.14))),
            ..base
        },
        _ => base,
    }
}

/// Round transparent icon button
pub fn icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_secondary(theme),
        border: Border {
            radius: 50.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg_alpha(theme, 0.1))),
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

/// Text-only button, used for hyperlinks and menu rows
pub fn text_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_secondary(theme),
        border: Border::default(),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

/// Full-width menu row
pub fn menu_item(theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => hover_bg_alpha(theme, 0.08),
        button::Status::Pressed => hover_bg_alpha(theme, 0.14),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: text_primary(theme),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Sidebar navigation entry
pub fn nav_button(active: bool, accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let bg = match (active, status) {
            (true, _) => hover_bg_alpha(theme, 0.1),
            (false, button::Status::Hovered) => hover_bg_alpha(theme, 0.05),
            _ => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: if active { accent } else { text_primary(theme) },
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
