//! Setting card models
//!
//! Each card is a titled row with an icon and an optional description,
//! plus one control bound to a [`ConfigItem`]. The models here own the
//! control state and write through to [`Config`]; rendering lives in
//! `crate::ui::widgets::setting_card`.

use anyhow::{Context, Result};

use super::config::{Config, ConfigItem, ConfigValue, RangeConfigItem, Rgba};

/// Row height with a description line
pub const HEIGHT_WITH_CONTENT: f32 = 88.0;
/// Row height for a title-only card
pub const HEIGHT_TITLE_ONLY: f32 = 62.0;

/// Icon names available to setting cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingIcon {
    Web,
    Link,
    Help,
    Font,
    Info,
    Zoom,
    Close,
    Movie,
    Brush,
    Music,
    Video,
    Embed,
    Album,
    Folder,
    Search,
    Update,
    Palette,
    Feedback,
    Minimize,
    Download,
    Question,
    Alignment,
    PencilInk,
    FolderAdd,
    ArrowDown,
    FileSearch,
    Transparent,
    MusicFolder,
    BackgroundFill,
    FluorescentPen,
}

/// Icon, title and optional description shared by every card
#[derive(Debug, Clone, PartialEq)]
pub struct SettingCard {
    pub icon: SettingIcon,
    title: String,
    content: Option<String>,
}

impl SettingCard {
    pub fn new(icon: SettingIcon, title: impl Into<String>, content: Option<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            content: content.filter(|c| !c.is_empty()),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Empty content hides the description line
    pub fn set_content(&mut self, content: impl Into<String>) {
        let content = content.into();
        self.content = (!content.is_empty()).then_some(content);
    }

    pub fn height(&self) -> f32 {
        if self.content.is_some() {
            HEIGHT_WITH_CONTENT
        } else {
            HEIGHT_TITLE_ONLY
        }
    }
}

/// Card with an on/off switch
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchSettingCard {
    pub card: SettingCard,
    item: Option<ConfigItem>,
    checked: bool,
}

impl SwitchSettingCard {
    pub fn new(card: SettingCard, item: Option<ConfigItem>, config: &Config) -> Self {
        let checked = item.as_ref().is_some_and(|i| config.get_bool(i));
        Self {
            card,
            item,
            checked,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Update the switch and the bound item; returns the new state
    pub fn set_checked(&mut self, config: &mut Config, checked: bool) -> bool {
        if let Some(item) = &self.item {
            config.set(item, ConfigValue::Bool(checked));
        }
        self.checked = checked;
        checked
    }

    /// Re-read the bound item, e.g. after a config reset
    pub fn sync(&mut self, config: &Config) {
        if let Some(item) = &self.item {
            self.checked = config.get_bool(item);
        }
    }
}

/// Card with an integer slider
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSettingCard {
    pub card: SettingCard,
    item: RangeConfigItem,
    value: i32,
}

impl RangeSettingCard {
    pub fn new(card: SettingCard, item: RangeConfigItem, config: &Config) -> Self {
        Self {
            card,
            item,
            value: config.get_range(&item),
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn range(&self) -> (i32, i32) {
        (self.item.min, self.item.max)
    }

    /// Slider moved; returns the clamped value that was stored
    pub fn on_value_changed(&mut self, config: &mut Config, value: i32) -> i32 {
        self.value = config.set_range(&self.item, value);
        self.value
    }

    pub fn sync(&mut self, config: &Config) {
        self.value = config.get_range(&self.item);
    }
}

/// Card with a push button
#[derive(Debug, Clone, PartialEq)]
pub struct PushSettingCard {
    pub card: SettingCard,
    pub text: String,
    /// Accent-colored button
    pub primary: bool,
}

impl PushSettingCard {
    pub fn new(text: impl Into<String>, card: SettingCard) -> Self {
        Self {
            card,
            text: text.into(),
            primary: false,
        }
    }

    pub fn primary(text: impl Into<String>, card: SettingCard) -> Self {
        Self {
            primary: true,
            ..Self::new(text, card)
        }
    }
}

/// Card with a link button that opens a URL in the browser
#[derive(Debug, Clone, PartialEq)]
pub struct HyperlinkCard {
    pub card: SettingCard,
    pub url: String,
    pub text: String,
}

impl HyperlinkCard {
    pub fn new(url: impl Into<String>, text: impl Into<String>, card: SettingCard) -> Self {
        Self {
            card,
            url: url.into(),
            text: text.into(),
        }
    }

    pub fn open(&self) -> Result<()> {
        open::that_detached(&self.url).with_context(|| format!("failed to open {}", self.url))
    }
}

/// Card with a color swatch that opens a picker
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSettingCard {
    pub card: SettingCard,
    item: ConfigItem,
    color: Rgba,
    picker_open: bool,
}

impl ColorSettingCard {
    pub fn new(card: SettingCard, item: ConfigItem, config: &Config) -> Self {
        Self {
            card,
            item,
            color: config.get_color(&item),
            picker_open: false,
        }
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn open_picker(&mut self) {
        self.picker_open = true;
    }

    pub fn cancel_picker(&mut self) {
        self.picker_open = false;
    }

    /// Picker submitted; stores the color and closes the picker
    pub fn on_color_changed(&mut self, config: &mut Config, color: Rgba) -> Rgba {
        config.set(&self.item, ConfigValue::Color(color));
        self.color = color;
        self.picker_open = false;
        color
    }

    pub fn sync(&mut self, config: &Config) {
        self.color = config.get_color(&self.item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::config::items;

    fn card(content: Option<&str>) -> SettingCard {
        SettingCard::new(SettingIcon::Music, "Title", content.map(str::to_string))
    }

    #[test]
    fn height_depends_on_content() {
        let mut c = card(Some("desc"));
        assert_eq!(c.height(), HEIGHT_WITH_CONTENT);
        c.set_title("Renamed");
        assert_eq!(c.title(), "Renamed");
        c.set_content("");
        assert_eq!(c.content(), None);
        assert_eq!(c.height(), HEIGHT_TITLE_ONLY);
        assert_eq!(card(Some("")).height(), HEIGHT_TITLE_ONLY);
    }

    #[test]
    fn switch_writes_config() {
        let mut config = Config::default();
        let mut switch = SwitchSettingCard::new(card(None), Some(items::DARK_MODE), &config);
        assert!(switch.is_checked());

        switch.set_checked(&mut config, false);
        assert!(!config.get_bool(&items::DARK_MODE));

        config.reset();
        switch.sync(&config);
        assert!(switch.is_checked());
    }

    #[test]
    fn unbound_switch_only_tracks_itself() {
        let mut config = Config::default();
        let mut switch = SwitchSettingCard::new(card(None), None, &config);
        assert!(!switch.is_checked());
        switch.set_checked(&mut config, true);
        assert!(switch.is_checked());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn range_card_clamps() {
        let mut config = Config::default();
        let mut range = RangeSettingCard::new(card(None), items::VOLUME, &config);
        assert_eq!(range.value(), 30);
        assert_eq!(range.range(), (0, 100));
        assert_eq!(range.on_value_changed(&mut config, 120), 100);
        assert_eq!(config.get_range(&items::VOLUME), 100);
    }

    #[test]
    fn color_card_closes_picker_on_submit() {
        let mut config = Config::default();
        let mut color = ColorSettingCard::new(card(None), items::ACCENT_COLOR, &config);
        color.open_picker();
        assert!(color.picker_open());
        color.on_color_changed(&mut config, Rgba::rgb(1, 2, 3));
        assert!(!color.picker_open());
        assert_eq!(config.get_color(&items::ACCENT_COLOR), Rgba::rgb(1, 2, 3));
    }

    #[test]
    fn primary_push_card() {
        let push = PushSettingCard::primary("Go", card(None));
        assert!(push.primary);
        assert_eq!(push.text, "Go");
    }
}
