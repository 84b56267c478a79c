//! Configuration items consumed by setting cards
//!
//! Values live in memory for the lifetime of the app. An optional
//! `config.json` in the platform config directory seeds them at startup;
//! nothing is written back.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color stored in config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl From<Rgba> for iced::Color {
    fn from(c: Rgba) -> Self {
        iced::Color::from_rgba8(c.r, c.g, c.b, c.a as f32 / 255.0)
    }
}

impl From<iced::Color> for Rgba {
    fn from(c: iced::Color) -> Self {
        let [r, g, b, a] = c.into_rgba8();
        Self { r, g, b, a }
    }
}

/// A single stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i32),
    Color(Rgba),
}

impl ConfigValue {
    fn same_kind(&self, other: &ConfigValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Named configuration entry with a default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigItem {
    pub group: &'static str,
    pub name: &'static str,
    pub default: ConfigValue,
}

impl ConfigItem {
    pub const fn new(group: &'static str, name: &'static str, default: ConfigValue) -> Self {
        Self {
            group,
            name,
            default,
        }
    }

    pub fn key(&self) -> String {
        format!("{}.{}", self.group, self.name)
    }
}

/// Integer entry restricted to an inclusive range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeConfigItem {
    pub item: ConfigItem,
    pub min: i32,
    pub max: i32,
}

impl RangeConfigItem {
    pub const fn new(group: &'static str, name: &'static str, default: i32, min: i32, max: i32) -> Self {
        Self {
            item: ConfigItem::new(group, name, ConfigValue::Int(default)),
            min,
            max,
        }
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

/// Items the application exposes on its settings page
pub mod items {
    use super::*;

    pub const DARK_MODE: ConfigItem =
        ConfigItem::new("Appearance", "DarkMode", ConfigValue::Bool(true));
    pub const ACCENT_COLOR: ConfigItem = ConfigItem::new(
        "Appearance",
        "AccentColor",
        ConfigValue::Color(Rgba::rgb(0x00, 0x9f, 0xaa)),
    );
    pub const ACRYLIC_MENU: ConfigItem =
        ConfigItem::new("Menu", "AcrylicMenu", ConfigValue::Bool(false));
    pub const AERO_MENU: ConfigItem =
        ConfigItem::new("Menu", "AeroMenu", ConfigValue::Bool(false));
    pub const VOLUME: RangeConfigItem = RangeConfigItem::new("Player", "Volume", 30, 0, 100);
}

/// In-memory configuration store keyed by `group.name`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    values: BTreeMap<String, ConfigValue>,
}

impl Config {
    /// Stored value, or the item's default when unset or of the wrong kind
    pub fn get(&self, item: &ConfigItem) -> ConfigValue {
        self.values
            .get(&item.key())
            .filter(|v| v.same_kind(&item.default))
            .copied()
            .unwrap_or(item.default)
    }

    /// Store `value`; values of a different kind than the default are rejected
    pub fn set(&mut self, item: &ConfigItem, value: ConfigValue) -> bool {
        if !value.same_kind(&item.default) {
            tracing::warn!(key = %item.key(), ?value, "config value kind mismatch");
            return false;
        }
        self.values.insert(item.key(), value);
        true
    }

    pub fn get_bool(&self, item: &ConfigItem) -> bool {
        matches!(self.get(item), ConfigValue::Bool(true))
    }

    pub fn get_color(&self, item: &ConfigItem) -> Rgba {
        match self.get(item) {
            ConfigValue::Color(c) => c,
            _ => Rgba::rgb(0, 0, 0),
        }
    }

    pub fn get_range(&self, item: &RangeConfigItem) -> i32 {
        match self.get(&item.item) {
            ConfigValue::Int(v) => item.clamp(v),
            _ => item.min,
        }
    }

    /// Store a clamped value and return what was stored
    pub fn set_range(&mut self, item: &RangeConfigItem, value: i32) -> i32 {
        let value = item.clamp(value);
        self.set(&item.item, ConfigValue::Int(value));
        value
    }

    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Location of the optional seed file
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "songcard", "Songcard")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Seed from the config directory, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Errors that can occur while reading config
#[derive(Debug, Clone)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_until_set() {
        let mut config = Config::default();
        assert!(config.get_bool(&items::DARK_MODE));
        assert_eq!(config.get_range(&items::VOLUME), 30);

        config.set(&items::DARK_MODE, ConfigValue::Bool(false));
        assert!(!config.get_bool(&items::DARK_MODE));

        config.reset();
        assert!(config.get_bool(&items::DARK_MODE));
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let mut config = Config::default();
        assert!(!config.set(&items::DARK_MODE, ConfigValue::Int(3)));
        assert!(config.get_bool(&items::DARK_MODE));
    }

    #[test]
    fn range_values_are_clamped() {
        let mut config = Config::default();
        assert_eq!(config.set_range(&items::VOLUME, 250), 100);
        assert_eq!(config.get_range(&items::VOLUME), 100);
        assert_eq!(config.set_range(&items::VOLUME, -5), 0);
    }

    #[test]
    fn parses_flat_json() {
        let json = r#"{
            "Appearance.DarkMode": false,
            "Player.Volume": 75,
            "Appearance.AccentColor": { "r": 255, "g": 0, "b": 128, "a": 255 }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(!config.get_bool(&items::DARK_MODE));
        assert_eq!(config.get_range(&items::VOLUME), 75);
        assert_eq!(config.get_color(&items::ACCENT_COLOR).to_hex(), "#ff0080ff");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load_from_file(Path::new("/nonexistent/songcard/config.json"));
        assert!(matches!(err, Err(ConfigError::Io(_))));
    }

    #[test]
    fn color_round_trips_through_iced() {
        let c = Rgba::rgb(10, 20, 30);
        let back: Rgba = iced::Color::from(c).into();
        assert_eq!(back, c);
    }
}
