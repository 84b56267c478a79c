//! Download quality submenu

use super::{MenuAction, MenuEntry, label};
use crate::i18n::{Key, Locale};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadQuality {
    Standard,
    High,
    Super,
}

impl DownloadQuality {
    pub fn all() -> &'static [DownloadQuality] {
        &[
            DownloadQuality::Standard,
            DownloadQuality::High,
            DownloadQuality::Super,
        ]
    }

    /// Value carried by the download request
    pub fn as_str(self) -> &'static str {
        match self {
            DownloadQuality::Standard => "Standard quality",
            DownloadQuality::High => "High quality",
            DownloadQuality::Super => "Super quality",
        }
    }

    fn key(self) -> Key {
        match self {
            DownloadQuality::Standard => Key::QualityStandard,
            DownloadQuality::High => Key::QualityHigh,
            DownloadQuality::Super => Key::QualitySuper,
        }
    }
}

pub struct DownloadMenu;

impl DownloadMenu {
    pub fn entries(locale: Locale) -> Vec<MenuEntry<DownloadQuality>> {
        DownloadQuality::all()
            .iter()
            .map(|&q| MenuEntry::Action(MenuAction::new(q, label(locale, q.key()))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::menu::actions;

    #[test]
    fn three_qualities_in_order() {
        let entries = DownloadMenu::entries(Locale::default());
        let labels: Vec<_> = actions(&entries).map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Standard", "HQ", "SQ"]);
        assert_eq!(DownloadQuality::High.as_str(), "High quality");
    }
}
