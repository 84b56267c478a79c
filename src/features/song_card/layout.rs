//! Column geometry of a song card
//!
//! The first resize splits the available width between the name column and
//! the artist column in a fixed 554:401 proportion (out of a 955 px
//! reference row). Later resizes hand each column half of the width change,
//! so columns keep their absolute growth instead of their ratio.

use crate::utils::measure_text;

pub const CARD_HEIGHT: f32 = 60.0;
pub const DEFAULT_CARD_WIDTH: f32 = 1154.0;

/// Width reserved for the duration column and margins
const RESERVED_WIDTH: f32 = 131.0;
const REFERENCE_WIDTH: f32 = 955.0;
const NAME_SHARE: f32 = 554.0;
const ARTIST_SHARE: f32 = 401.0;

/// Gap between the name column and the artist label
const ARTIST_GAP: f32 = 16.0;
/// Distance from the right edge to the duration label
const DURATION_INSET: f32 = 44.0;
/// Label font size used for measuring
pub const LABEL_TEXT_SIZE: f32 = 12.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    width: Option<f32>,
    name_width: f32,
    artist_max_width: f32,
    artist_text_width: f32,
}

impl CardLayout {
    pub fn new(artist: &str) -> Self {
        Self {
            width: None,
            name_width: NAME_SHARE,
            artist_max_width: ARTIST_SHARE,
            artist_text_width: measure_text(artist, LABEL_TEXT_SIZE),
        }
    }

    pub fn resize(&mut self, width: f32) {
        match self.width {
            None => {
                let available = width - RESERVED_WIDTH;
                self.name_width = (NAME_SHARE * available / REFERENCE_WIDTH).trunc();
                self.artist_max_width = (ARTIST_SHARE * available / REFERENCE_WIDTH).trunc();
            }
            Some(previous) if previous != width => {
                let half = ((width - previous) / 2.0).trunc();
                self.name_width += half;
                self.artist_max_width += half;
            }
            Some(_) => {}
        }
        self.width = Some(width);
    }

    /// Re-measure after the artist text changed
    pub fn set_artist(&mut self, artist: &str) {
        self.artist_text_width = measure_text(artist, LABEL_TEXT_SIZE);
    }

    pub fn width(&self) -> f32 {
        self.width.unwrap_or(DEFAULT_CARD_WIDTH)
    }

    pub fn name_width(&self) -> f32 {
        self.name_width.max(0.0)
    }

    pub fn artist_x(&self) -> f32 {
        self.name_width() + ARTIST_GAP
    }

    pub fn artist_width(&self) -> f32 {
        self.artist_text_width.min(self.artist_max_width).max(0.0)
    }

    pub fn duration_x(&self) -> f32 {
        self.width() - DURATION_INSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_resize_uses_reference_proportions() {
        let mut layout = CardLayout::new("Artist");
        layout.resize(1086.0);
        // 1086 - 131 = 955 → exactly the reference split
        assert_eq!(layout.name_width(), 554.0);
        assert_eq!(layout.artist_x(), 570.0);
        assert_eq!(layout.duration_x(), 1042.0);
    }

    #[test]
    fn later_resizes_split_delta() {
        let mut layout = CardLayout::new("Artist");
        layout.resize(1086.0);
        layout.resize(1186.0);
        assert_eq!(layout.name_width(), 604.0);

        layout.resize(1086.0);
        assert_eq!(layout.name_width(), 554.0);
    }

    #[test]
    fn artist_width_is_capped() {
        let long = "A".repeat(200);
        let mut layout = CardLayout::new(&long);
        layout.resize(1086.0);
        assert_eq!(layout.artist_width(), 401.0);

        layout.set_artist("AB");
        assert!(layout.artist_width() < 401.0);
    }
}
