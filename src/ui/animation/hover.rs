//! Row hover fades backed by `iced_anim`
//!
//! Only one song row is under the pointer at a time, so the tracker keeps
//! two slots: the row fading in and the row fading out.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

const ROW_FADE: Duration = Duration::from_millis(160);
const MENU_FADE: Duration = Duration::from_millis(120);

fn row_easing() -> Easing {
    Easing::EASE_OUT.with_duration(ROW_FADE)
}

/// Exclusive hover highlight for list rows keyed by `K`
#[derive(Debug)]
pub struct RowHover<K: PartialEq + Clone> {
    entering: Option<(K, Animated<f32>)>,
    leaving: Option<(K, Animated<f32>)>,
}

impl<K: PartialEq + Clone> Default for RowHover<K> {
    fn default() -> Self {
        Self {
            entering: None,
            leaving: None,
        }
    }
}

impl<K: PartialEq + Clone> RowHover<K> {
    /// Move the highlight to `key`, or clear it with `None`
    pub fn set(&mut self, key: Option<K>) {
        if self.entering.as_ref().map(|(k, _)| k) == key.as_ref() {
            return;
        }

        if let Some((old, anim)) = self.entering.take() {
            let mut fading = Animated::transition(*anim.value(), row_easing());
            fading.update(0.0.into());
            self.leaving = Some((old, fading));
        }

        if let Some(new) = key {
            let mut anim = Animated::transition(0.0, row_easing());
            anim.update(1.0.into());
            self.entering = Some((new, anim));
        }
    }

    /// Highlight strength for `key` in [0, 1]
    pub fn progress(&self, key: &K) -> f32 {
        match (&self.entering, &self.leaving) {
            (Some((k, anim)), _) if k == key => *anim.value(),
            (_, Some((k, anim))) if k == key => *anim.value(),
            _ => 0.0,
        }
    }

    pub fn current(&self) -> Option<&K> {
        self.entering.as_ref().map(|(k, _)| k)
    }

    pub fn is_animating(&self) -> bool {
        self.entering.as_ref().is_some_and(|(_, a)| a.is_animating())
            || self.leaving.as_ref().is_some_and(|(_, a)| a.is_animating())
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some((_, anim)) = self.entering.as_mut() {
            anim.tick(now);
        }
        if let Some((_, anim)) = self.leaving.as_mut() {
            anim.tick(now);
            if !anim.is_animating() {
                self.leaving = None;
            }
        }
    }

    /// Forget every row, e.g. after the list was rebuilt
    pub fn clear(&mut self) {
        self.entering = None;
        self.leaving = None;
    }
}

/// Opacity fade used when a popup menu opens or closes
#[derive(Debug)]
pub struct MenuFade {
    animation: Animated<f32>,
}

impl Default for MenuFade {
    fn default() -> Self {
        Self {
            animation: Animated::transition(0.0, Easing::EASE.with_duration(MENU_FADE)),
        }
    }
}

impl MenuFade {
    pub fn show(&mut self) {
        self.animation.update(1.0.into());
    }

    pub fn hide(&mut self) {
        self.animation.update(0.0.into());
    }

    pub fn opacity(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_moves_between_rows() {
        let mut hover: RowHover<usize> = RowHover::default();
        assert_eq!(hover.progress(&3), 0.0);
        assert!(hover.current().is_none());

        hover.set(Some(3));
        assert_eq!(hover.current(), Some(&3));

        hover.set(Some(4));
        assert_eq!(hover.current(), Some(&4));

        hover.set(None);
        assert!(hover.current().is_none());
    }

    #[test]
    fn progress_stays_in_unit_range() {
        let mut hover: RowHover<usize> = RowHover::default();
        hover.set(Some(1));
        hover.tick(Instant::now() + Duration::from_millis(50));
        let p = hover.progress(&1);
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn clear_drops_all_rows() {
        let mut hover: RowHover<usize> = RowHover::default();
        hover.set(Some(1));
        hover.set(Some(2));
        hover.clear();
        assert_eq!(hover.progress(&1), 0.0);
        assert_eq!(hover.progress(&2), 0.0);
        assert!(!hover.is_animating());
    }
}
