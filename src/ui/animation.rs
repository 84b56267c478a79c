//! Animation helpers
//!
//! Pointer-driven fades use `iced_anim`; shift and geometry animations that
//! need exact completion detection use [`tween`].

mod hover;
pub mod tween;

pub use hover::{MenuFade, RowHover};
pub use tween::Tween;
