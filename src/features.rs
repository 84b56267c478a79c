//! Feature modules - interaction logic separated from rendering
//!
//! Models here are driven by the app's update loop and rendered by
//! `crate::ui`. They take the current `Instant` explicitly wherever time
//! matters so they can be tested without a clock.

pub mod config;
pub mod library;
pub mod menu;
pub mod setting_cards;
pub mod song_card;
pub mod song_list;
pub mod song_tab;

pub use config::Config;
pub use song_card::{CardEvent, PointerButton, SongRecord};
pub use song_tab::{SongTab, TabSignal};
