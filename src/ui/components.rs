//! UI Components module - business-specific composite components
//!
//! Components combine widgets with application logic. They are the only
//! layer that imports from `crate::app`.

pub mod context_menu;
pub mod search_bar;
pub mod sidebar;
pub mod song_card;
pub mod song_list;
