//! Reusable UI widgets - composable pieces without business logic
//!
//! Widgets must not import `crate::app::Message`; they are generic over the
//! message type and take callbacks or prebuilt elements instead.

mod menu;
mod setting_card;

pub use menu::{ITEM_HEIGHT as MENU_ITEM_HEIGHT, MIN_WIDTH as MENU_MIN_WIDTH, menu_panel};
pub use setting_card::setting_card;
