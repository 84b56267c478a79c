//! UI module: styles, animations and views
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling
//! - **Pages** (`pages`): Whole pages assembled from components

pub mod animation;
pub mod components;
pub mod icons;
pub mod pages;
pub mod theme;
pub mod widgets;
