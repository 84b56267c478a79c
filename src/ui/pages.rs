//! Full-page views selected from the sidebar

pub mod settings;
pub mod songs;
