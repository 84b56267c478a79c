//! "Songs" tab of the library: a song list plus its outward signals

use std::path::PathBuf;
use std::time::Instant;

use super::song_card::{CardEvent, PointerButton, SongRecord};
use super::song_list::{ListEvent, SongList};

/// Signals the tab raises towards the rest of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabSignal {
    Play(usize),
    SelectionModeChanged(bool),
    CheckedCountChanged(usize),
    /// Remove these files from the library
    RemoveSongs(Vec<PathBuf>),
}

impl From<ListEvent> for TabSignal {
    fn from(event: ListEvent) -> Self {
        match event {
            ListEvent::Play(i) => TabSignal::Play(i),
            ListEvent::SelectionModeChanged(open) => TabSignal::SelectionModeChanged(open),
            ListEvent::CheckedCountChanged(n) => TabSignal::CheckedCountChanged(n),
            ListEvent::RemoveSong(song) => TabSignal::RemoveSongs(vec![song.file]),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SongTab {
    list: SongList,
}

impl SongTab {
    pub fn new(songs: Vec<SongRecord>) -> Self {
        Self {
            list: SongList::new(songs),
        }
    }

    pub fn list(&self) -> &SongList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut SongList {
        &mut self.list
    }

    /// Replace every song shown in the tab
    pub fn update_window(&mut self, songs: Vec<SongRecord>) {
        self.list.update_all(songs);
    }

    /// Drop songs whose files were deleted elsewhere
    pub fn delete_songs(&mut self, paths: &[PathBuf]) -> usize {
        self.list.remove_by_paths(paths)
    }

    pub fn handle_card(&mut self, index: usize, event: CardEvent, now: Instant) -> Vec<TabSignal> {
        convert(self.list.handle_card(index, event, now))
    }

    pub fn release_pointer(&mut self, button: PointerButton, now: Instant) -> Vec<TabSignal> {
        convert(self.list.release_pointer(button, now))
    }

    pub fn tick(&mut self, now: Instant) -> Vec<TabSignal> {
        convert(self.list.tick(now))
    }

    /// Context-menu "Delete" on one card
    pub fn request_remove(&self, index: usize) -> Option<TabSignal> {
        self.list.request_remove(index).map(TabSignal::from)
    }

    /// Remove every checked song
    pub fn request_remove_checked(&self) -> Option<TabSignal> {
        let files: Vec<PathBuf> = self
            .list
            .checked_songs()
            .into_iter()
            .map(|s| s.file.clone())
            .collect();
        (!files.is_empty()).then_some(TabSignal::RemoveSongs(files))
    }

    pub fn check_all(&mut self) -> Vec<TabSignal> {
        convert(self.list.check_all())
    }

    pub fn exit_selection_mode(&mut self) -> Vec<TabSignal> {
        convert(self.list.exit_selection_mode())
    }
}

fn convert(events: Vec<ListEvent>) -> Vec<TabSignal> {
    events.into_iter().map(TabSignal::from).collect()
}
