//! Song list: owns the cards and coordinates selection across them
//!
//! The list translates per-card [`CardOutput`]s into list-level
//! [`ListEvent`]s, keeps a single selected card, tracks which card is
//! playing and runs selection mode (checkbox multi-select) for all cards.
//! It also remembers which card holds the pointer press, so the matching
//! release reaches that card wherever the pointer went up.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

use super::song_card::{
    CardEvent, CardOutput, DEFAULT_CARD_WIDTH, PointerButton, SongCard, SongRecord,
};

/// Notification from the list to whoever hosts it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Start playback at this index
    Play(usize),
    SelectionModeChanged(bool),
    CheckedCountChanged(usize),
    /// A song should be removed from the library
    RemoveSong(SongRecord),
}

#[derive(Debug, Clone)]
pub struct SongList {
    cards: Vec<SongCard>,
    selected: Option<usize>,
    playing: Option<usize>,
    /// Card that took the last press and has not seen its release
    pressed: Option<usize>,
    checked: BTreeSet<usize>,
    selection_mode: bool,
    card_width: f32,
}

impl Default for SongList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl SongList {
    pub fn new(songs: Vec<SongRecord>) -> Self {
        let mut list = Self {
            cards: Vec::new(),
            selected: None,
            playing: None,
            pressed: None,
            checked: BTreeSet::new(),
            selection_mode: false,
            card_width: DEFAULT_CARD_WIDTH,
        };
        list.update_all(songs);
        list
    }

    pub fn cards(&self) -> &[SongCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn selection_mode(&self) -> bool {
        self.selection_mode
    }

    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    pub fn checked_songs(&self) -> Vec<&SongRecord> {
        self.checked
            .iter()
            .filter_map(|&i| self.cards.get(i))
            .map(SongCard::song)
            .collect()
    }

    pub fn playing(&self) -> Option<usize> {
        self.playing
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Deliver a pointer/checkbox event to one card
    ///
    /// Releases go to the pressed card rather than the one under the pointer.
    pub fn handle_card(&mut self, index: usize, event: CardEvent, now: Instant) -> Vec<ListEvent> {
        let target = match event {
            CardEvent::Release(_) => self.pressed.unwrap_or(index),
            _ => index,
        };
        let Some(card) = self.cards.get_mut(target) else {
            tracing::warn!(index = target, "event for missing song card");
            return Vec::new();
        };
        let outputs = card.handle(event, now);

        match event {
            CardEvent::Press(_) => self.pressed = Some(target),
            CardEvent::Release(_) if !card.is_pressed() => self.pressed = None,
            _ => {}
        }
        self.route(outputs)
    }

    /// Pointer went up somewhere outside the cards
    pub fn release_pointer(&mut self, button: PointerButton, now: Instant) -> Vec<ListEvent> {
        match self.pressed {
            Some(index) => self.handle_card(index, CardEvent::Release(button), now),
            None => Vec::new(),
        }
    }

    /// Advance every card's animation
    pub fn tick(&mut self, now: Instant) -> Vec<ListEvent> {
        let outputs: Vec<CardOutput> = self.cards.iter_mut().filter_map(|c| c.tick(now)).collect();
        self.route(outputs)
    }

    pub fn is_animating(&self) -> bool {
        self.cards.iter().any(SongCard::is_animating)
    }

    fn route(&mut self, outputs: Vec<CardOutput>) -> Vec<ListEvent> {
        let mut events = Vec::new();
        for output in outputs {
            match output {
                CardOutput::Clicked(index) => self.on_clicked(index),
                CardOutput::DoubleClicked(index) | CardOutput::PlayButtonClicked(index) => {
                    events.push(ListEvent::Play(index));
                }
                CardOutput::CheckedStateChanged(index, checked) => {
                    self.on_checked_changed(index, checked, &mut events);
                }
            }
        }
        events
    }

    fn on_clicked(&mut self, index: usize) {
        if let Some(previous) = self.selected.filter(|&p| p != index) {
            // The playing card stays highlighted through set_play
            if Some(previous) != self.playing {
                self.deselect(previous);
            }
        }
        self.selected = Some(index);
    }

    /// Drop the highlight of a card unless its checkbox holds it
    fn deselect(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            if !card.is_checked() {
                card.set_selected(false);
            }
        }
    }

    fn on_checked_changed(&mut self, index: usize, checked: bool, events: &mut Vec<ListEvent>) {
        let changed = if checked {
            self.checked.insert(index)
        } else {
            self.checked.remove(&index)
        };
        if !changed {
            return;
        }

        if !self.checked.is_empty() && !self.selection_mode {
            self.set_selection_mode(true);
            events.push(ListEvent::SelectionModeChanged(true));
        }
        events.push(ListEvent::CheckedCountChanged(self.checked.len()));
        if self.checked.is_empty() && self.selection_mode {
            self.set_selection_mode(false);
            events.push(ListEvent::SelectionModeChanged(false));
        }
    }

    /// Broadcast selection mode to every card
    fn set_selection_mode(&mut self, open: bool) {
        tracing::debug!(open, "selection mode");
        self.selection_mode = open;
        for card in &mut self.cards {
            card.set_selection_mode_open(open);
        }
    }

    pub fn check_all(&mut self) -> Vec<ListEvent> {
        self.set_all_checked(true)
    }

    pub fn uncheck_all(&mut self) -> Vec<ListEvent> {
        self.set_all_checked(false)
    }

    /// Leave selection mode by clearing every checkbox
    pub fn exit_selection_mode(&mut self) -> Vec<ListEvent> {
        let mut events = self.uncheck_all();
        if self.selection_mode {
            self.set_selection_mode(false);
            events.push(ListEvent::SelectionModeChanged(false));
        }
        events
    }

    fn set_all_checked(&mut self, checked: bool) -> Vec<ListEvent> {
        let outputs: Vec<CardOutput> = self
            .cards
            .iter_mut()
            .filter_map(|c| c.set_checked(checked))
            .collect();
        self.route(outputs)
    }

    /// Move the playing highlight; `None` clears it
    pub fn set_playing(&mut self, index: Option<usize>) {
        if let Some(card) = self.playing.and_then(|i| self.cards.get_mut(i)) {
            card.set_play(false);
            if card.is_checked() {
                card.set_selected(true);
            }
        }
        self.playing = index.filter(|&i| i < self.cards.len());
        if let Some(i) = self.playing {
            if let Some(previous) = self.selected.filter(|&p| p != i) {
                self.deselect(previous);
            }
            self.cards[i].set_play(true);
            self.selected = Some(i);
        }
    }

    /// Ask the host to remove the song behind `index`
    pub fn request_remove(&self, index: usize) -> Option<ListEvent> {
        self.cards
            .get(index)
            .map(|card| ListEvent::RemoveSong(card.song().clone()))
    }

    /// Replace the list contents, recycling existing cards
    pub fn update_all(&mut self, songs: Vec<SongRecord>) {
        let count = songs.len();
        for (index, song) in songs.into_iter().enumerate() {
            match self.cards.get_mut(index) {
                Some(card) => card.update_song(song),
                None => {
                    let mut card = SongCard::new(index, song);
                    card.resize(self.card_width);
                    card.set_selection_mode_open(self.selection_mode);
                    self.cards.push(card);
                }
            }
        }
        self.cards.truncate(count);
        self.checked.retain(|&i| i < count);
        self.selected = self.selected.filter(|&i| i < count);
        self.playing = self.playing.filter(|&i| i < count);
        self.pressed = self.pressed.filter(|&i| i < count);
        if self.checked.is_empty() && self.selection_mode {
            self.set_selection_mode(false);
        }
        tracing::debug!(count, "song list updated");
    }

    /// Drop every card whose file is in `paths`; returns how many were removed
    pub fn remove_by_paths(&mut self, paths: &[PathBuf]) -> usize {
        let before = self.cards.len();
        let mut kept = Vec::with_capacity(before);
        let mut remap = vec![None; before];

        for card in self.cards.drain(..) {
            if paths.contains(&card.song().file) {
                continue;
            }
            remap[card.index()] = Some(kept.len());
            kept.push(card);
        }
        for (index, card) in kept.iter_mut().enumerate() {
            card.set_index(index);
        }
        self.cards = kept;

        let moved = |i: usize| remap.get(i).copied().flatten();
        self.selected = self.selected.and_then(moved);
        self.playing = self.playing.and_then(moved);
        self.pressed = self.pressed.and_then(moved);
        self.checked = self.checked.iter().filter_map(|&i| moved(i)).collect();
        if self.checked.is_empty() && self.selection_mode {
            self.set_selection_mode(false);
        }

        before - self.cards.len()
    }

    pub fn resize(&mut self, width: f32) {
        self.card_width = width;
        for card in &mut self.cards {
            card.resize(width);
        }
    }
}
