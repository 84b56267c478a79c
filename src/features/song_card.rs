//! Song card interaction state machine
//!
//! A song card is one row of the song list. It tracks two independent state
//! axes ([`CardState`] for pointer/selection, [`LabelState`] for label
//! coloring), whether the checkbox and the play/add button group are
//! visible, and the press/release shift of its three columns.
//!
//! The card never talks to the list directly. [`SongCard::handle`] and
//! [`SongCard::tick`] return [`CardOutput`]s that the owning list routes.
//!
//! # Double click
//!
//! A double click only arms the card. The next primary release starts the
//! return animation as usual and, unless the card is already playing,
//! `DoubleClicked` is emitted when that animation group completes. A press
//! that interrupts the group keeps the request armed until the next
//! completion.
//!
//! # Pointer grab
//!
//! A release only counts when it matches the button that pressed this
//! card. The list routes releases back to the pressed card, so a drag that
//! ends over another row still finishes the press where it started.

mod layout;
mod shift;
mod state;

use std::path::PathBuf;
use std::time::Instant;

use serde::{Deserialize, Serialize};

pub use layout::{CARD_HEIGHT, CardLayout, DEFAULT_CARD_WIDTH, LABEL_TEXT_SIZE};
pub use shift::ShiftGroup;
#[cfg(test)]
pub use shift::{RELEASE_DURATION, SHIFT_DELTAS};
pub use state::{CardState, LabelState, PointerPhase};

/// Immutable display snapshot of one song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongRecord {
    /// Path of the audio file, used as the song's identity
    pub file: PathBuf,
    pub name: String,
    pub track_number: u32,
    pub artist: String,
    /// Length in seconds
    pub duration: u32,
}

/// Mouse button behind a press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Input delivered to a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    Enter,
    Leave,
    Press(PointerButton),
    Release(PointerButton),
    DoubleClick,
    CheckboxToggled,
    PlayButton,
}

/// Notification from a card to its owning list, carrying the card index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOutput {
    Clicked(usize),
    DoubleClicked(usize),
    PlayButtonClicked(usize),
    CheckedStateChanged(usize, bool),
}

#[derive(Debug, Clone)]
pub struct SongCard {
    index: usize,
    song: SongRecord,
    state: CardState,
    label_state: LabelState,
    is_playing: bool,
    is_selected: bool,
    is_checked: bool,
    in_selection_mode: bool,
    double_clicked: bool,
    double_click_armed: bool,
    pressed: Option<PointerButton>,
    checkbox_visible: bool,
    buttons_visible: bool,
    shift: ShiftGroup,
    layout: CardLayout,
}

impl SongCard {
    pub fn new(index: usize, song: SongRecord) -> Self {
        let layout = CardLayout::new(&song.artist);
        Self {
            index,
            song,
            state: CardState::NotSelectedLeave,
            label_state: LabelState::NotSelectedNotPlay,
            is_playing: false,
            is_selected: false,
            is_checked: false,
            in_selection_mode: false,
            double_clicked: false,
            double_click_armed: false,
            pressed: None,
            checkbox_visible: false,
            buttons_visible: false,
            shift: ShiftGroup::default(),
            layout,
        }
    }

    /// Feed one input event; returns the notifications it produced
    pub fn handle(&mut self, event: CardEvent, now: Instant) -> Vec<CardOutput> {
        let mut outputs: Vec<CardOutput> = self.tick(now).into_iter().collect();

        match event {
            CardEvent::Enter => {
                self.checkbox_visible = true;
                self.buttons_visible = !self.in_selection_mode;
                self.set_phase(PointerPhase::Enter);
            }
            CardEvent::Leave => {
                if !self.is_selected {
                    self.buttons_visible = false;
                    self.checkbox_visible = self.in_selection_mode;
                }
                self.set_phase(PointerPhase::Leave);
            }
            CardEvent::Press(button) => {
                // The pressed look reflects the selection before this press
                let state = CardState::new(self.is_selected, PointerPhase::Pressed);
                if button == PointerButton::Primary {
                    self.is_selected = true;
                }
                self.set_state(state);
                if self.pressed.replace(button).is_none() {
                    self.shift.press(now);
                }
            }
            CardEvent::Release(button) => {
                if self.pressed != Some(button) {
                    return outputs;
                }
                self.pressed = None;
                self.shift.release(now);
                if button == PointerButton::Primary {
                    self.is_selected = true;
                    self.set_state(CardState::SelectedLeave);
                    self.label_state = LabelState::Selected;
                    outputs.push(CardOutput::Clicked(self.index));

                    if self.double_clicked {
                        self.double_clicked = false;
                        if !self.is_playing {
                            self.double_click_armed = true;
                        }
                    }
                }
            }
            CardEvent::DoubleClick => {
                self.double_clicked = true;
            }
            CardEvent::CheckboxToggled => {
                outputs.push(self.toggle_checked());
            }
            CardEvent::PlayButton => {
                outputs.push(CardOutput::PlayButtonClicked(self.index));
            }
        }

        outputs
    }

    /// Advance the shift animation; emits the armed double click on completion
    pub fn tick(&mut self, now: Instant) -> Option<CardOutput> {
        if self.shift.settle(now) && self.double_click_armed {
            self.double_click_armed = false;
            tracing::debug!(index = self.index, "double click after shift animation");
            return Some(CardOutput::DoubleClicked(self.index));
        }
        None
    }

    pub fn is_animating(&self) -> bool {
        self.shift.is_active()
    }

    /// Column offsets for rendering at `now`
    pub fn shift_offsets(&self, now: Instant) -> [f32; 3] {
        self.shift.offsets(now)
    }

    /// Mark the card as the playing song (or not) and restyle it
    pub fn set_play(&mut self, is_play: bool) {
        self.is_playing = is_play;
        self.is_selected = is_play;
        if is_play {
            self.label_state = LabelState::Selected;
            self.set_state(CardState::SelectedLeave);
        } else {
            self.label_state = LabelState::NotSelectedNotPlay;
            self.set_state(CardState::NotSelectedLeave);
        }
    }

    pub fn set_selected(&mut self, is_selected: bool) {
        self.is_selected = is_selected;
        if is_selected {
            self.set_state(CardState::SelectedLeave);
            self.label_state = LabelState::Selected;
        } else {
            self.buttons_visible = false;
            self.checkbox_visible = self.in_selection_mode;
            self.set_state(CardState::NotSelectedLeave);
            self.label_state = if self.is_playing {
                LabelState::NotSelectedPlay
            } else {
                LabelState::NotSelectedNotPlay
            };
        }
    }

    /// Selection mode keeps the checkbox visible and the buttons hidden
    pub fn set_selection_mode_open(&mut self, open: bool) {
        if self.in_selection_mode == open {
            return;
        }
        self.in_selection_mode = open;
        self.checkbox_visible = open;
        self.buttons_visible = false;
    }

    /// Drive the checkbox programmatically; emits only when the value changes
    pub fn set_checked(&mut self, checked: bool) -> Option<CardOutput> {
        (self.is_checked != checked).then(|| self.toggle_checked())
    }

    fn toggle_checked(&mut self) -> CardOutput {
        self.is_checked = !self.is_checked;
        self.set_selected(self.is_checked);
        // Checking any card opens selection mode; the list decides when it closes
        self.set_selection_mode_open(true);
        self.checkbox_visible = true;
        CardOutput::CheckedStateChanged(self.index, self.is_checked)
    }

    /// Replace the displayed song
    pub fn update_song(&mut self, song: SongRecord) {
        self.layout.set_artist(&song.artist);
        self.song = song;
    }

    pub fn resize(&mut self, width: f32) {
        self.layout.resize(width);
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn song(&self) -> &SongRecord {
        &self.song
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn label_state(&self) -> LabelState {
        self.label_state
    }

    pub fn layout(&self) -> &CardLayout {
        &self.layout
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn is_checked(&self) -> bool {
        self.is_checked
    }

    /// A press is waiting for its release
    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }

    pub fn in_selection_mode(&self) -> bool {
        self.in_selection_mode
    }

    pub fn checkbox_visible(&self) -> bool {
        self.checkbox_visible
    }

    pub fn buttons_visible(&self) -> bool {
        self.buttons_visible
    }

    fn set_phase(&mut self, phase: PointerPhase) {
        self.set_state(CardState::new(self.is_selected, phase));
    }

    fn set_state(&mut self, state: CardState) {
        if self.state != state {
            tracing::trace!(index = self.index, from = %self.state, to = %state, "card state");
        }
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn song(n: u32) -> SongRecord {
        SongRecord {
            file: PathBuf::from(format!("/music/{n}.flac")),
            name: format!("Song {n}"),
            track_number: n,
            artist: "Artist".to_string(),
            duration: 200,
        }
    }

    fn click(card: &mut SongCard, now: Instant) -> Vec<CardOutput> {
        let mut out = card.handle(CardEvent::Press(PointerButton::Primary), now);
        out.extend(card.handle(CardEvent::Release(PointerButton::Primary), now));
        out
    }

    #[test]
    fn new_card_starts_unselected() {
        let card = SongCard::new(0, song(1));
        assert_eq!(card.state(), CardState::NotSelectedLeave);
        assert_eq!(card.label_state(), LabelState::NotSelectedNotPlay);
        assert!(!card.checkbox_visible());
        assert!(!card.buttons_visible());
    }

    #[derive(Debug, Clone, Copy)]
    enum Step {
        Event(CardEvent),
        Select(bool),
    }

    const STEPS: [Step; 8] = [
        Step::Event(CardEvent::Enter),
        Step::Event(CardEvent::Leave),
        Step::Event(CardEvent::Press(PointerButton::Primary)),
        Step::Event(CardEvent::Release(PointerButton::Primary)),
        Step::Event(CardEvent::Press(PointerButton::Secondary)),
        Step::Event(CardEvent::Release(PointerButton::Secondary)),
        Step::Select(true),
        Step::Select(false),
    ];

    /// Every sequence of `len` steps, as indices into `STEPS`
    fn sequences(len: u32) -> impl Iterator<Item = Vec<Step>> {
        let n = STEPS.len();
        (0..n.pow(len)).map(move |mut code| {
            (0..len)
                .map(|_| {
                    let step = STEPS[code % n];
                    code /= n;
                    step
                })
                .collect()
        })
    }

    #[test]
    fn state_follows_selection_for_all_sequences() {
        let t0 = Instant::now();
        for steps in sequences(4) {
            let mut card = SongCard::new(0, song(1));
            let mut now = t0;
            for step in &steps {
                now += Duration::from_millis(50);
                match *step {
                    Step::Select(selected) => card.set_selected(selected),
                    Step::Event(event) => {
                        card.handle(event, now);
                    }
                }

                match *step {
                    Step::Event(CardEvent::Enter) => {
                        assert_eq!(card.state().phase(), PointerPhase::Enter, "{steps:?}");
                    }
                    Step::Event(CardEvent::Leave) | Step::Select(_) => {
                        assert_eq!(card.state().phase(), PointerPhase::Leave, "{steps:?}");
                    }
                    _ => {}
                }
                if card.state().phase() != PointerPhase::Pressed {
                    assert_eq!(card.state().is_selected(), card.is_selected(), "{steps:?}");
                }
            }

            if !card.is_pressed() {
                let later = now + RELEASE_DURATION;
                card.tick(later);
                assert_eq!(card.shift_offsets(later), [0.0; 3], "{steps:?}");
                assert!(!card.is_animating(), "{steps:?}");
            }
        }
    }

    #[test]
    fn release_without_press_is_ignored() {
        let now = Instant::now();
        let mut card = SongCard::new(1, song(1));
        card.handle(CardEvent::Enter, now);

        let out = card.handle(CardEvent::Release(PointerButton::Primary), now);
        assert!(out.is_empty());
        assert!(!card.is_selected());
        assert_eq!(card.state(), CardState::NotSelectedEnter);
        assert_eq!(card.label_state(), LabelState::NotSelectedNotPlay);
        assert!(!card.is_animating());
    }

    #[test]
    fn release_must_match_pressed_button() {
        let now = Instant::now();
        let mut card = SongCard::new(0, song(1));
        card.handle(CardEvent::Press(PointerButton::Secondary), now);
        assert!(card.handle(CardEvent::Release(PointerButton::Primary), now).is_empty());
        assert!(card.is_pressed());

        card.handle(CardEvent::Release(PointerButton::Secondary), now);
        assert!(!card.is_pressed());
        assert!(card.is_animating());
    }

    #[test]
    fn press_release_emits_one_click() {
        let now = Instant::now();
        let mut card = SongCard::new(4, song(1));

        let press = card.handle(CardEvent::Press(PointerButton::Primary), now);
        assert!(press.is_empty());
        assert_eq!(card.state(), CardState::NotSelectedPressed);
        assert!(card.is_selected());

        let release = card.handle(CardEvent::Release(PointerButton::Primary), now);
        assert_eq!(release, vec![CardOutput::Clicked(4)]);
        assert_eq!(card.state(), CardState::SelectedLeave);
        assert_eq!(card.label_state(), LabelState::Selected);
    }

    #[test]
    fn secondary_button_does_not_select_or_click() {
        let now = Instant::now();
        let mut card = SongCard::new(0, song(1));
        card.handle(CardEvent::Press(PointerButton::Secondary), now);
        assert!(!card.is_selected());
        assert_eq!(card.state(), CardState::NotSelectedPressed);

        let out = card.handle(CardEvent::Release(PointerButton::Secondary), now);
        assert!(out.is_empty());
        // The return animation still runs
        assert!(card.is_animating());
    }

    #[test]
    fn double_click_fires_after_animation() {
        let t0 = Instant::now();
        let mut card = SongCard::new(2, song(1));

        click(&mut card, t0);
        card.handle(CardEvent::DoubleClick, t0);
        let out = click(&mut card, t0);
        assert_eq!(out, vec![CardOutput::Clicked(2)]);

        assert_eq!(card.tick(t0 + Duration::from_millis(200)), None);
        let done = t0 + RELEASE_DURATION;
        assert_eq!(card.tick(done), Some(CardOutput::DoubleClicked(2)));
        assert_eq!(card.tick(done + Duration::from_millis(10)), None);
    }

    #[test]
    fn double_click_while_playing_is_ignored() {
        let t0 = Instant::now();
        let mut card = SongCard::new(0, song(1));
        card.set_play(true);

        card.handle(CardEvent::DoubleClick, t0);
        click(&mut card, t0);
        assert_eq!(card.tick(t0 + Duration::from_secs(1)), None);
    }

    #[test]
    fn interrupted_animation_keeps_double_click_armed() {
        let t0 = Instant::now();
        let mut card = SongCard::new(1, song(1));
        card.handle(CardEvent::DoubleClick, t0);
        click(&mut card, t0);

        let t1 = t0 + Duration::from_millis(100);
        let out = click(&mut card, t1);
        assert_eq!(out, vec![CardOutput::Clicked(1)]);
        assert_eq!(card.tick(t1 + Duration::from_millis(399)), None);
        assert_eq!(
            card.tick(t1 + RELEASE_DURATION),
            Some(CardOutput::DoubleClicked(1))
        );
    }

    #[test]
    fn completion_is_flushed_before_next_event() {
        let t0 = Instant::now();
        let mut card = SongCard::new(3, song(1));
        card.handle(CardEvent::DoubleClick, t0);
        click(&mut card, t0);

        let later = t0 + Duration::from_secs(1);
        let out = card.handle(CardEvent::Enter, later);
        assert_eq!(out, vec![CardOutput::DoubleClicked(3)]);
    }

    #[test]
    fn press_shifts_columns_immediately() {
        let t0 = Instant::now();
        let mut card = SongCard::new(0, song(1));
        card.handle(CardEvent::Press(PointerButton::Primary), t0);
        assert_eq!(card.shift_offsets(t0), SHIFT_DELTAS);

        card.handle(CardEvent::Release(PointerButton::Primary), t0);
        assert_eq!(card.shift_offsets(t0 + RELEASE_DURATION), [0.0; 3]);
    }

    #[test]
    fn set_play_forces_selected_leave() {
        let now = Instant::now();
        let mut card = SongCard::new(0, song(1));
        card.handle(CardEvent::Enter, now);
        card.handle(CardEvent::Press(PointerButton::Secondary), now);

        card.set_play(true);
        assert!(card.is_selected());
        assert!(card.is_playing());
        assert_eq!(card.state(), CardState::SelectedLeave);
        assert_eq!(card.label_state(), LabelState::Selected);

        card.set_play(false);
        assert!(!card.is_selected());
        assert_eq!(card.state(), CardState::NotSelectedLeave);
        assert_eq!(card.label_state(), LabelState::NotSelectedNotPlay);
    }

    #[test]
    fn deselecting_playing_card_keeps_play_label() {
        let mut card = SongCard::new(0, song(1));
        card.set_play(true);
        card.set_selected(false);
        assert_eq!(card.label_state(), LabelState::NotSelectedPlay);
    }

    #[test]
    fn checkbox_toggle_selects_and_opens_selection_mode() {
        let now = Instant::now();
        let mut card = SongCard::new(5, song(1));

        let out = card.handle(CardEvent::CheckboxToggled, now);
        assert_eq!(out, vec![CardOutput::CheckedStateChanged(5, true)]);
        assert!(card.is_checked());
        assert!(card.is_selected());
        assert!(card.in_selection_mode());
        assert!(card.checkbox_visible());
        assert!(!card.buttons_visible());

        let out = card.handle(CardEvent::CheckboxToggled, now);
        assert_eq!(out, vec![CardOutput::CheckedStateChanged(5, false)]);
        assert!(!card.is_selected());
        assert_eq!(card.state(), CardState::NotSelectedLeave);
    }

    #[test]
    fn set_checked_only_emits_on_change() {
        let mut card = SongCard::new(0, song(1));
        assert_eq!(card.set_checked(false), None);
        assert_eq!(
            card.set_checked(true),
            Some(CardOutput::CheckedStateChanged(0, true))
        );
        assert_eq!(card.set_checked(true), None);
    }

    #[test]
    fn selection_mode_hides_buttons_on_enter() {
        let now = Instant::now();
        let mut card = SongCard::new(0, song(1));
        card.set_selection_mode_open(true);
        card.handle(CardEvent::Enter, now);
        assert!(card.checkbox_visible());
        assert!(!card.buttons_visible());

        card.handle(CardEvent::Leave, now);
        assert!(card.checkbox_visible());

        card.set_selection_mode_open(false);
        card.handle(CardEvent::Enter, now);
        assert!(card.buttons_visible());
        card.handle(CardEvent::Leave, now);
        assert!(!card.checkbox_visible());
        assert!(!card.buttons_visible());
    }

    #[test]
    fn play_button_reports_index() {
        let mut card = SongCard::new(7, song(1));
        let out = card.handle(CardEvent::PlayButton, Instant::now());
        assert_eq!(out, vec![CardOutput::PlayButtonClicked(7)]);
    }

    #[test]
    fn update_song_replaces_record() {
        let mut card = SongCard::new(0, song(1));
        card.update_song(song(2));
        assert_eq!(card.song().name, "Song 2");
        assert_eq!(card.song().track_number, 2);
    }
}
