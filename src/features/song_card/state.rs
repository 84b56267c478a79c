//! Visual state tags for a song card

use std::fmt;

/// Pointer relationship between the cursor and the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Leave,
    Enter,
    Pressed,
}

/// Combined selection + pointer state of a song card
///
/// Exactly six values; the renderer looks up background and border
/// colors from this tag alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardState {
    #[default]
    NotSelectedLeave,
    NotSelectedEnter,
    NotSelectedPressed,
    SelectedLeave,
    SelectedEnter,
    SelectedPressed,
}

impl CardState {
    pub fn new(selected: bool, phase: PointerPhase) -> Self {
        match (selected, phase) {
            (false, PointerPhase::Leave) => CardState::NotSelectedLeave,
            (false, PointerPhase::Enter) => CardState::NotSelectedEnter,
            (false, PointerPhase::Pressed) => CardState::NotSelectedPressed,
            (true, PointerPhase::Leave) => CardState::SelectedLeave,
            (true, PointerPhase::Enter) => CardState::SelectedEnter,
            (true, PointerPhase::Pressed) => CardState::SelectedPressed,
        }
    }

    pub fn is_selected(self) -> bool {
        matches!(
            self,
            CardState::SelectedLeave | CardState::SelectedEnter | CardState::SelectedPressed
        )
    }

    pub fn phase(self) -> PointerPhase {
        match self {
            CardState::NotSelectedLeave | CardState::SelectedLeave => PointerPhase::Leave,
            CardState::NotSelectedEnter | CardState::SelectedEnter => PointerPhase::Enter,
            CardState::NotSelectedPressed | CardState::SelectedPressed => PointerPhase::Pressed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CardState::NotSelectedLeave => "notSelected-leave",
            CardState::NotSelectedEnter => "notSelected-enter",
            CardState::NotSelectedPressed => "notSelected-pressed",
            CardState::SelectedLeave => "selected-leave",
            CardState::SelectedEnter => "selected-enter",
            CardState::SelectedPressed => "selected-pressed",
        }
    }
}

impl fmt::Display for CardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color/visibility state shared by the checkbox, buttons and labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelState {
    #[default]
    NotSelectedNotPlay,
    NotSelectedPlay,
    Selected,
}

impl LabelState {
    pub fn as_str(self) -> &'static str {
        match self {
            LabelState::NotSelectedNotPlay => "notSelected-notPlay",
            LabelState::NotSelectedPlay => "notSelected-play",
            LabelState::Selected => "selected",
        }
    }
}

impl fmt::Display for LabelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_parts_round_trip() {
        for selected in [false, true] {
            for phase in [PointerPhase::Leave, PointerPhase::Enter, PointerPhase::Pressed] {
                let state = CardState::new(selected, phase);
                assert_eq!(state.is_selected(), selected);
                assert_eq!(state.phase(), phase);
            }
        }
    }

    #[test]
    fn state_names() {
        assert_eq!(CardState::default().to_string(), "notSelected-leave");
        assert_eq!(CardState::SelectedPressed.as_str(), "selected-pressed");
        assert_eq!(LabelState::default().as_str(), "notSelected-notPlay");
    }
}
