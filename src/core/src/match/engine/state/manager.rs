use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchState {
    Initial,
    Playing,
    Ended,
}

impl Display for MatchState {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            MatchState::Initial => write!(f, "Initial"),
            MatchState::Playing => write!(f, "Playing"),
            MatchState::Ended => write!(f, "Ended"),
        }
    }
}

pub struct StateManager {
    current_state: MatchState,
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StateManager {
    pub fn new() -> Self {
        StateManager {
            current_state: MatchState::Initial,
        }
    }

    pub fn current(&self) -> MatchState {
        self.current_state
    }

    pub fn is_playing(&self) -> bool {
        self.current_state == MatchState::Playing
    }

    pub fn next(&mut self) -> Option<MatchState> {
        let next_state = Self::get_next_state(self.current_state);

        if next_state == self.current_state {
            return None;
        }

        self.current_state = next_state;
        Some(self.current_state)
    }

    fn get_next_state(current_state: MatchState) -> MatchState {
        match current_state {
            MatchState::Initial => MatchState::Playing,
            MatchState::Playing => MatchState::Ended,
            MatchState::Ended => MatchState::Ended,
        }
    }
}
