use serde::Serialize;
use std::fmt::{Display, Formatter};

/// A sent-off player leaves the roster, so there is no variant for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum DisciplinaryState {
    #[default]
    Clean,
    Booked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Card {
    Yellow,
    Red,
}

impl DisciplinaryState {
    pub fn next_card(self) -> Card {
        match self {
            DisciplinaryState::Clean => Card::Yellow,
            DisciplinaryState::Booked => Card::Red,
        }
    }

    pub fn book(self) -> Self {
        DisciplinaryState::Booked
    }

    pub fn is_booked(self) -> bool {
        self == DisciplinaryState::Booked
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Card::Yellow => write!(f, "Yellow"),
            Card::Red => write!(f, "Red"),
        }
    }
}
