use crate::r#match::TeamSide;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

impl Score {
    pub fn new() -> Self {
        Score::default()
    }

    pub fn increment_home_goals(&mut self) {
        self.home = self.home.saturating_add(1);
    }

    pub fn increment_away_goals(&mut self) {
        self.away = self.away.saturating_add(1);
    }

    pub fn increment(&mut self, side: TeamSide) {
        match side {
            TeamSide::Home => self.increment_home_goals(),
            TeamSide::Away => self.increment_away_goals(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchOutcome {
    /// The home side ran out of players.
    Forfeit { winner: TeamSide },
}

impl MatchOutcome {
    pub fn winner(&self) -> TeamSide {
        match *self {
            MatchOutcome::Forfeit { winner } => winner,
        }
    }
}
