use crate::config::MatchConfig;
use crate::r#match::{CardBanner, GoalPosition, Score, TeamSide};

pub struct MatchContext {
    pub config: MatchConfig,
    pub score: Score,
    pub goal_positions: GoalPosition,
    pub teams: TeamNames,
    pub banner: CardBanner,
    pub final_message: Option<String>,

    pub tick: u64,
}

impl MatchContext {
    pub fn new(config: MatchConfig, home: &str, away: &str) -> Self {
        MatchContext {
            goal_positions: GoalPosition::new(&config),
            config,
            score: Score::new(),
            teams: TeamNames {
                home: home.to_string(),
                away: away.to_string(),
            },
            banner: CardBanner::default(),
            final_message: None,
            tick: 0,
        }
    }

    /// Clears everything a fresh kickoff should not inherit.
    pub fn reset(&mut self) {
        self.score = Score::new();
        self.banner.hide();
        self.final_message = None;
        self.tick = 0;
    }

    pub fn increment_tick(&mut self) {
        self.tick += 1;
    }
}

#[derive(Debug, Clone)]
pub struct TeamNames {
    pub home: String,
    pub away: String,
}

impl TeamNames {
    pub fn name(&self, side: TeamSide) -> &str {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }
}
