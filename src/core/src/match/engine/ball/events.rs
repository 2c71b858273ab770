use crate::commentary::Commentator;
use crate::r#match::{MatchContext, MatchField, TeamSide};
use log::{debug, info};

#[derive(Copy, Clone, Debug)]
pub enum BallEvent {
    Goal(GoalSide),
}

/// The goal the ball went into.
#[derive(Copy, Clone, Debug, PartialOrd, PartialEq)]
pub enum GoalSide {
    Home,
    Away,
}

impl GoalSide {
    pub fn scoring_team(self) -> TeamSide {
        match self {
            GoalSide::Home => TeamSide::Away,
            GoalSide::Away => TeamSide::Home,
        }
    }
}

pub struct BallEventDispatcher;

impl BallEventDispatcher {
    pub fn dispatch(
        event: BallEvent,
        field: &mut MatchField,
        context: &mut MatchContext,
        commentator: &mut Commentator,
    ) {
        debug!("Ball event: {:?}", event);

        match event {
            BallEvent::Goal(side) => {
                let scorer = side.scoring_team();
                context.score.increment(scorer);

                info!(
                    "goal for {} ({}-{})",
                    context.teams.name(scorer),
                    context.score.home,
                    context.score.away
                );

                commentator.announce(&format!("Goal for {}!", context.teams.name(scorer)));

                field.reset_players_positions();
            }
        }
    }
}
