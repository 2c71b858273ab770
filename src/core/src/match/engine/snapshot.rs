use crate::r#match::{CardBanner, MatchContext, MatchField, MatchState, Score, TeamSide};
use serde::Serialize;

/// Read-only view of a match handed to renderers once per frame.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSnapshot {
    pub tick: u64,
    pub state: MatchState,
    pub score: Score,
    pub players: Vec<PlayerSnapshot>,
    pub ball: BallSnapshot,
    pub banner: CardBanner,
    /// Point the camera follows: the controlled player, or the ball when the
    /// human has nobody left.
    pub camera_focus: (f32, f32),
    pub final_message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub id: u32,
    pub side: TeamSide,
    pub number: u8,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub is_controlled: bool,
    pub booked: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BallSnapshot {
    pub x: f32,
    pub y: f32,
    pub owner: Option<u32>,
}

impl MatchSnapshot {
    pub fn capture(field: &MatchField, context: &MatchContext, state: MatchState) -> Self {
        let players = field
            .players
            .iter()
            .map(|p| PlayerSnapshot {
                id: p.id,
                side: p.side,
                number: p.number,
                name: p.name.clone(),
                x: p.position.x,
                y: p.position.y,
                is_controlled: field.is_controlled(p.id),
                booked: p.discipline.is_booked(),
            })
            .collect();

        let focus = field
            .controlled()
            .map(|p| p.position)
            .unwrap_or(field.ball.position);

        MatchSnapshot {
            tick: context.tick,
            state,
            score: context.score,
            players,
            ball: BallSnapshot {
                x: field.ball.position.x,
                y: field.ball.position.y,
                owner: field.ball.current_owner,
            },
            banner: context.banner.clone(),
            camera_focus: (focus.x, focus.y),
            final_message: context.final_message.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub trait MatchRenderer {
    fn render(&mut self, snapshot: &MatchSnapshot);
}
