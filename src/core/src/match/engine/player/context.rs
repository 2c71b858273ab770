use crate::r#match::{MatchField, TeamSide};
use nalgebra::Vector2;

/// Positions frozen at the start of a steering pass. Every player steers
/// against this snapshot, so the order of the roster does not matter.
pub struct GameTickContext {
    pub ball: BallMetadata,
    pub players: PlayerPositions,
}

impl GameTickContext {
    pub fn new(field: &MatchField) -> Self {
        GameTickContext {
            ball: BallMetadata::from(field),
            players: PlayerPositions::from(field),
        }
    }
}

pub struct BallMetadata {
    pub position: Vector2<f32>,
}

impl From<&MatchField> for BallMetadata {
    fn from(field: &MatchField) -> Self {
        BallMetadata {
            position: field.ball.position,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlayerPositionItem {
    pub player_id: u32,
    pub side: TeamSide,
    pub position: Vector2<f32>,
    pub ai_controlled: bool,
    pub is_controlled: bool,
}

pub struct PlayerPositions {
    pub items: Vec<PlayerPositionItem>,
}

impl From<&MatchField> for PlayerPositions {
    fn from(field: &MatchField) -> Self {
        PlayerPositions {
            items: field
                .players
                .iter()
                .map(|p| PlayerPositionItem {
                    player_id: p.id,
                    side: p.side,
                    position: p.position,
                    ai_controlled: p.ai_controlled,
                    is_controlled: field.is_controlled(p.id),
                })
                .collect(),
        }
    }
}

impl PlayerPositions {
    pub fn position(&self, player_id: u32) -> Option<Vector2<f32>> {
        self.items
            .iter()
            .find(|p| p.player_id == player_id)
            .map(|p| p.position)
    }

    pub fn ai_players(&self) -> impl Iterator<Item = &PlayerPositionItem> {
        self.items.iter().filter(|p| p.ai_controlled)
    }

    /// Non-AI players of `side` that nobody is steering by hand.
    pub fn unassigned(&self, side: TeamSide) -> impl Iterator<Item = &PlayerPositionItem> {
        self.items
            .iter()
            .filter(move |p| p.side == side && !p.ai_controlled && !p.is_controlled)
    }
}
