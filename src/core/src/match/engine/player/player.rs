use crate::config::MatchConfig;
use crate::r#match::{DisciplinaryState, GameTickContext, SteeringBehavior};
use nalgebra::Vector2;
use rand::RngExt;
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    /// Facing direction at kickoff.
    fn kickoff_heading(self) -> Vector2<f32> {
        match self {
            TeamSide::Home => Vector2::new(1.0, 0.0),
            TeamSide::Away => Vector2::new(-1.0, 0.0),
        }
    }
}

impl Display for TeamSide {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            TeamSide::Home => write!(f, "Home"),
            TeamSide::Away => write!(f, "Away"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchPlayer {
    pub id: u32,
    pub side: TeamSide,
    pub number: u8,
    pub name: String,
    pub position: Vector2<f32>,
    pub start_position: Vector2<f32>,
    /// Last non-zero movement direction, always unit length.
    pub heading: Vector2<f32>,
    pub ai_controlled: bool,
    pub discipline: DisciplinaryState,
}

impl MatchPlayer {
    pub fn new(id: u32, side: TeamSide, number: u8, name: String, position: Vector2<f32>) -> Self {
        MatchPlayer {
            id,
            side,
            number,
            name,
            position,
            start_position: position,
            heading: side.kickoff_heading(),
            ai_controlled: side == TeamSide::Away,
            discipline: DisciplinaryState::Clean,
        }
    }

    #[inline]
    pub fn distance_to(&self, point: Vector2<f32>) -> f32 {
        (point - self.position).norm()
    }

    /// Circles of radius `reach` around player and point centres overlap.
    #[inline]
    pub fn touches(&self, point: Vector2<f32>, reach: f32) -> bool {
        self.distance_to(point) < reach
    }

    pub fn move_by(&mut self, delta: Vector2<f32>) {
        if delta.x.is_nan() || delta.y.is_nan() {
            return;
        }

        self.position += delta;

        let norm = delta.norm();
        if norm > 0.0 {
            self.heading = delta / norm;
        }
    }

    pub fn reset_position(&mut self) {
        self.position = self.start_position;
        self.heading = self.side.kickoff_heading();
    }

    /// Velocity for this tick when nobody is steering the player by hand.
    pub fn steering_velocity<R: RngExt>(
        &self,
        config: &MatchConfig,
        tick_context: &GameTickContext,
        rng: &mut R,
    ) -> Vector2<f32> {
        let ball_position = tick_context.ball.position;

        if self.ai_controlled {
            let seek = SteeringBehavior::Seek {
                target: ball_position,
                speed: config.ai_speed,
            }
            .calculate(self.position)
            .velocity;

            let squad: Vec<Vector2<f32>> = tick_context
                .players
                .ai_players()
                .filter(|p| p.player_id != self.id)
                .map(|p| p.position)
                .collect();

            let separation = SteeringBehavior::Separate {
                neighbours: &squad,
                min_distance: config.min_distance,
                strength: config.cohesion_strength,
            }
            .calculate(self.position + seek)
            .velocity;

            seek + separation
        } else {
            let speed = rng.random_range(0.0..config.human_speed);

            let seek = SteeringBehavior::Seek {
                target: ball_position,
                speed,
            }
            .calculate(self.position)
            .velocity;

            let ball_avoidance = SteeringBehavior::Separate {
                neighbours: std::slice::from_ref(&ball_position),
                min_distance: config.min_distance,
                strength: config.cohesion_strength,
            }
            .calculate(self.position)
            .velocity;

            let teammates: Vec<Vector2<f32>> = tick_context
                .players
                .unassigned(self.side)
                .filter(|p| p.player_id != self.id)
                .map(|p| p.position)
                .collect();

            let separation = SteeringBehavior::Separate {
                neighbours: &teammates,
                min_distance: config.min_distance,
                strength: config.cohesion_strength,
            }
            .calculate(self.position + seek + ball_avoidance)
            .velocity;

            seek + ball_avoidance + separation
        }
    }
}
