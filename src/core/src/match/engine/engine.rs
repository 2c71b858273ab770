use crate::config::MatchConfig;
use crate::r#match::ball::events::GoalSide;
use crate::r#match::{
    BallPossession, EventCollection, GameTickContext, InputResolver, InputState, MatchContext,
    MatchField, TeamSide,
};
use itertools::Itertools;
use nalgebra::Vector2;
use rand::RngExt;

pub struct FootballEngine;

impl FootballEngine {
    /// One gameplay step: the human's input, then everybody else, then the
    /// ball. Side effects that need announcing are left in `events`.
    pub fn game_tick<R: RngExt>(
        field: &mut MatchField,
        context: &MatchContext,
        input: &InputState,
        rng: &mut R,
        events: &mut EventCollection,
    ) {
        InputResolver::resolve(field, &context.config, input, events);

        Self::play_players(field, context, rng, events);
        Self::play_ball(field, context, events);
    }

    fn play_players<R: RngExt>(
        field: &mut MatchField,
        context: &MatchContext,
        rng: &mut R,
        events: &mut EventCollection,
    ) {
        let config = &context.config;
        let tick_context = GameTickContext::new(field);

        let shooter = Self::find_ai_shooter(&tick_context, config);

        let moves = field
            .players
            .iter()
            .filter(|p| !field.is_controlled(p.id))
            .map(|p| (p.id, p.steering_velocity(config, &tick_context, rng)))
            .collect_vec();

        if let Some(player_id) = shooter {
            BallPossession::shoot_at_goal(
                field,
                config,
                &context.goal_positions,
                &tick_context,
                player_id,
                events,
            );
        }

        for (player_id, velocity) in moves {
            if let Some(player) = field.get_player_mut(player_id) {
                player.move_by(velocity);
            }
        }
    }

    /// First AI player, in roster order, within reach of the ball before
    /// anybody moves.
    fn find_ai_shooter(tick_context: &GameTickContext, config: &MatchConfig) -> Option<u32> {
        let ball_position = tick_context.ball.position;

        tick_context
            .players
            .ai_players()
            .find(|p| (ball_position - p.position).norm() < config.possession_distance())
            .map(|p| p.player_id)
    }

    fn play_ball(field: &mut MatchField, context: &MatchContext, events: &mut EventCollection) {
        field.ball.update(context.config.friction);

        BallPossession::transfer_control(field, &context.config, events);

        field.ball.check_goal(&context.goal_positions, events);
    }
}

/// Goal mouths at either end of the pitch. The home side defends `home`.
#[derive(Debug, Clone, Copy)]
pub struct GoalPosition {
    pub home: Vector2<f32>,
    pub away: Vector2<f32>,
    pub half_height: f32,
}

impl GoalPosition {
    pub fn new(config: &MatchConfig) -> Self {
        GoalPosition {
            home: Vector2::new(-config.goal_line, 0.0),
            away: Vector2::new(config.goal_line, 0.0),
            half_height: config.goal_half_height,
        }
    }

    pub fn is_goal(&self, ball_position: Vector2<f32>) -> Option<GoalSide> {
        if ball_position.x < self.home.x
            && (ball_position.y - self.home.y).abs() < self.half_height
        {
            return Some(GoalSide::Home);
        }

        if ball_position.x > self.away.x
            && (ball_position.y - self.away.y).abs() < self.half_height
        {
            return Some(GoalSide::Away);
        }

        None
    }

    /// Centre of the goal `side` shoots at.
    pub fn attacked_by(&self, side: TeamSide) -> Vector2<f32> {
        match side {
            TeamSide::Home => self.away,
            TeamSide::Away => self.home,
        }
    }
}
