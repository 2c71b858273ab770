use crate::config::MatchConfig;
use crate::r#match::{
    EventCollection, GameTickContext, GoalPosition, MatchField, PlayerEvent, TeamSide, direction,
};
use log::debug;

/// Every ownership change of the ball goes through here.
pub struct BallPossession;

impl BallPossession {
    /// The controlled player picks up a free ball it overlaps.
    pub fn try_take_ball(
        field: &mut MatchField,
        config: &MatchConfig,
        player_id: u32,
        events: &mut EventCollection,
    ) -> bool {
        if field.ball.is_owned() {
            return false;
        }

        let Some(player) = field.get_player(player_id) else {
            return false;
        };

        if !player.touches(field.ball.position, config.possession_distance()) {
            return false;
        }

        let (position, heading) = (player.position, player.heading);
        field
            .ball
            .attach(player_id, position, heading, config.possession_distance());

        events.add_player_event(PlayerEvent::GainBall(player_id));
        true
    }

    /// Keeps an owned ball at the carrier's feet, along its heading.
    pub fn carry(field: &mut MatchField, config: &MatchConfig, player_id: u32) {
        if field.ball.current_owner != Some(player_id) {
            return;
        }

        if let Some(player) = field.get_player(player_id) {
            let (position, heading) = (player.position, player.heading);
            field
                .ball
                .follow(position, heading, config.possession_distance());
        }
    }

    /// Human shot: launch speed grows with the ball's offset from the shooter.
    pub fn shoot(
        field: &mut MatchField,
        config: &MatchConfig,
        player_id: u32,
        events: &mut EventCollection,
    ) {
        if field.ball.current_owner != Some(player_id) {
            return;
        }

        let Some(player) = field.get_player(player_id) else {
            return;
        };

        let velocity = (field.ball.position - player.position) * config.shot_launch_factor;
        field.ball.kick(player_id, velocity);

        debug!("player {} shoots, velocity = {:?}", player_id, velocity);

        events.add_player_event(PlayerEvent::Shoot(player_id));
    }

    /// AI players never carry the ball: on contact they strike it at the goal
    /// their side attacks with a fixed speed.
    pub fn shoot_at_goal(
        field: &mut MatchField,
        config: &MatchConfig,
        goals: &GoalPosition,
        tick_context: &GameTickContext,
        player_id: u32,
        events: &mut EventCollection,
    ) {
        let Some(player) = field.get_player(player_id) else {
            return;
        };

        let shooter_position = tick_context
            .players
            .position(player_id)
            .unwrap_or(player.position);

        let target = goals.attacked_by(player.side);
        let velocity = direction(shooter_position, target) * config.ai_shot_speed;

        field.ball.kick(player_id, velocity);

        debug!("player {} shoots at {:?}, velocity = {:?}", player_id, target, velocity);

        events.add_player_event(PlayerEvent::ShootAtGoal(player_id));
    }

    /// Passive hand-off: while the ball is free, every touching home player
    /// takes control in roster order, so the last one keeps it.
    pub fn transfer_control(
        field: &mut MatchField,
        config: &MatchConfig,
        events: &mut EventCollection,
    ) {
        if field.ball.is_owned() {
            return;
        }

        let ball_position = field.ball.position;
        let toucher = field
            .players
            .iter()
            .filter(|p| {
                p.side == TeamSide::Home && p.touches(ball_position, config.possession_distance())
            })
            .last()
            .map(|p| p.id);

        if let Some(player_id) = toucher {
            if field.controlled_player != Some(player_id) {
                field.set_controlled(player_id);
                events.add_player_event(PlayerEvent::TakeControl(player_id));
            }
        }
    }
}
