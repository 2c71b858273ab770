use crate::config::MatchConfig;
use crate::r#match::{BallPossession, EventCollection, MatchField};
use nalgebra::Vector2;

/// Held state of every recognised control, sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
}

impl InputState {
    /// Unit vector for the held direction keys, zero when none are held or
    /// opposing keys cancel out. Screen coordinates: down is +y.
    pub fn movement_intent(&self) -> Vector2<f32> {
        let axis = |negative: bool, positive: bool| (positive as i8 - negative as i8) as f32;

        let intent = Vector2::new(axis(self.left, self.right), axis(self.up, self.down));

        let norm = intent.norm();
        if norm > 0.0 { intent / norm } else { intent }
    }
}

pub struct InputResolver;

impl InputResolver {
    pub fn resolve(
        field: &mut MatchField,
        config: &MatchConfig,
        input: &InputState,
        events: &mut EventCollection,
    ) {
        let Some(player_id) = field.controlled_player else {
            return;
        };

        let intent = input.movement_intent();

        let Some(player) = field.get_player_mut(player_id) else {
            return;
        };
        player.move_by(intent * config.human_speed);

        BallPossession::try_take_ball(field, config, player_id, events);

        if field.ball.current_owner != Some(player_id) {
            return;
        }

        if intent != Vector2::zeros() {
            BallPossession::carry(field, config, player_id);
        }

        if input.shoot {
            BallPossession::shoot(field, config, player_id, events);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::{MatchPlayer, TeamSide};

    fn field_with_controller() -> MatchField {
        let controller = MatchPlayer::new(
            1,
            TeamSide::Home,
            10,
            String::from("Arda Güler"),
            Vector2::new(-220.0, -275.0),
        );
        MatchField::new(vec![controller], Some(1))
    }

    #[test]
    fn test_intent_is_unit_or_zero() {
        let none = InputState::default();
        assert_eq!(none.movement_intent(), Vector2::zeros());

        let cancel = InputState {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(cancel.movement_intent(), Vector2::zeros());

        let diagonal = InputState {
            up: true,
            right: true,
            ..Default::default()
        };
        let intent = diagonal.movement_intent();
        assert!((intent.norm() - 1.0).abs() < 1e-6);
        assert!(intent.x > 0.0 && intent.y < 0.0);
    }

    #[test]
    fn test_move_without_ball() {
        let config = MatchConfig::default();
        let mut field = field_with_controller();
        let mut events = EventCollection::new();

        let input = InputState {
            down: true,
            ..Default::default()
        };
        InputResolver::resolve(&mut field, &config, &input, &mut events);

        let player = field.get_player(1).unwrap();
        assert!((player.position.y - (-275.0 + config.human_speed)).abs() < 1e-4);
        assert_eq!(field.ball.current_owner, None);
        assert!(events.is_empty());
    }

    #[test]
    fn test_pickup_then_carry_right() {
        let config = MatchConfig::default();
        let mut field = field_with_controller();
        let mut events = EventCollection::new();

        field.ball.position = Vector2::new(-200.0, -275.0);

        InputResolver::resolve(&mut field, &config, &InputState::default(), &mut events);
        assert_eq!(field.ball.current_owner, Some(1));
        assert_eq!(events.len(), 1);

        let input = InputState {
            right: true,
            ..Default::default()
        };
        InputResolver::resolve(&mut field, &config, &input, &mut events);

        let player = field.get_player(1).unwrap();
        assert!((player.position.x - (-220.0 + config.human_speed)).abs() < 1e-4);
        let expected_x = player.position.x + config.possession_distance();
        assert!((field.ball.position.x - expected_x).abs() < 1e-4);
        assert!((field.ball.position.y - player.position.y).abs() < 1e-4);
    }

    #[test]
    fn test_idle_carrier_leaves_ball_in_place() {
        let config = MatchConfig::default();
        let mut field = field_with_controller();
        let mut events = EventCollection::new();

        field.ball.position = Vector2::new(-210.0, -275.0);
        InputResolver::resolve(&mut field, &config, &InputState::default(), &mut events);

        let before = field.ball.position;
        InputResolver::resolve(&mut field, &config, &InputState::default(), &mut events);
        assert_eq!(field.ball.position, before);
    }

    #[test]
    fn test_shoot_without_moving() {
        let config = MatchConfig::default();
        let mut field = field_with_controller();
        let mut events = EventCollection::new();

        field.ball.position = Vector2::new(-210.0, -275.0);
        InputResolver::resolve(&mut field, &config, &InputState::default(), &mut events);
        assert_eq!(field.ball.current_owner, Some(1));

        let input = InputState {
            shoot: true,
            ..Default::default()
        };
        InputResolver::resolve(&mut field, &config, &input, &mut events);

        assert_eq!(field.ball.current_owner, None);
        // offset (33, 0) scaled by the launch factor
        let expected_x = config.possession_distance() * config.shot_launch_factor;
        assert!((field.ball.velocity.x - expected_x).abs() < 1e-4);
        assert!(field.ball.velocity.y.abs() < 1e-5);
    }
}
