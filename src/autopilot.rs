use derby_core::{InputState, MatchConfig, MatchSnapshot};
use nalgebra::Vector2;

/// Where the controlled player's input comes from, polled once per frame.
pub trait InputSource {
    fn poll(&mut self, snapshot: &MatchSnapshot) -> InputState;
}

/// Stand-in for a keyboard: runs at the ball, then carries it towards the
/// away goal and shoots once in range.
pub struct Autopilot {
    goal: Vector2<f32>,
    shooting_range: f32,
    dead_zone: f32,
}

impl Autopilot {
    pub fn new(config: &MatchConfig) -> Self {
        Autopilot {
            goal: Vector2::new(config.goal_line, 0.0),
            shooting_range: config.goal_line / 2.0,
            dead_zone: config.human_speed,
        }
    }

    fn steer(&self, from: Vector2<f32>, to: Vector2<f32>) -> InputState {
        let delta = to - from;

        InputState {
            up: delta.y < -self.dead_zone,
            down: delta.y > self.dead_zone,
            left: delta.x < -self.dead_zone,
            right: delta.x > self.dead_zone,
            shoot: false,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, snapshot: &MatchSnapshot) -> InputState {
        let Some(me) = snapshot.players.iter().find(|p| p.is_controlled) else {
            return InputState::default();
        };

        let position = Vector2::new(me.x, me.y);

        if snapshot.ball.owner != Some(me.id) {
            return self.steer(position, Vector2::new(snapshot.ball.x, snapshot.ball.y));
        }

        let mut input = self.steer(position, self.goal);
        input.shoot = (self.goal - position).norm() < self.shooting_range;
        input
    }
}
