use crate::r#match::GoalPosition;
use crate::r#match::ball::events::BallEvent;
use crate::r#match::events::EventCollection;
use nalgebra::Vector2;

pub struct Ball {
    pub start_position: Vector2<f32>,
    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,

    pub previous_owner: Option<u32>,
    pub current_owner: Option<u32>,
}

impl Ball {
    pub fn with_coord(x: f32, y: f32) -> Self {
        Ball {
            start_position: Vector2::new(x, y),
            position: Vector2::new(x, y),
            velocity: Vector2::zeros(),
            previous_owner: None,
            current_owner: None,
        }
    }

    #[inline]
    pub fn is_owned(&self) -> bool {
        self.current_owner.is_some()
    }

    /// Integrates a free ball one tick. Owned balls are positioned by their
    /// carrier instead.
    pub fn update(&mut self, friction: f32) {
        if self.is_owned() {
            return;
        }

        self.move_to();
        self.velocity *= friction;
    }

    fn move_to(&mut self) {
        if !self.velocity.x.is_nan() {
            self.position.x += self.velocity.x;
        }

        if !self.velocity.y.is_nan() {
            self.position.y += self.velocity.y;
        }
    }

    pub fn check_goal(&self, goals: &GoalPosition, events: &mut EventCollection) {
        if self.is_owned() {
            return;
        }

        if let Some(goal_side) = goals.is_goal(self.position) {
            events.add_ball_event(BallEvent::Goal(goal_side));
        }
    }

    pub fn attach(
        &mut self,
        owner_id: u32,
        owner_position: Vector2<f32>,
        heading: Vector2<f32>,
        offset: f32,
    ) {
        if self.current_owner != Some(owner_id) {
            self.previous_owner = self.current_owner;
        }

        self.current_owner = Some(owner_id);
        self.velocity = Vector2::zeros();
        self.follow(owner_position, heading, offset);
    }

    pub fn follow(&mut self, owner_position: Vector2<f32>, heading: Vector2<f32>, offset: f32) {
        self.position = owner_position + heading * offset;
    }

    pub fn kick(&mut self, player_id: u32, velocity: Vector2<f32>) {
        self.current_owner = None;
        self.previous_owner = Some(player_id);
        self.velocity = velocity;
    }

    /// Drops the ball where it lies, e.g. when its carrier leaves the pitch.
    pub fn release(&mut self) {
        if let Some(owner) = self.current_owner.take() {
            self.previous_owner = Some(owner);
        }
    }

    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.velocity = Vector2::zeros();
        self.previous_owner = None;
        self.current_owner = None;
    }
}
