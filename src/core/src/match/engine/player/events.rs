use crate::commentary::Commentator;
use crate::r#match::MatchField;
use log::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerEvent {
    GainBall(u32),
    TakeControl(u32),
    Shoot(u32),
    ShootAtGoal(u32),
}

impl PlayerEvent {
    pub fn player_id(&self) -> u32 {
        match *self {
            PlayerEvent::GainBall(id)
            | PlayerEvent::TakeControl(id)
            | PlayerEvent::Shoot(id)
            | PlayerEvent::ShootAtGoal(id) => id,
        }
    }
}

pub struct PlayerEventDispatcher;

impl PlayerEventDispatcher {
    pub fn dispatch(event: PlayerEvent, field: &MatchField, commentator: &mut Commentator) {
        debug!("Player event: {:?}", event);

        let Some(player) = field.get_player(event.player_id()) else {
            return;
        };

        let text = match event {
            PlayerEvent::GainBall(_) => format!("{} is running with the ball.", player.name),
            PlayerEvent::TakeControl(_) => {
                format!("{} is now controlling the ball.", player.name)
            }
            PlayerEvent::Shoot(_) => format!("{} shoots!", player.name),
            PlayerEvent::ShootAtGoal(_) => format!("{} shoots towards the goal!", player.name),
        };

        commentator.announce(&text);
    }
}
