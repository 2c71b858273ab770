use crate::commentary::Commentator;
use crate::r#match::ball::events::{BallEvent, BallEventDispatcher};
use crate::r#match::{
    MatchContext, MatchField, PlayerEvent, PlayerEventDispatcher, RefereeEvent,
    RefereeEventDispatcher, TeamSide,
};
use log::{debug, info};

#[derive(Clone, Debug)]
pub enum Event {
    BallEvent(BallEvent),
    PlayerEvent(PlayerEvent),
    RefereeEvent(RefereeEvent),
    MatchEvent(MatchEvent),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatchEvent {
    Started,
    Ended { winner: TeamSide },
}

pub struct EventCollection {
    events: Vec<Event>,
}

impl Default for EventCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl EventCollection {
    pub fn new() -> Self {
        EventCollection {
            events: Vec::with_capacity(8),
        }
    }

    pub fn add_ball_event(&mut self, event: BallEvent) {
        self.events.push(Event::BallEvent(event))
    }

    pub fn add_player_event(&mut self, event: PlayerEvent) {
        self.events.push(Event::PlayerEvent(event))
    }

    pub fn add_referee_event(&mut self, event: RefereeEvent) {
        self.events.push(Event::RefereeEvent(event))
    }

    pub fn add_match_event(&mut self, event: MatchEvent) {
        self.events.push(Event::MatchEvent(event))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn to_vec(self) -> Vec<Event> {
        self.events
    }
}

pub struct EventDispatcher;

impl EventDispatcher {
    /// Applies the side effects of a tick's events in the order they were
    /// raised.
    pub fn dispatch(
        events: Vec<Event>,
        field: &mut MatchField,
        context: &mut MatchContext,
        commentator: &mut Commentator,
    ) {
        for event in events {
            match event {
                Event::BallEvent(ball_event) => {
                    BallEventDispatcher::dispatch(ball_event, field, context, commentator);
                }
                Event::PlayerEvent(player_event) => {
                    PlayerEventDispatcher::dispatch(player_event, field, commentator);
                }
                Event::RefereeEvent(referee_event) => {
                    RefereeEventDispatcher::dispatch(referee_event, context, commentator);
                }
                Event::MatchEvent(match_event) => {
                    Self::dispatch_match_event(match_event, context, commentator);
                }
            }
        }
    }

    fn dispatch_match_event(
        event: MatchEvent,
        context: &mut MatchContext,
        commentator: &mut Commentator,
    ) {
        debug!("Match event: {:?}", event);

        match event {
            MatchEvent::Started => {
                info!("kickoff: {} vs {}", context.teams.home, context.teams.away);

                commentator.announce(&format!(
                    "Game started. {} versus {}.",
                    context.teams.home, context.teams.away
                ));
            }
            MatchEvent::Ended { winner } => {
                let winner_name = context.teams.name(winner).to_string();

                info!("match over, {} wins", winner_name);

                commentator.announce(&format!("{} wins the game!", winner_name));
                context.final_message = Some(format!("{} wins", winner_name));
            }
        }
    }
}
