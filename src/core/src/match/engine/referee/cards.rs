use crate::commentary::Commentator;
use crate::r#match::{Card, MatchContext, MatchField};
use itertools::Itertools;
use log::{debug, info};
use rand::RngExt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefereeEvent {
    Card {
        player_id: u32,
        number: u8,
        name: String,
        card: Card,
    },
}

/// Who gets carded and with what, decided before anything is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDecision {
    pub player_id: u32,
    pub number: u8,
    pub name: String,
    pub card: Card,
    /// The human was steering the carded player.
    pub controlled: bool,
}

impl CardDecision {
    pub fn is_sending_off(&self) -> bool {
        self.card == Card::Red
    }

    pub fn to_event(&self) -> RefereeEvent {
        RefereeEvent::Card {
            player_id: self.player_id,
            number: self.number,
            name: self.name.clone(),
            card: self.card,
        }
    }
}

pub struct Referee;

impl Referee {
    /// Picks a home player uniformly among those the human is not steering.
    /// Only when none are left does the controlled player get the card.
    pub fn decide<R: RngExt>(field: &MatchField, rng: &mut R) -> Option<CardDecision> {
        let eligible = field
            .home_players()
            .filter(|p| !field.is_controlled(p.id))
            .collect_vec();

        let player = if eligible.is_empty() {
            field.controlled()?
        } else {
            eligible[rng.random_range(0..eligible.len())]
        };

        let decision = CardDecision {
            player_id: player.id,
            number: player.number,
            name: player.name.clone(),
            card: player.discipline.next_card(),
            controlled: field.is_controlled(player.id),
        };

        debug!("card decision: {:?}", decision);

        Some(decision)
    }

    /// Books the player or sends them off. Returns true when the player left
    /// the pitch.
    pub fn apply(field: &mut MatchField, decision: &CardDecision) -> bool {
        match decision.card {
            Card::Yellow => {
                if let Some(player) = field.get_player_mut(decision.player_id) {
                    player.discipline = player.discipline.book();
                }
                false
            }
            Card::Red => field.remove_player(decision.player_id).is_some(),
        }
    }
}

pub struct RefereeEventDispatcher;

impl RefereeEventDispatcher {
    pub fn dispatch(
        event: RefereeEvent,
        context: &mut MatchContext,
        commentator: &mut Commentator,
    ) {
        debug!("Referee event: {:?}", event);

        match event {
            RefereeEvent::Card {
                player_id,
                number,
                name,
                card,
            } => {
                info!("{} card for {} {} (id {})", card, number, name, player_id);

                context.banner.show(
                    format!("{} {} - {} Card", number, name, card),
                    context.config.banner_ticks,
                );

                commentator.announce(&format!("{} has received a {} card.", name, card));
            }
        }
    }
}
