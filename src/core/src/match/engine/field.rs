use crate::r#match::ball::Ball;
use crate::r#match::{MatchPlayer, TeamSide};
use log::{debug, info};

pub struct MatchField {
    pub ball: Ball,
    pub players: Vec<MatchPlayer>,

    /// The home player the human steers. Kept in sync with the roster: it is
    /// `Some` exactly while a home player remains.
    pub controlled_player: Option<u32>,
}

impl MatchField {
    pub fn new(players: Vec<MatchPlayer>, controlled_player: Option<u32>) -> Self {
        let mut field = MatchField {
            ball: Ball::with_coord(0.0, 0.0),
            players,
            controlled_player: None,
        };

        match controlled_player {
            Some(id) if field.is_home_player(id) => field.controlled_player = Some(id),
            _ => field.ensure_controlled_player(),
        }

        field
    }

    /// Positions-only reset: the roster stays, everyone returns to kickoff.
    pub fn reset_players_positions(&mut self) {
        self.players.iter_mut().for_each(|p| p.reset_position());
        self.ball.reset();
    }

    pub fn get_player(&self, id: u32) -> Option<&MatchPlayer> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_player_mut(&mut self, id: u32) -> Option<&mut MatchPlayer> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn is_controlled(&self, id: u32) -> bool {
        self.controlled_player == Some(id)
    }

    fn is_home_player(&self, id: u32) -> bool {
        self.get_player(id).is_some_and(|p| p.side == TeamSide::Home)
    }

    pub fn set_controlled(&mut self, id: u32) {
        if !self.is_home_player(id) {
            debug!("refusing control of non-home player {}", id);
            return;
        }

        self.controlled_player = Some(id);
    }

    pub fn controlled(&self) -> Option<&MatchPlayer> {
        self.controlled_player.and_then(|id| self.get_player(id))
    }

    pub fn home_players(&self) -> impl Iterator<Item = &MatchPlayer> {
        self.players.iter().filter(|p| p.side == TeamSide::Home)
    }

    pub fn home_players_count(&self) -> usize {
        self.home_players().count()
    }

    /// Takes a player off the pitch for good. A ball they carried is dropped
    /// where it lies and control moves to the first remaining home player.
    pub fn remove_player(&mut self, id: u32) -> Option<MatchPlayer> {
        let idx = self.players.iter().position(|p| p.id == id)?;
        let removed = self.players.remove(idx);

        if self.ball.current_owner == Some(id) {
            self.ball.release();
        }

        if self.controlled_player == Some(id) {
            self.controlled_player = None;
            self.ensure_controlled_player();
        }

        info!("{} {} removed from the pitch", removed.number, removed.name);

        Some(removed)
    }

    fn ensure_controlled_player(&mut self) {
        if self.controlled().is_some() {
            return;
        }

        let first_home = self.home_players().next().map(|p| p.id);
        self.controlled_player = first_home;
    }
}
