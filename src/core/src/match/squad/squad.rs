use crate::config::ConfigError;
use crate::r#match::{MatchPlayer, TeamSide};
use nalgebra::Vector2;

const FENERBAHCE_PLAYERS: [&str; 11] = [
    "Altay Bayındır",
    "Serdar Aziz",
    "Attila Szalai",
    "Bright Osayi-Samuel",
    "Ferdi Kadıoğlu",
    "Miha Zajc",
    "Willian Arão",
    "Lincoln Henrique",
    "Enner Valencia",
    "Arda Güler",
    "Michy Batshuayi",
];

const GALATASARAY_PLAYERS: [&str; 11] = [
    "Fernando Muslera",
    "Victor Nelsson",
    "Abdülkerim Bardakcı",
    "Sacha Boey",
    "Patrick van Aanholt",
    "Lucas Torreira",
    "Sérgio Oliveira",
    "Kerem Aktürkoğlu",
    "Dries Mertens",
    "Mauro Icardi",
    "Yunus Akgün",
];

#[derive(Debug, Clone)]
pub struct MatchSquad {
    pub side: TeamSide,
    pub team_name: String,
    /// Players per line, from the first line outwards.
    pub formation: Vec<usize>,
    pub names: Vec<String>,
    /// Player the human starts with. Ignored for AI squads.
    pub captain: Option<String>,
}

impl MatchSquad {
    pub fn fenerbahce() -> Self {
        MatchSquad {
            side: TeamSide::Home,
            team_name: String::from("Fenerbahçe"),
            formation: vec![3, 3, 3, 2],
            names: FENERBAHCE_PLAYERS.iter().map(|n| n.to_string()).collect(),
            captain: Some(String::from("Arda Güler")),
        }
    }

    pub fn galatasaray() -> Self {
        MatchSquad {
            side: TeamSide::Away,
            team_name: String::from("Galatasaray"),
            formation: vec![3, 5, 3],
            names: GALATASARAY_PLAYERS.iter().map(|n| n.to_string()).collect(),
            captain: None,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.formation.iter().sum()
    }

    /// Every formation slot needs exactly one name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_count() != self.names.len() {
            return Err(ConfigError::Invalid(format!(
                "{} lines up {} slots for {} players",
                self.team_name,
                self.slot_count(),
                self.names.len()
            )));
        }

        Ok(())
    }

    /// Places the squad on a grid: line `i` sits `i * spacing_x` from the
    /// origin, slot `j` within a line `j * spacing_y` below it. Squad numbers
    /// follow placement order starting at 1; ids start at `first_id`.
    pub fn line_up(
        &self,
        origin: Vector2<f32>,
        spacing: Vector2<f32>,
        first_id: u32,
    ) -> Vec<MatchPlayer> {
        let slots = self
            .formation
            .iter()
            .enumerate()
            .flat_map(|(line, &count)| (0..count).map(move |slot| (line, slot)));

        slots
            .zip(self.names.iter())
            .enumerate()
            .map(|(idx, ((line, slot), name))| {
                let position = Vector2::new(
                    origin.x + line as f32 * spacing.x,
                    origin.y + slot as f32 * spacing.y,
                );

                MatchPlayer::new(
                    first_id + idx as u32,
                    self.side,
                    (idx + 1) as u8,
                    name.clone(),
                    position,
                )
            })
            .collect()
    }

    pub fn captain_id(&self, players: &[MatchPlayer]) -> Option<u32> {
        let captain = self.captain.as_ref()?;

        players
            .iter()
            .find(|p| p.side == self.side && &p.name == captain)
            .map(|p| p.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_up_numbers_and_grid() {
        let squad = MatchSquad::fenerbahce();
        let players = squad.line_up(Vector2::new(-880.0, -275.0), Vector2::new(220.0, 165.0), 1);

        assert_eq!(players.len(), 11);
        assert_eq!(players[0].number, 1);
        assert_eq!(players[10].number, 11);

        // fourth line, first slot
        let arda = players.iter().find(|p| p.name == "Arda Güler").unwrap();
        assert_eq!(arda.number, 10);
        assert_eq!(arda.position, Vector2::new(-880.0 + 3.0 * 220.0, -275.0));
        assert_eq!(arda.start_position, arda.position);
    }

    #[test]
    fn test_away_squad_is_ai() {
        let squad = MatchSquad::galatasaray();
        let players = squad.line_up(Vector2::new(880.0, -275.0), Vector2::new(220.0, 165.0), 12);

        assert_eq!(players.len(), 11);
        assert!(players.iter().all(|p| p.ai_controlled && p.side == TeamSide::Away));
        assert_eq!(players[0].id, 12);
        assert!(players.iter().any(|p| p.name == "Yunus Akgün"));
        assert_eq!(squad.captain_id(&players), None);
    }

    #[test]
    fn test_both_squads_fill_their_formation() {
        for squad in [MatchSquad::fenerbahce(), MatchSquad::galatasaray()] {
            assert_eq!(squad.slot_count(), 11);
            assert!(squad.validate().is_ok());
        }
    }

    #[test]
    fn test_names_and_slots_must_match() {
        let mut short = MatchSquad::fenerbahce();
        short.names.truncate(4);
        assert!(matches!(short.validate(), Err(ConfigError::Invalid(_))));

        let mut narrow = MatchSquad::galatasaray();
        narrow.formation = vec![3, 5, 2];
        assert!(matches!(narrow.validate(), Err(ConfigError::Invalid(_))));
    }
}
