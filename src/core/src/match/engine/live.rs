use crate::commentary::Commentator;
use crate::config::{ConfigError, MatchConfig};
use crate::r#match::{
    CardDecision, EventCollection, EventDispatcher, FootballEngine, InputState, MatchContext,
    MatchEvent, MatchField, MatchOutcome, MatchSnapshot, MatchSquad, MatchState, Referee, Score,
    StateManager, TeamSide,
};
use log::{debug, info};
use nalgebra::Vector2;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A match in progress. Owns every piece of mutable state, so a card can
/// only ever land between two ticks.
pub struct LiveMatch {
    field: MatchField,
    context: MatchContext,
    state: StateManager,
    commentator: Commentator,
    rng: StdRng,

    home: MatchSquad,
    away: MatchSquad,

    outcome: Option<MatchOutcome>,
}

impl LiveMatch {
    pub fn new(
        config: MatchConfig,
        home: MatchSquad,
        away: MatchSquad,
        commentator: Commentator,
        rng: StdRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        home.validate()?;
        away.validate()?;

        if home.side != TeamSide::Home || away.side != TeamSide::Away {
            return Err(ConfigError::Invalid(String::from(
                "squads must be given as home then away",
            )));
        }

        let field = Self::line_up(&config, &home, &away);
        let context = MatchContext::new(config, &home.team_name, &away.team_name);

        Ok(LiveMatch {
            field,
            context,
            state: StateManager::new(),
            commentator,
            rng,
            home,
            away,
            outcome: None,
        })
    }

    /// Fenerbahçe against Galatasaray with a silent commentator.
    pub fn with_seed(config: MatchConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(
            config,
            MatchSquad::fenerbahce(),
            MatchSquad::galatasaray(),
            Commentator::silent(),
            StdRng::seed_from_u64(seed),
        )
    }

    fn line_up(config: &MatchConfig, home: &MatchSquad, away: &MatchSquad) -> MatchField {
        let spacing = Vector2::new(config.formation_spacing_x, config.formation_spacing_y);

        let mut players = home.line_up(
            Vector2::new(-config.kickoff_offset_x, config.kickoff_offset_y),
            spacing,
            1,
        );

        let first_away_id = players.len() as u32 + 1;
        players.extend(away.line_up(
            Vector2::new(config.kickoff_offset_x, config.kickoff_offset_y),
            spacing,
            first_away_id,
        ));

        let controlled = home.captain_id(&players);

        MatchField::new(players, controlled)
    }

    /// Starts or restarts the match from scratch: fresh rosters, 0-0, ball on
    /// the centre spot.
    pub fn kickoff(&mut self) {
        self.field = Self::line_up(&self.context.config, &self.home, &self.away);
        self.context.reset();
        self.outcome = None;

        self.state = StateManager::new();
        self.state.next();

        info!("state: {}", self.state.current());

        let mut events = EventCollection::new();
        events.add_match_event(MatchEvent::Started);
        self.dispatch(events);
    }

    pub fn tick(&mut self, input: &InputState) {
        if !self.state.is_playing() {
            self.context.banner.tick();
            return;
        }

        let mut events = EventCollection::new();

        FootballEngine::game_tick(
            &mut self.field,
            &self.context,
            input,
            &mut self.rng,
            &mut events,
        );

        self.context.banner.tick();

        self.dispatch(events);
        self.context.increment_tick();
    }

    /// The periodic referee decision. Returns what was given, or `None` when
    /// the match is not running or there is nobody to card.
    pub fn issue_card(&mut self) -> Option<CardDecision> {
        if !self.state.is_playing() {
            debug!("no card while the match is {}", self.state.current());
            return None;
        }

        let decision = Referee::decide(&self.field, &mut self.rng)?;
        let sent_off = Referee::apply(&mut self.field, &decision);

        let mut events = EventCollection::new();
        events.add_referee_event(decision.to_event());
        self.dispatch(events);

        if sent_off && self.field.home_players_count() == 0 {
            self.end(TeamSide::Away);
        }

        Some(decision)
    }

    fn end(&mut self, winner: TeamSide) {
        self.state.next();
        self.outcome = Some(MatchOutcome::Forfeit { winner });

        info!(
            "state: {}, {} wins by forfeit",
            self.state.current(),
            self.context.teams.name(winner)
        );
    }

    /// Announces the winner once the match has ended and returns the final
    /// message. Safe to call repeatedly.
    pub fn conclude(&mut self) -> Option<&str> {
        let outcome = self.outcome?;

        if self.context.final_message.is_none() {
            let mut events = EventCollection::new();
            events.add_match_event(MatchEvent::Ended {
                winner: outcome.winner(),
            });
            self.dispatch(events);
        }

        self.context.final_message.as_deref()
    }

    fn dispatch(&mut self, events: EventCollection) {
        if events.is_empty() {
            return;
        }

        EventDispatcher::dispatch(
            events.to_vec(),
            &mut self.field,
            &mut self.context,
            &mut self.commentator,
        );
    }

    pub fn state(&self) -> MatchState {
        self.state.current()
    }

    pub fn is_finished(&self) -> bool {
        self.state.current() == MatchState::Ended
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    pub fn score(&self) -> Score {
        self.context.score
    }

    pub fn field(&self) -> &MatchField {
        &self.field
    }

    pub fn context(&self) -> &MatchContext {
        &self.context
    }

    pub fn config(&self) -> &MatchConfig {
        &self.context.config
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::capture(&self.field, &self.context, self.state.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commentary::{SpeechError, SpeechSynthesizer};
    use crate::r#match::{MatchPlayer, TeamSide};
    use rand::RngExt;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Transcript(Rc<RefCell<Vec<String>>>);

    impl SpeechSynthesizer for Transcript {
        fn cancel(&mut self) {}

        fn speak(&mut self, text: &str) -> Result<(), SpeechError> {
            self.0.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn live_match(seed: u64) -> (LiveMatch, Rc<RefCell<Vec<String>>>) {
        let transcript = Rc::new(RefCell::new(Vec::new()));
        let commentator = Commentator::new(Box::new(Transcript(Rc::clone(&transcript))));

        let mut live = LiveMatch::new(
            MatchConfig::default(),
            MatchSquad::fenerbahce(),
            MatchSquad::galatasaray(),
            commentator,
            StdRng::seed_from_u64(seed),
        )
        .unwrap();
        live.kickoff();

        (live, transcript)
    }

    /// A running match on a hand-built pitch.
    fn staged(players: Vec<MatchPlayer>, controlled: u32) -> LiveMatch {
        let mut live = LiveMatch::with_seed(MatchConfig::default(), 3).unwrap();
        live.kickoff();
        live.field = MatchField::new(players, Some(controlled));
        live
    }

    fn player(id: u32, side: TeamSide, x: f32, y: f32) -> MatchPlayer {
        MatchPlayer::new(id, side, id as u8, format!("Player {}", id), Vector2::new(x, y))
    }

    fn random_input(rng: &mut StdRng) -> InputState {
        InputState {
            up: rng.random_range(0..4) == 0,
            down: rng.random_range(0..4) == 0,
            left: rng.random_range(0..4) == 0,
            right: rng.random_range(0..3) == 0,
            shoot: rng.random_range(0..10) == 0,
        }
    }

    fn assert_single_home_controller(field: &MatchField) {
        let controlled = field
            .players
            .iter()
            .filter(|p| field.is_controlled(p.id))
            .collect::<Vec<_>>();

        if field.home_players_count() == 0 {
            assert!(controlled.is_empty());
        } else {
            assert_eq!(controlled.len(), 1);
            assert_eq!(controlled[0].side, TeamSide::Home);
        }
    }

    #[test]
    fn test_kickoff_lines_up_and_announces() {
        let (live, transcript) = live_match(1);

        assert_eq!(live.state(), MatchState::Playing);
        assert_eq!(live.field().players.len(), 22);
        assert_eq!(live.score(), Score::default());

        let controller = live.field().controlled().unwrap();
        assert_eq!(controller.name, "Arda Güler");
        assert_eq!(controller.number, 10);
        assert!((controller.position - Vector2::new(-220.0, -275.0)).norm() < 1e-3);

        assert_eq!(
            transcript.borrow().as_slice(),
            ["Game started. Fenerbahçe versus Galatasaray."]
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = MatchConfig {
            ai_speed: 5.0,
            ..MatchConfig::default()
        };

        assert!(LiveMatch::with_seed(config, 1).is_err());
    }

    #[test]
    fn test_kickoff_is_eleven_against_eleven() {
        let mut live = LiveMatch::with_seed(MatchConfig::default(), 1).unwrap();
        live.kickoff();

        let players = &live.field().players;
        let away = players.iter().filter(|p| p.side == TeamSide::Away).count();

        assert_eq!(live.field().home_players_count(), 11);
        assert_eq!(away, 11);
        assert!(players.iter().any(|p| p.name == "Yunus Akgün"));
    }

    #[test]
    fn test_squad_without_enough_slots_is_rejected() {
        let mut away = MatchSquad::galatasaray();
        away.formation = vec![3, 5, 2];

        let result = LiveMatch::new(
            MatchConfig::default(),
            MatchSquad::fenerbahce(),
            away,
            Commentator::silent(),
            StdRng::seed_from_u64(1),
        );

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_exactly_one_controlled_home_player_every_tick() {
        let (mut live, _) = live_match(17);
        let mut input_rng = StdRng::seed_from_u64(99);

        for tick in 0..3000 {
            live.tick(&random_input(&mut input_rng));
            assert_single_home_controller(live.field());

            if tick % 300 == 299 {
                live.issue_card();
                assert_single_home_controller(live.field());
            }
        }
    }

    #[test]
    fn test_carried_ball_sits_at_possession_distance() {
        let (mut live, _) = live_match(21);
        let mut input_rng = StdRng::seed_from_u64(4);
        let reach = live.config().possession_distance();

        for _ in 0..3000 {
            live.tick(&random_input(&mut input_rng));

            let field = live.field();
            if let Some(owner) = field.ball.current_owner.and_then(|id| field.get_player(id)) {
                let offset = field.ball.position - owner.position;
                assert!((offset.norm() - reach).abs() < 1e-3);
                assert!((offset / reach - owner.heading).norm() < 1e-3);
                assert_eq!(field.ball.velocity, Vector2::zeros());
            }
        }
    }

    #[test]
    fn test_move_right_carries_ball() {
        let (mut live, transcript) = live_match(5);
        let config = live.config().clone();
        let controller_id = live.field().controlled_player.unwrap();

        live.field.ball.position = Vector2::new(-210.0, -275.0);
        live.tick(&InputState {
            right: true,
            ..Default::default()
        });

        let controller = live.field().get_player(controller_id).unwrap();
        assert!((controller.position.x - (-220.0 + config.human_speed)).abs() < 1e-4);
        assert_eq!(live.field().ball.current_owner, Some(controller_id));
        assert!(
            (live.field().ball.position.x - (controller.position.x + config.possession_distance()))
                .abs()
                < 1e-4
        );
        assert_eq!(
            transcript.borrow().last().map(String::as_str),
            Some("Arda Güler is running with the ball.")
        );
    }

    #[test]
    fn test_ai_closes_in_then_shoots_at_home_goal() {
        let mut live = staged(
            vec![
                player(1, TeamSide::Home, -880.0, 400.0),
                player(2, TeamSide::Away, 300.0, 0.0),
            ],
            1,
        );
        let reach = live.config().possession_distance();

        let mut shot = false;
        for _ in 0..1000 {
            let ball_position = live.field().ball.position;
            let before = live.field().get_player(2).unwrap().distance_to(ball_position);

            live.tick(&InputState::default());

            if live.field().ball.previous_owner == Some(2) {
                assert!(before < reach);
                assert!(live.field().ball.velocity.x < 0.0);
                shot = true;
                break;
            }

            let after = live.field().get_player(2).unwrap().distance_to(live.field().ball.position);
            assert!(after < before);
        }

        assert!(shot);
    }

    #[test]
    fn test_goal_scores_once_and_keeps_roster() {
        let mut live = staged(
            vec![
                player(1, TeamSide::Home, -500.0, 300.0),
                player(2, TeamSide::Away, -800.0, -400.0),
            ],
            1,
        );
        live.field.ball.position = Vector2::new(1090.0, 0.0);
        live.field.ball.velocity = Vector2::new(5.0, 0.0);

        for _ in 0..10 {
            live.tick(&InputState::default());
        }

        assert_eq!(live.score(), Score { home: 1, away: 0 });
        assert_eq!(live.field().players.len(), 2);
        assert_eq!(live.field().get_player(1).unwrap().position, Vector2::new(-500.0, 300.0));
    }

    #[test]
    fn test_cards_empty_the_home_side_and_end_the_match() {
        let (mut live, transcript) = live_match(8);
        let mut input_rng = StdRng::seed_from_u64(12);
        let mut cards = 0;

        while !live.is_finished() {
            for _ in 0..50 {
                live.tick(&random_input(&mut input_rng));
            }

            let decision = live.issue_card().unwrap();
            cards += 1;

            assert!(live.context().banner.visible);
            assert_eq!(
                live.context().banner.text,
                format!("{} {} - {} Card", decision.number, decision.name, decision.card)
            );

            if decision.is_sending_off() {
                assert!(live.field().get_player(decision.player_id).is_none());
            }

            assert!(cards <= 22);
        }

        assert_eq!(cards, 22);
        assert_eq!(live.field().home_players_count(), 0);
        assert_eq!(live.field().players.len(), 11);
        assert_eq!(
            live.outcome(),
            Some(MatchOutcome::Forfeit {
                winner: TeamSide::Away
            })
        );
        assert!(live.issue_card().is_none());

        let score = live.score();
        for _ in 0..500 {
            live.tick(&random_input(&mut input_rng));
        }
        assert_eq!(live.score(), score);
        assert!(!live.context().banner.visible);

        assert_eq!(live.conclude(), Some("Galatasaray wins"));
        assert_eq!(live.conclude(), Some("Galatasaray wins"));
        assert_eq!(
            transcript.borrow().last().map(String::as_str),
            Some("Galatasaray wins the game!")
        );
        assert_eq!(live.snapshot().final_message.as_deref(), Some("Galatasaray wins"));
    }

    #[test]
    fn test_kickoff_after_end_restarts() {
        let (mut live, _) = live_match(2);

        while !live.is_finished() {
            live.issue_card();
        }

        live.kickoff();

        assert_eq!(live.state(), MatchState::Playing);
        assert_eq!(live.field().home_players_count(), 11);
        assert_eq!(live.outcome(), None);
        assert_eq!(live.conclude(), None);
    }
}
