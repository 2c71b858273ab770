mod autopilot;
mod render;

use crate::autopilot::{Autopilot, InputSource};
use crate::render::{LogRenderer, LogSpeech};
use color_eyre::eyre::WrapErr;
use derby_core::{Commentator, InputState, LiveMatch, MatchConfig, MatchRenderer, MatchSquad};
use env_logger::Env;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::time::Duration;
use tokio::time;

const DEFAULT_MAX_SECONDS: u64 = 300;
const FRAMES_PER_LOGGED_FRAME: u64 = 60;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match env::var("DERBY_CONFIG") {
        Ok(path) => MatchConfig::from_file(&path)
            .wrap_err_with(|| format!("failed to load match config from {}", path))?,
        Err(_) => MatchConfig::default(),
    };

    let seed = env::var("DERBY_SEED")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or_else(rand::random::<u64>);

    let max_seconds = env::var("DERBY_MAX_SECONDS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_SECONDS);

    info!("seed: {}, time limit: {} s", seed, max_seconds);

    let frame_interval = Duration::from_millis(config.frame_interval_ms);
    let card_interval = Duration::from_millis(config.card_interval_ms);
    let end_message_delay = Duration::from_millis(config.end_message_delay_ms);

    let mut autopilot = Autopilot::new(&config);
    let mut renderer = LogRenderer::new(FRAMES_PER_LOGGED_FRAME);

    let mut live = LiveMatch::new(
        config,
        MatchSquad::fenerbahce(),
        MatchSquad::galatasaray(),
        Commentator::new(Box::new(LogSpeech)),
        StdRng::seed_from_u64(seed),
    )?;

    live.kickoff();

    let mut frames = time::interval(frame_interval);
    let mut cards = time::interval_at(time::Instant::now() + card_interval, card_interval);

    let deadline = time::sleep(Duration::from_secs(max_seconds));
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            _ = frames.tick() => {
                let input = autopilot.poll(&live.snapshot());
                live.tick(&input);
                renderer.render(&live.snapshot());

                if live.is_finished() {
                    break;
                }
            }
            _ = cards.tick() => {
                live.issue_card();

                if live.is_finished() {
                    break;
                }
            }
            _ = &mut deadline => {
                info!("time limit reached");
                break;
            }
        }
    }

    if live.is_finished() {
        let end_message = time::sleep(end_message_delay);
        tokio::pin!(end_message);

        loop {
            tokio::select! {
                _ = frames.tick() => {
                    live.tick(&InputState::default());
                    renderer.render(&live.snapshot());
                }
                _ = &mut end_message => break,
            }
        }

        live.conclude();
        renderer.render(&live.snapshot());
    }

    let score = live.score();
    info!(
        "final score: {} {} - {} {}",
        live.context().teams.home,
        score.home,
        score.away,
        live.context().teams.away
    );

    Ok(())
}
