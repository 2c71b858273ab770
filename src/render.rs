use derby_core::{MatchRenderer, MatchSnapshot, SpeechError, SpeechSynthesizer};
use log::{debug, info, trace, warn};

/// Headless renderer: a JSON frame every `every` ticks at debug level, banner
/// and score changes at info.
pub struct LogRenderer {
    every: u64,
    last_banner: Option<String>,
    last_score: (u8, u8),
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        LogRenderer {
            every: every.max(1),
            last_banner: None,
            last_score: (0, 0),
        }
    }
}

impl MatchRenderer for LogRenderer {
    fn render(&mut self, snapshot: &MatchSnapshot) {
        let score = (snapshot.score.home, snapshot.score.away);
        if score != self.last_score {
            info!("score {}-{}", score.0, score.1);
            self.last_score = score;
        }

        let banner = snapshot.banner.visible.then(|| snapshot.banner.text.clone());
        if banner != self.last_banner {
            if let Some(text) = &banner {
                info!("[{}]", text);
            }
            self.last_banner = banner;
        }

        if let Some(message) = &snapshot.final_message {
            info!("{}", message);
        }

        if snapshot.tick % self.every != 0 {
            return;
        }

        match snapshot.to_json() {
            Ok(frame) => debug!("frame {}", frame),
            Err(err) => warn!("failed to serialize frame {}: {}", snapshot.tick, err),
        }
    }
}

/// Speech backend that writes announcements to the log.
pub struct LogSpeech;

impl SpeechSynthesizer for LogSpeech {
    fn cancel(&mut self) {
        trace!("speech cancelled");
    }

    fn speak(&mut self, text: &str) -> Result<(), SpeechError> {
        info!(target: "commentary", "{}", text);
        Ok(())
    }
}
