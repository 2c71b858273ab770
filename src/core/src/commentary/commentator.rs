use log::{debug, warn};
use std::fmt::{Display, Formatter};

/// Speech backend the commentator talks through.
///
/// `speak` must return immediately; delivery is the backend's business.
pub trait SpeechSynthesizer {
    fn cancel(&mut self);
    fn speak(&mut self, text: &str) -> Result<(), SpeechError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpeechError {
    Unavailable,
    Rejected(String),
}

impl Display for SpeechError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SpeechError::Unavailable => write!(f, "speech backend unavailable"),
            SpeechError::Rejected(msg) => write!(f, "utterance rejected: {}", msg),
        }
    }
}

impl std::error::Error for SpeechError {}

/// Fire-and-forget announcer: cancels whatever is being said, then speaks
/// the latest line unless it repeats the previous one.
pub struct Commentator {
    synthesizer: Option<Box<dyn SpeechSynthesizer>>,
    last_spoken: Option<String>,
}

impl Commentator {
    pub fn new(synthesizer: Box<dyn SpeechSynthesizer>) -> Self {
        Commentator {
            synthesizer: Some(synthesizer),
            last_spoken: None,
        }
    }

    pub fn silent() -> Self {
        Commentator {
            synthesizer: None,
            last_spoken: None,
        }
    }

    pub fn last_spoken(&self) -> Option<&str> {
        self.last_spoken.as_deref()
    }

    pub fn announce(&mut self, text: &str) {
        let Some(synthesizer) = self.synthesizer.as_mut() else {
            warn!("text-to-speech is not supported, dropping: {}", text);
            return;
        };

        synthesizer.cancel();

        if self.last_spoken.as_deref() == Some(text) {
            debug!("suppressing repeated announcement: {}", text);
            return;
        }

        match synthesizer.speak(text) {
            Ok(()) => {
                self.last_spoken = Some(text.to_string());
            }
            Err(err) => {
                warn!("announcement failed ({}): {}", err, text);
            }
        }
    }
}

impl Default for Commentator {
    fn default() -> Self {
        Self::silent()
    }
}
