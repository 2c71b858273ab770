use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

const FIELD_SCALE: f32 = 1.1;

/// Tunable constants of a match. Every field falls back to its default when
/// missing from a config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub player_radius: f32,
    pub ball_radius: f32,

    pub human_speed: f32,
    pub ai_speed: f32,

    pub min_distance: f32,
    pub cohesion_strength: f32,

    pub friction: f32,
    pub shot_launch_factor: f32,
    pub ai_shot_speed: f32,

    /// Distance from the centre spot to each goal line along x.
    pub goal_line: f32,
    pub goal_half_height: f32,

    pub formation_spacing_x: f32,
    pub formation_spacing_y: f32,
    pub kickoff_offset_x: f32,
    pub kickoff_offset_y: f32,

    pub card_interval_ms: u64,
    pub banner_ticks: u32,
    pub end_message_delay_ms: u64,
    pub frame_interval_ms: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        let field_width = 3000.0 * FIELD_SCALE;
        let field_height = 1000.0 * FIELD_SCALE;
        let human_speed = 2.0 * FIELD_SCALE;

        MatchConfig {
            player_radius: 20.0 * FIELD_SCALE,
            ball_radius: 10.0 * FIELD_SCALE,
            human_speed,
            ai_speed: human_speed / 2.0,
            min_distance: 200.0 * FIELD_SCALE,
            cohesion_strength: 0.005,
            friction: 0.98,
            shot_launch_factor: 0.5,
            ai_shot_speed: 5.0,
            goal_line: field_width / 2.0 - 500.0 * FIELD_SCALE,
            goal_half_height: 100.0 * FIELD_SCALE / 2.0,
            formation_spacing_x: 200.0 * FIELD_SCALE,
            formation_spacing_y: 150.0 * FIELD_SCALE,
            kickoff_offset_x: 800.0 * FIELD_SCALE,
            kickoff_offset_y: -field_height / 4.0,
            card_interval_ms: 5000,
            banner_ticks: 120,
            end_message_delay_ms: 2000,
            frame_interval_ms: 16,
        }
    }
}

impl MatchConfig {
    /// Touch distance between a player and the ball.
    #[inline]
    pub fn possession_distance(&self) -> f32 {
        self.player_radius + self.ball_radius
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_radius <= 0.0 || self.ball_radius <= 0.0 {
            return Err(ConfigError::Invalid(String::from(
                "player and ball radius must be positive",
            )));
        }

        if self.human_speed <= 0.0 {
            return Err(ConfigError::Invalid(String::from(
                "human_speed must be positive",
            )));
        }

        if self.ai_speed <= 0.0 || self.ai_speed >= self.human_speed {
            return Err(ConfigError::Invalid(format!(
                "ai_speed must be in (0, {})",
                self.human_speed
            )));
        }

        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "friction must be in (0, 1), got {}",
                self.friction
            )));
        }

        if self.goal_line <= 0.0 || self.goal_half_height <= 0.0 {
            return Err(ConfigError::Invalid(String::from(
                "goal dimensions must be positive",
            )));
        }

        if self.card_interval_ms == 0 || self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid(String::from(
                "timer intervals must be non-zero",
            )));
        }

        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "JSON error: {}", err),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
