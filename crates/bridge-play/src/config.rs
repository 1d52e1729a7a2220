use bridge_core::Seat;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Pacing and seat control for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// How long an AI seat "thinks" before its card lands.
    pub ai_delay_ms: u64,
    /// How long a finished trick stays on the table.
    pub trick_clear_delay_ms: u64,
    /// Seats the user controls. Defaults to declarer and dummy.
    pub human_seats: Option<Vec<Seat>>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: 900,
            trick_clear_delay_ms: 1500,
            human_seats: None,
        }
    }
}

impl PlayConfig {
    /// No delays; handy for tests and batch runs.
    pub fn instant() -> Self {
        Self {
            ai_delay_ms: 0,
            trick_clear_delay_ms: 0,
            human_seats: None,
        }
    }

    pub fn with_human_seats(mut self, seats: Vec<Seat>) -> Self {
        self.human_seats = Some(seats);
        self
    }

    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    pub fn trick_clear_delay(&self) -> Duration {
        Duration::from_millis(self.trick_clear_delay_ms)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = PlayConfig::from_yaml_str("ai_delay_ms: 250\n").unwrap();
        assert_eq!(config.ai_delay(), Duration::from_millis(250));
        assert_eq!(config.trick_clear_delay_ms, 1500);
        assert_eq!(config.human_seats, None);
    }

    #[test]
    fn test_human_seats_from_yaml() {
        let config = PlayConfig::from_yaml_str("human_seats: [North, East, South, West]\n").unwrap();
        assert_eq!(config.human_seats.map(|s| s.len()), Some(4));
    }

    #[test]
    fn test_bad_yaml_is_an_error() {
        assert!(matches!(
            PlayConfig::from_yaml_str("ai_delay_ms: soon\n"),
            Err(ConfigError::Parse(_))
        ));
    }
}
