//! Binary configuration from environment variables.
//!
//! - `NEXT_TRAIN_LAT` / `NEXT_TRAIN_LON`: the user's position. Without
//!   both, the session behaves as if the platform has no location
//!   capability and shows the fallback station.
//! - `NEXT_TRAIN_DATA`: path to a JSON station directory; the embedded
//!   Shinano Railway data is used otherwise.
//! - `NEXT_TRAIN_FALLBACK`: overrides the directory's fallback station.
//! - `NEXT_TRAIN_DIRECTION`: `up` (default) or `down`.

use std::path::PathBuf;

use crate::controller::ControllerConfig;
use crate::domain::{Direction, InvalidDirection, Position};

/// Errors in the environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A coordinate variable is not a number
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    /// Only one of latitude and longitude was given
    #[error("NEXT_TRAIN_LAT and NEXT_TRAIN_LON must be set together")]
    PartialPosition,

    /// Unknown direction name
    #[error(transparent)]
    InvalidDirection(#[from] InvalidDirection),
}

/// Everything the binary needs to start a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub position: Option<Position>,
    pub data_path: Option<PathBuf>,
    pub controller: ControllerConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let latitude = parse_coordinate("NEXT_TRAIN_LAT", lookup("NEXT_TRAIN_LAT"))?;
        let longitude = parse_coordinate("NEXT_TRAIN_LON", lookup("NEXT_TRAIN_LON"))?;
        let position = match (latitude, longitude) {
            (Some(lat), Some(lon)) => Some(Position::new(lat, lon)),
            (None, None) => None,
            _ => return Err(ConfigError::PartialPosition),
        };

        let mut controller = ControllerConfig::default();
        controller.fallback_station = lookup("NEXT_TRAIN_FALLBACK").filter(|s| !s.is_empty());
        if let Some(direction) = lookup("NEXT_TRAIN_DIRECTION") {
            controller.default_direction = direction.parse::<Direction>()?;
        }

        Ok(Self {
            position,
            data_path: lookup("NEXT_TRAIN_DATA").map(PathBuf::from),
            controller,
        })
    }
}

fn parse_coordinate(var: &'static str, value: Option<String>) -> Result<Option<f64>, ConfigError> {
    value
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidNumber { var, value: v })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn full_environment() {
        let config = config(&[
            ("NEXT_TRAIN_LAT", "36.3974"),
            ("NEXT_TRAIN_LON", " 138.2492 "),
            ("NEXT_TRAIN_DATA", "/tmp/line.json"),
            ("NEXT_TRAIN_FALLBACK", "小諸"),
            ("NEXT_TRAIN_DIRECTION", "down"),
        ])
        .unwrap();

        assert_eq!(config.position, Some(Position::new(36.3974, 138.2492)));
        assert_eq!(config.data_path, Some(PathBuf::from("/tmp/line.json")));
        assert_eq!(config.controller.fallback_station.as_deref(), Some("小諸"));
        assert_eq!(config.controller.default_direction, Direction::Down);
    }

    #[test]
    fn partial_position_rejected() {
        assert_eq!(
            config(&[("NEXT_TRAIN_LAT", "36.4")]),
            Err(ConfigError::PartialPosition)
        );
    }

    #[test]
    fn bad_number_rejected() {
        let err = config(&[("NEXT_TRAIN_LAT", "north"), ("NEXT_TRAIN_LON", "138.2")]).unwrap_err();
        assert_eq!(err.to_string(), "NEXT_TRAIN_LAT must be a number, got \"north\"");
    }

    #[test]
    fn bad_direction_rejected() {
        assert!(matches!(
            config(&[("NEXT_TRAIN_DIRECTION", "east")]),
            Err(ConfigError::InvalidDirection(_))
        ));
    }

    #[test]
    fn empty_fallback_ignored() {
        let config = config(&[("NEXT_TRAIN_FALLBACK", "")]).unwrap();
        assert!(config.controller.fallback_station.is_none());
    }
}
