//! Controller configuration.

use crate::domain::Direction;
use crate::geolocation::PositionOptions;

/// Configuration for a timetable session.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Station shown when the user's own cannot be determined.
    /// `None` uses the directory's designated fallback.
    pub fallback_station: Option<String>,

    /// Direction shown after initialization.
    pub default_direction: Direction,

    /// Options for the position request.
    pub position: PositionOptions,
}

impl ControllerConfig {
    /// Create a configuration with the given parameters.
    pub fn new(
        fallback_station: Option<String>,
        default_direction: Direction,
        position: PositionOptions,
    ) -> Self {
        Self {
            fallback_station,
            default_direction,
            position,
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            fallback_station: None,
            default_direction: Direction::Up,
            position: PositionOptions::default(),
        }
    }
}
