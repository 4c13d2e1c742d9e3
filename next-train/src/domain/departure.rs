//! Scheduled departures and station coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::time::{ClockTime, TimeError};

/// A single scheduled departure from a station in one direction.
///
/// The time is kept as published so that a malformed entry survives
/// loading; it is rejected when a projection parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departure {
    /// Scheduled time, "HH:MM".
    pub time: String,

    /// Service type, e.g. "普通" or "快速".
    #[serde(rename = "type")]
    pub train_type: String,

    /// Final destination of the train.
    pub destination: String,
}

impl Departure {
    pub fn new(
        time: impl Into<String>,
        train_type: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            train_type: train_type.into(),
            destination: destination.into(),
        }
    }

    /// Parse the scheduled time.
    pub fn clock_time(&self) -> Result<ClockTime, TimeError> {
        ClockTime::parse_hhmm(&self.time)
    }
}

impl fmt::Display for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}行き", self.time, self.train_type, self.destination)
    }
}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A named station and where it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationCoordinate {
    pub name: String,
    #[serde(flatten)]
    pub position: Position,
}

impl StationCoordinate {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            position: Position::new(latitude, longitude),
        }
    }
}
