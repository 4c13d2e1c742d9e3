//! Loading station directories from JSON.
//!
//! The data set is one JSON document: the coordinate table, the
//! per-station timetables and the designated fallback station. The
//! Shinano Railway line is compiled into the binary.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{Departure, StationCoordinate};

use super::error::DirectoryError;
use super::table::{StationDirectory, StationTimetable};

/// The Shinano Railway data set shipped with the crate.
const EMBEDDED_DATA: &str = include_str!("../../data/shinano.json");

#[derive(Debug, Deserialize)]
struct DirectoryDto {
    #[serde(default)]
    line: Option<String>,
    #[serde(default)]
    fallback_station: Option<String>,
    stations: Vec<StationCoordinate>,
    #[serde(default)]
    timetables: HashMap<String, TimetableDto>,
}

#[derive(Debug, Default, Deserialize)]
struct TimetableDto {
    #[serde(default)]
    up: Vec<Departure>,
    #[serde(default)]
    down: Vec<Departure>,
}

impl StationDirectory {
    /// The directory compiled into the crate.
    pub fn embedded() -> Result<Self, DirectoryError> {
        Self::from_json(EMBEDDED_DATA)
    }

    /// Parse a directory from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let dto: DirectoryDto = serde_json::from_str(json)?;
        let timetables = dto
            .timetables
            .into_iter()
            .map(|(station_name, t)| StationTimetable {
                station_name,
                up: t.up,
                down: t.down,
            })
            .collect::<Vec<_>>();

        debug!(
            stations = dto.stations.len(),
            timetables = timetables.len(),
            "loaded station directory"
        );

        Self::new(dto.line, dto.stations, timetables, dto.fallback_station)
    }

    /// Read and parse a directory from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
