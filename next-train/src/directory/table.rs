//! Station coordinate and timetable tables.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::domain::{Departure, Direction, StationCoordinate};

use super::error::DirectoryError;

/// All scheduled departures from one station.
///
/// A terminus has an empty sequence for the direction it does not serve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationTimetable {
    pub station_name: String,
    pub up: Vec<Departure>,
    pub down: Vec<Departure>,
}

impl StationTimetable {
    /// Departures in one direction, in ascending time order.
    pub fn departures(&self, direction: Direction) -> &[Departure] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }
}

/// Immutable lookup of station coordinates and timetables.
///
/// Coordinates keep the order they were loaded in, which makes
/// nearest-station ties resolve the same way on every run. A station may
/// have a coordinate but no timetable; `timetable_of` then reports
/// not-found, which is distinct from an empty departure list.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    line: Option<String>,
    coordinates: Vec<StationCoordinate>,
    timetables: HashMap<String, StationTimetable>,
    fallback_station: Option<String>,
}

impl StationDirectory {
    /// Build a directory, validating its invariants.
    ///
    /// Fails on duplicate coordinate entries and on departure sequences
    /// that go backwards in time. Entries whose time cannot be parsed are
    /// kept (and logged); projection excludes them.
    pub fn new(
        line: Option<String>,
        coordinates: Vec<StationCoordinate>,
        timetables: Vec<StationTimetable>,
        fallback_station: Option<String>,
    ) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        for coord in &coordinates {
            if !seen.insert(coord.name.as_str()) {
                return Err(DirectoryError::DuplicateStation(coord.name.clone()));
            }
        }

        for timetable in &timetables {
            for direction in [Direction::Up, Direction::Down] {
                check_sorted(&timetable.station_name, direction, timetable.departures(direction))?;
            }
        }

        let timetables = timetables
            .into_iter()
            .map(|t| (t.station_name.clone(), t))
            .collect();

        Ok(Self {
            line,
            coordinates,
            timetables,
            fallback_station,
        })
    }

    /// Name of the line this directory covers, if the data names one.
    pub fn line(&self) -> Option<&str> {
        self.line.as_deref()
    }

    /// Look up where a station is.
    pub fn coordinate_of(&self, station: &str) -> Option<&StationCoordinate> {
        self.coordinates.iter().find(|c| c.name == station)
    }

    /// Look up a station's departures in one direction.
    ///
    /// Returns `None` when the station has no published timetable at all.
    pub fn timetable_of(&self, station: &str, direction: Direction) -> Option<&[Departure]> {
        self.timetables
            .get(station)
            .map(|t| t.departures(direction))
    }

    /// Whether the station has a published timetable.
    pub fn has_timetable(&self, station: &str) -> bool {
        self.timetables.contains_key(station)
    }

    /// All station coordinates, in load order.
    pub fn stations(&self) -> impl Iterator<Item = &StationCoordinate> {
        self.coordinates.iter()
    }

    /// The station to show when the user's own cannot be determined.
    pub fn fallback_station(&self) -> Option<&str> {
        self.fallback_station.as_deref()
    }

    /// Number of stations with coordinates.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns true if there are no station coordinates.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

fn check_sorted(
    station: &str,
    direction: Direction,
    departures: &[Departure],
) -> Result<(), DirectoryError> {
    let mut previous = None;
    for departure in departures {
        let time = match departure.clock_time() {
            Ok(time) => time,
            Err(e) => {
                warn!(station, %direction, time = %departure.time, error = %e, "malformed departure time");
                continue;
            }
        };
        if previous.is_some_and(|p| time < p) {
            return Err(DirectoryError::Unsorted {
                station: station.to_string(),
                direction,
                time: departure.time.clone(),
            });
        }
        previous = Some(time);
    }
    Ok(())
}

/// Builder for creating a station directory.
///
/// Provides a fluent API for adding stations and departures.
#[derive(Debug, Default)]
pub struct StationDirectoryBuilder {
    line: Option<String>,
    coordinates: Vec<StationCoordinate>,
    timetables: Vec<StationTimetable>,
    fallback_station: Option<String>,
}

impl StationDirectoryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the line.
    pub fn line(mut self, name: &str) -> Self {
        self.line = Some(name.to_string());
        self
    }

    /// Add a station coordinate.
    pub fn station(mut self, name: &str, latitude: f64, longitude: f64) -> Self {
        self.coordinates
            .push(StationCoordinate::new(name, latitude, longitude));
        self
    }

    /// Add departures for a station in one direction.
    ///
    /// Each entry is `(time, train type, destination)`. Creates the
    /// station's timetable if it does not exist yet.
    pub fn departures(mut self, station: &str, direction: Direction, entries: &[(&str, &str, &str)]) -> Self {
        let departures = entries
            .iter()
            .map(|(time, train_type, destination)| Departure::new(*time, *train_type, *destination));

        let index = match self.timetables.iter().position(|t| t.station_name == station) {
            Some(index) => index,
            None => {
                self.timetables.push(StationTimetable {
                    station_name: station.to_string(),
                    ..Default::default()
                });
                self.timetables.len() - 1
            }
        };
        let timetable = &mut self.timetables[index];
        match direction {
            Direction::Up => timetable.up.extend(departures),
            Direction::Down => timetable.down.extend(departures),
        }
        self
    }

    /// Designate the fallback station.
    pub fn fallback(mut self, station: &str) -> Self {
        self.fallback_station = Some(station.to_string());
        self
    }

    /// Build the directory.
    pub fn build(self) -> Result<StationDirectory, DirectoryError> {
        StationDirectory::new(
            self.line,
            self.coordinates,
            self.timetables,
            self.fallback_station,
        )
    }
}
