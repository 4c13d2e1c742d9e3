//! Nearest-station search.

use tracing::{debug, trace};

use crate::directory::StationDirectory;
use crate::domain::Position;

use super::distance::distance_km;

/// The station closest to a position.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestStation {
    pub name: String,
    pub distance_km: f64,
}

/// Find the station nearest to `position`.
///
/// Scans every station in the directory. Ties keep the first station in
/// directory order, which is arbitrary but deterministic. Returns `None`
/// only for an empty directory.
pub fn resolve(position: Position, directory: &StationDirectory) -> Option<NearestStation> {
    let mut nearest: Option<NearestStation> = None;

    for station in directory.stations() {
        let distance = distance_km(position, station.position);
        trace!(station = %station.name, distance_km = distance, "candidate station");

        if nearest.as_ref().is_none_or(|n| distance < n.distance_km) {
            nearest = Some(NearestStation {
                name: station.name.clone(),
                distance_km: distance,
            });
        }
    }

    match &nearest {
        Some(n) => debug!(
            latitude = position.latitude,
            longitude = position.longitude,
            station = %n.name,
            distance_km = n.distance_km,
            "resolved nearest station"
        ),
        None => debug!("no stations to resolve against"),
    }

    nearest
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Same inputs always resolve to the same station
        #[test]
        fn deterministic(lat in 36.0f64..37.0, lon in 137.8f64..138.8) {
            let dir = StationDirectory::embedded().unwrap();
            let position = Position::new(lat, lon);
            prop_assert_eq!(resolve(position, &dir), resolve(position, &dir));
        }

        /// No station is closer than the resolved one
        #[test]
        fn result_is_minimal(lat in 36.0f64..37.0, lon in 137.8f64..138.8) {
            let dir = StationDirectory::embedded().unwrap();
            let position = Position::new(lat, lon);
            let nearest = resolve(position, &dir).unwrap();
            for station in dir.stations() {
                prop_assert!(distance_km(position, station.position) >= nearest.distance_km);
            }
        }
    }
}
