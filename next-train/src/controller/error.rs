//! Controller error types.

use crate::geolocation::GeolocationError;

/// Why a session could not show a station, or why it fell back.
///
/// The first three are recovered by showing the fallback station. Once a
/// session has no station with timetable data, the error is terminal for
/// that session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimetableError {
    /// The position could not be obtained
    #[error("could not determine your position: {0}")]
    Geolocation(#[from] GeolocationError),

    /// The directory has no stations to resolve against
    #[error("no nearby station found")]
    StationNotResolved,

    /// The station has no published timetable
    #[error("no timetable data for {0}")]
    TimetableDataMissing(String),

    /// Nothing to fall back to
    #[error("no fallback station configured")]
    NoFallbackStation,
}

/// Error returned when sending to a session that has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("timetable session has ended")]
pub struct SessionClosed;
