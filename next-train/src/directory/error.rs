//! Station directory error types.

use std::path::PathBuf;

use crate::domain::Direction;

/// Errors that can occur while loading a station directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Data file could not be read
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data did not match the directory schema
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The same station name appears twice in the coordinate table
    #[error("duplicate station {0:?} in coordinate table")]
    DuplicateStation(String),

    /// A departure sequence is not in ascending time order
    #[error("departures for {station} ({direction}) are out of order at {time}")]
    Unsorted {
        station: String,
        direction: Direction,
        time: String,
    },
}
