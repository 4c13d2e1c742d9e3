//! Static station data.
//!
//! Station name → coordinate, and station name → departures per
//! direction. Loaded once and never mutated afterwards.

mod error;
mod source;
mod table;

pub use error::DirectoryError;
pub use table::{StationDirectory, StationDirectoryBuilder, StationTimetable};
