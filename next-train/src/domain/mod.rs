//! Domain types for the timetable widget.
//!
//! Times, directions, departures and positions. Types that can be
//! validated at construction are; departures keep their published time
//! string so bad data can be excluded at projection time instead of
//! failing the whole load.

mod departure;
mod direction;
mod time;

pub use departure::{Departure, Position, StationCoordinate};
pub use direction::{Direction, InvalidDirection};
pub use time::{ClockTime, TimeError};
