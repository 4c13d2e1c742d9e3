//! Next-train timetable widget core.
//!
//! Finds the station nearest to the user, projects its timetable onto
//! the current time, and keeps a live countdown to the next departure.

pub mod clock;
pub mod config;
pub mod controller;
pub mod countdown;
pub mod directory;
pub mod display;
pub mod domain;
pub mod geo;
pub mod geolocation;
pub mod projection;
