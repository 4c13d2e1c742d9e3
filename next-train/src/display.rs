//! The display layer seam.
//!
//! The controller and countdown publish to a `DisplaySink` and never read
//! anything back. Rendering lives outside this crate; two sinks ship with
//! it: `RecordingDisplay` captures notifications in order, and
//! `ConsoleDisplay` prints them.

use std::io::Write;
use std::sync::Mutex;

use crate::countdown::Remaining;
use crate::domain::Direction;
use crate::projection::Projection;

/// Receiver of display notifications.
pub trait DisplaySink: Send + Sync {
    fn show_loading(&self, message: &str);

    fn hide_loading(&self);

    fn show_error(&self, message: &str);

    /// Non-fatal information, e.g. that a fallback station is shown.
    fn show_notice(&self, message: &str);

    fn update_station_name(&self, name: &str);

    fn update_timetable(&self, projection: &Projection, direction: Direction);

    /// `None` clears the countdown.
    fn update_countdown(&self, remaining: Option<Remaining>);
}

/// One recorded display notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    Loading(String),
    LoadingDone,
    Error(String),
    Notice(String),
    StationName(String),
    Timetable {
        projection: Projection,
        direction: Direction,
    },
    Countdown(Option<Remaining>),
}

/// Records every notification it receives.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    events: Mutex<Vec<DisplayEvent>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    pub fn events(&self) -> Vec<DisplayEvent> {
        self.lock().clone()
    }

    /// The most recent timetable update.
    pub fn last_timetable(&self) -> Option<(Projection, Direction)> {
        self.lock().iter().rev().find_map(|e| match e {
            DisplayEvent::Timetable {
                projection,
                direction,
            } => Some((projection.clone(), *direction)),
            _ => None,
        })
    }

    /// The most recent countdown update.
    pub fn last_countdown(&self) -> Option<Option<Remaining>> {
        self.lock().iter().rev().find_map(|e| match e {
            DisplayEvent::Countdown(remaining) => Some(*remaining),
            _ => None,
        })
    }

    /// Discard everything recorded so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn record(&self, event: DisplayEvent) {
        self.lock().push(event);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<DisplayEvent>> {
        // A panic while recording leaves the Vec intact.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DisplaySink for RecordingDisplay {
    fn show_loading(&self, message: &str) {
        self.record(DisplayEvent::Loading(message.to_string()));
    }

    fn hide_loading(&self) {
        self.record(DisplayEvent::LoadingDone);
    }

    fn show_error(&self, message: &str) {
        self.record(DisplayEvent::Error(message.to_string()));
    }

    fn show_notice(&self, message: &str) {
        self.record(DisplayEvent::Notice(message.to_string()));
    }

    fn update_station_name(&self, name: &str) {
        self.record(DisplayEvent::StationName(name.to_string()));
    }

    fn update_timetable(&self, projection: &Projection, direction: Direction) {
        self.record(DisplayEvent::Timetable {
            projection: projection.clone(),
            direction,
        });
    }

    fn update_countdown(&self, remaining: Option<Remaining>) {
        self.record(DisplayEvent::Countdown(remaining));
    }
}

/// Prints notifications to the terminal; the countdown rewrites one line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDisplay;

impl ConsoleDisplay {
    fn board_lines(projection: &Projection) -> (String, String) {
        let next = match &projection.next {
            Some(departure) => departure.to_string(),
            None => "--:-- 本日の列車は終了しました".to_string(),
        };
        let following = match &projection.following {
            Some(departure) => departure.to_string(),
            None => "--:--".to_string(),
        };
        (next, following)
    }
}

impl DisplaySink for ConsoleDisplay {
    fn show_loading(&self, message: &str) {
        println!("{message}");
    }

    fn hide_loading(&self) {}

    fn show_error(&self, message: &str) {
        eprintln!("Error: {message}");
    }

    fn show_notice(&self, message: &str) {
        println!("Note: {message}");
    }

    fn update_station_name(&self, name: &str) {
        println!("{name}駅");
    }

    fn update_timetable(&self, projection: &Projection, direction: Direction) {
        let (next, following) = Self::board_lines(projection);
        println!("[{direction}] next:      {next}");
        println!("[{direction}] following: {following}");
    }

    fn update_countdown(&self, remaining: Option<Remaining>) {
        let mut out = std::io::stdout().lock();
        let _ = match remaining {
            Some(remaining) => write!(out, "\rdeparts in {remaining}   "),
            None => write!(out, "\r                    \r"),
        };
        let _ = out.flush();
    }
}
