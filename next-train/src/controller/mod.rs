//! Timetable session orchestration.
//!
//! `TimetableController` sequences geolocation, nearest-station
//! resolution and departure projection, and keeps the result live with
//! the countdown. All work happens on one task: UI requests and countdown
//! elapse notifications arrive as `SessionEvent`s on a channel and are
//! handled one at a time, so nothing touches the session concurrently.

mod config;
mod error;
mod event;


use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, trace, warn};

use crate::clock::{Clock, SystemClock};
use crate::countdown::CountdownScheduler;
use crate::directory::StationDirectory;
use crate::display::DisplaySink;
use crate::domain::{ClockTime, Direction};
use crate::geo;
use crate::geolocation::{self, GeolocationProvider};
use crate::projection::{self, Projection};

pub use config::ControllerConfig;
pub use error::{SessionClosed, TimetableError};
pub use event::{SessionEvent, SessionHandle};

/// Message shown while the position is being looked up.
const LOADING_MESSAGE: &str = "Finding the nearest station...";

/// What the session is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Settled by initialization; `None` until then or after a terminal error.
    pub station: Option<String>,

    /// Changed by explicit direction switches.
    pub direction: Direction,
}

/// Drives one timetable session.
pub struct TimetableController<G, D, C = SystemClock> {
    directory: Arc<StationDirectory>,
    geolocation: G,
    display: Arc<D>,
    clock: Arc<C>,
    config: ControllerConfig,
    session: SessionState,
    countdown: CountdownScheduler<C, D>,
    events_tx: UnboundedSender<SessionEvent>,
    events_rx: UnboundedReceiver<SessionEvent>,
}

impl<G, D, C> TimetableController<G, D, C>
where
    G: GeolocationProvider,
    D: DisplaySink + 'static,
    C: Clock + 'static,
{
    pub fn new(
        directory: Arc<StationDirectory>,
        geolocation: G,
        display: Arc<D>,
        clock: Arc<C>,
        config: ControllerConfig,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let countdown =
            CountdownScheduler::new(Arc::clone(&clock), Arc::clone(&display), events_tx.clone());
        let session = SessionState {
            station: None,
            direction: config.default_direction,
        };

        Self {
            directory,
            geolocation,
            display,
            clock,
            config,
            session,
            countdown,
            events_tx,
            events_rx,
        }
    }

    /// Current session state.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// A handle the UI can use to send events to this session.
    pub fn handle(&self) -> SessionHandle {
        SessionHandle::new(self.events_tx.clone())
    }

    /// True while a departure countdown is ticking.
    pub fn countdown_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// Locate the user, settle on a station and show its timetable.
    ///
    /// Geolocation and resolution failures fall back to the configured
    /// station with a notice. If even that has no timetable data the
    /// error is shown, the display is left empty and the error returned.
    pub async fn initialize(&mut self) -> Result<String, TimetableError> {
        self.countdown.stop();
        self.display.show_loading(LOADING_MESSAGE);

        let station = match self.locate_station().await {
            Ok(station) => station,
            Err(reason) => match self.fallback_station() {
                Some(fallback) => {
                    warn!(%reason, %fallback, "falling back to default station");
                    self.display
                        .show_notice(&format!("{reason}; showing {fallback} instead"));
                    fallback
                }
                None => return self.fail(TimetableError::NoFallbackStation),
            },
        };

        if !self.directory.has_timetable(&station) {
            return self.fail(TimetableError::TimetableDataMissing(station));
        }

        info!(%station, "station settled");
        self.session.station = Some(station.clone());
        self.display.update_station_name(&station);
        self.display_current_timetable(self.config.default_direction);
        self.display.hide_loading();

        Ok(station)
    }

    /// Show the next departures from the current station in `direction`.
    ///
    /// With no station, or no data for this direction, an empty projection
    /// is shown and the countdown cleared.
    pub fn display_current_timetable(&mut self, direction: Direction) {
        self.session.direction = direction;

        let departures = self
            .session
            .station
            .as_deref()
            .and_then(|station| self.directory.timetable_of(station, direction));

        let Some(departures) = departures else {
            debug!(%direction, station = ?self.session.station, "nothing to project");
            self.countdown.stop();
            self.display.update_timetable(&Projection::empty(), direction);
            self.display.update_countdown(None);
            return;
        };

        let now = ClockTime::of(&self.clock.now());
        let projection = projection::project(departures, now);
        debug!(
            %direction,
            %now,
            next = ?projection.next.as_ref().map(|d| d.time.as_str()),
            following = ?projection.following.as_ref().map(|d| d.time.as_str()),
            "projected departures"
        );

        self.display.update_timetable(&projection, direction);
        self.countdown.start(projection.next.as_ref());
    }

    /// Wait for the next session event and handle it.
    ///
    /// Returns `false` once the session has been shut down.
    pub async fn step(&mut self) -> bool {
        match self.events_rx.recv().await {
            Some(event) => self.handle_event(event).await,
            None => false,
        }
    }

    /// Handle events until shutdown.
    pub async fn run(mut self) {
        while self.step().await {}
        self.countdown.stop();
        info!("timetable session ended");
    }

    async fn handle_event(&mut self, event: SessionEvent) -> bool {
        trace!(?event, "session event");
        match event {
            SessionEvent::SwitchDirection(direction) => self.display_current_timetable(direction),
            SessionEvent::ToggleDirection => {
                self.display_current_timetable(self.session.direction.opposite())
            }
            SessionEvent::Redisplay => self.display_current_timetable(self.session.direction),
            SessionEvent::Reinitialize => {
                if let Err(e) = self.initialize().await {
                    debug!(error = %e, "re-initialization ended without a station");
                }
            }
            SessionEvent::DepartureElapsed { generation } => {
                if self.countdown.is_current(generation) {
                    self.display_current_timetable(self.session.direction);
                } else {
                    trace!(generation, "ignoring stale countdown");
                }
            }
            SessionEvent::Shutdown => {
                self.countdown.stop();
                return false;
            }
        }
        true
    }

    /// The nearest station with timetable data, or why there is none.
    async fn locate_station(&self) -> Result<String, TimetableError> {
        let position = geolocation::locate(&self.geolocation, &self.config.position).await?;
        let nearest =
            geo::resolve(position, &self.directory).ok_or(TimetableError::StationNotResolved)?;

        if !self.directory.has_timetable(&nearest.name) {
            return Err(TimetableError::TimetableDataMissing(nearest.name));
        }
        Ok(nearest.name)
    }

    fn fallback_station(&self) -> Option<String> {
        self.config
            .fallback_station
            .clone()
            .or_else(|| self.directory.fallback_station().map(str::to_string))
    }

    /// Leave the display empty and surface a terminal error.
    fn fail(&mut self, err: TimetableError) -> Result<String, TimetableError> {
        error!(error = %err, "no timetable to display");
        self.session.station = None;
        self.countdown.stop();
        self.display
            .update_timetable(&Projection::empty(), self.session.direction);
        self.display.update_countdown(None);
        self.display.hide_loading();
        self.display.show_error(&err.to_string());
        Err(err)
    }
}
