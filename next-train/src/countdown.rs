//! Live countdown to the next departure.
//!
//! `CountdownScheduler` is a two-state machine. While running it owns one
//! tokio task that publishes the time remaining once a second; when the
//! departure time arrives the task tells the controller to re-project and
//! ends. Starting a new countdown always aborts the previous task first,
//! so at most one countdown ever ticks.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace, warn};

use crate::clock::Clock;
use crate::controller::SessionEvent;
use crate::display::DisplaySink;
use crate::domain::Departure;

const TICK: Duration = Duration::from_secs(1);

/// Time left until a departure, whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Remaining {
    pub minutes: u64,
    pub seconds: u64,
}

impl Remaining {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            minutes: total / 60,
            seconds: total % 60,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

/// Time left from `now` until `target`, floored to whole seconds.
///
/// `None` once the target has been reached.
pub fn remaining_until(target: NaiveDateTime, now: NaiveDateTime) -> Option<Remaining> {
    if target <= now {
        return None;
    }
    let seconds = (target - now).num_seconds();
    Some(Remaining::from_seconds(seconds.max(0) as u64))
}

enum CountdownState {
    Idle,
    Running {
        target: NaiveDateTime,
        generation: u64,
        task: JoinHandle<()>,
    },
}

/// Drives the per-second countdown for the current next departure.
pub struct CountdownScheduler<C, D> {
    clock: Arc<C>,
    display: Arc<D>,
    events: UnboundedSender<SessionEvent>,
    state: CountdownState,
    generation: u64,
}

impl<C, D> CountdownScheduler<C, D>
where
    C: Clock + 'static,
    D: DisplaySink + 'static,
{
    pub fn new(clock: Arc<C>, display: Arc<D>, events: UnboundedSender<SessionEvent>) -> Self {
        Self {
            clock,
            display,
            events,
            state: CountdownState::Idle,
            generation: 0,
        }
    }

    /// Start counting down to `departure`, today.
    ///
    /// Cancels any running countdown first. With no departure (service
    /// has ended) the scheduler goes idle and clears the countdown.
    pub fn start(&mut self, departure: Option<&Departure>) {
        self.stop();

        let Some(departure) = departure else {
            self.display.update_countdown(None);
            return;
        };
        let time = match departure.clock_time() {
            Ok(time) => time,
            Err(e) => {
                warn!(time = %departure.time, error = %e, "cannot count down to malformed departure");
                self.display.update_countdown(None);
                return;
            }
        };

        let target = time.on(self.clock.now().date());
        let generation = self.generation;
        debug!(%target, generation, "starting countdown");

        let clock = Arc::clone(&self.clock);
        let display = Arc::clone(&self.display);
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                match remaining_until(target, clock.now()) {
                    Some(remaining) => {
                        trace!(%remaining, "countdown tick");
                        display.update_countdown(Some(remaining));
                    }
                    None => {
                        debug!(%target, generation, "departure time reached");
                        // The receiver only goes away when the session ends.
                        let _ = events.send(SessionEvent::DepartureElapsed { generation });
                        break;
                    }
                }
            }
        });

        self.state = CountdownState::Running {
            target,
            generation,
            task,
        };
    }

    /// Cancel the running countdown, if any.
    pub fn stop(&mut self) {
        if let CountdownState::Running { task, .. } =
            std::mem::replace(&mut self.state, CountdownState::Idle)
        {
            task.abort();
        }
        self.generation += 1;
    }

    /// True while a countdown task is ticking.
    pub fn is_running(&self) -> bool {
        matches!(&self.state, CountdownState::Running { task, .. } if !task.is_finished())
    }

    /// The departure currently counted down to.
    pub(crate) fn target(&self) -> Option<NaiveDateTime> {
        match &self.state {
            CountdownState::Running { target, .. } => Some(*target),
            CountdownState::Idle => None,
        }
    }

    /// Whether an elapse notification came from the current countdown.
    ///
    /// Notifications from countdowns that were since stopped or replaced
    /// are stale.
    pub fn is_current(&self, generation: u64) -> bool {
        matches!(&self.state, CountdownState::Running { generation: g, .. } if *g == generation)
    }
}

impl<C, D> Drop for CountdownScheduler<C, D> {
    fn drop(&mut self) {
        if let CountdownState::Running { task, .. } = &self.state {
            task.abort();
        }
    }
}
