//! Session events and the handle the UI sends them through.

use tokio::sync::mpsc::UnboundedSender;

use crate::domain::Direction;

use super::error::SessionClosed;

/// Something the session should react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The user picked a direction.
    SwitchDirection(Direction),

    /// The user flipped to the other direction.
    ToggleDirection,

    /// Re-project the current station and direction.
    Redisplay,

    /// Locate the user again and start over.
    Reinitialize,

    /// A countdown reached its departure time.
    DepartureElapsed { generation: u64 },

    /// End the session.
    Shutdown,
}

/// Cloneable sender for UI-initiated session events.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: UnboundedSender<SessionEvent>,
}

impl SessionHandle {
    pub(crate) fn new(tx: UnboundedSender<SessionEvent>) -> Self {
        Self { tx }
    }

    pub fn switch_direction(&self, direction: Direction) -> Result<(), SessionClosed> {
        self.send(SessionEvent::SwitchDirection(direction))
    }

    pub fn toggle_direction(&self) -> Result<(), SessionClosed> {
        self.send(SessionEvent::ToggleDirection)
    }

    pub fn redisplay(&self) -> Result<(), SessionClosed> {
        self.send(SessionEvent::Redisplay)
    }

    pub fn reinitialize(&self) -> Result<(), SessionClosed> {
        self.send(SessionEvent::Reinitialize)
    }

    pub fn shutdown(&self) -> Result<(), SessionClosed> {
        self.send(SessionEvent::Shutdown)
    }

    fn send(&self, event: SessionEvent) -> Result<(), SessionClosed> {
        self.tx.send(event).map_err(|_| SessionClosed)
    }
}
