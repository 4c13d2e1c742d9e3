//! One-shot position lookup.
//!
//! The platform location service is a collaborator behind the
//! `GeolocationProvider` trait. Providers never retry; `locate` enforces
//! the configured timeout, which is the only way a request is cancelled.

mod error;
mod providers;

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::domain::Position;

pub use error::GeolocationError;
pub use providers::{FixedPosition, Unsupported};

/// Options for a single position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    /// How long to wait for the location service.
    pub timeout: Duration,

    /// Ask for a precise fix. Off trades accuracy for speed and battery.
    pub high_accuracy: bool,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            high_accuracy: false,
        }
    }
}

/// Something that can report where the user is.
pub trait GeolocationProvider {
    /// Request the current position once.
    fn get_position(
        &self,
        options: &PositionOptions,
    ) -> impl Future<Output = Result<Position, GeolocationError>> + Send;
}

/// Request a position, giving up after `options.timeout`.
pub async fn locate<G: GeolocationProvider>(
    provider: &G,
    options: &PositionOptions,
) -> Result<Position, GeolocationError> {
    debug!(
        timeout_ms = options.timeout.as_millis() as u64,
        high_accuracy = options.high_accuracy,
        "requesting position"
    );
    tokio::time::timeout(options.timeout, provider.get_position(options))
        .await
        .map_err(|_| GeolocationError::TimedOut)?
}
