//! Built-in position providers.

use crate::domain::Position;

use super::{GeolocationError, GeolocationProvider, PositionOptions};

/// Always reports the same position.
///
/// Stands in for the platform service when the position is configured
/// up front.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(Position);

impl FixedPosition {
    pub fn new(position: Position) -> Self {
        Self(position)
    }
}

impl GeolocationProvider for FixedPosition {
    async fn get_position(&self, _options: &PositionOptions) -> Result<Position, GeolocationError> {
        Ok(self.0)
    }
}

/// A platform without location capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl GeolocationProvider for Unsupported {
    async fn get_position(&self, _options: &PositionOptions) -> Result<Position, GeolocationError> {
        Err(GeolocationError::Unsupported)
    }
}
