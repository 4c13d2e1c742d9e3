//! Geolocation error types.

/// Why a position could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    /// The platform has no location capability
    #[error("geolocation is not supported on this platform")]
    Unsupported,

    /// The user refused location access
    #[error("location permission denied")]
    PermissionDenied,

    /// Signal or hardware failure
    #[error("position unavailable")]
    Unavailable,

    /// No answer within the configured timeout
    #[error("location request timed out")]
    TimedOut,

    /// Any other failure reported by the platform
    #[error("unknown geolocation error: {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            GeolocationError::TimedOut.to_string(),
            "location request timed out"
        );
        assert_eq!(
            GeolocationError::Unknown("no fix".into()).to_string(),
            "unknown geolocation error: no fix"
        );
    }
}
