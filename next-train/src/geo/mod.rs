//! Geographic helpers: planar distance and nearest-station resolution.

mod distance;
mod nearest;

pub use distance::distance_km;
pub use nearest::{NearestStation, resolve};
