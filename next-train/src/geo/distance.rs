//! Short-range distance between two positions.

use crate::domain::Position;

/// Scale factor applied to radian deltas.
const KM_SCALE: f64 = 111.319;

/// Planar (equirectangular) distance between two positions.
///
/// Degrees are converted to radians, the longitude delta is scaled by
/// the cosine of the first latitude, and the result is the Euclidean
/// norm of the scaled deltas. Only meaningful over the few tens of
/// kilometres between neighbouring stations on one line; it is not a
/// great-circle distance and must not be used for long spans.
///
/// The cosine uses the first position's latitude, so for points at
/// different latitudes swapping the arguments changes the result
/// slightly. Within a line this is far below any tie-break margin.
pub fn distance_km(from: Position, to: Position) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lon1 = from.longitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let lon2 = to.longitude.to_radians();

    let km_per_lat = KM_SCALE;
    let km_per_lon = KM_SCALE * lat1.cos();

    let dx = (lon2 - lon1) * km_per_lon;
    let dy = (lat2 - lat1) * km_per_lat;

    (dx * dx + dy * dy).sqrt()
}
