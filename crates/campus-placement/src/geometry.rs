//! Planar distance between grid locations.

use campus_core::Location;

/// Euclidean distance between two integer coordinate pairs.
///
/// Differences are taken in `f64`, so extreme coordinates cannot overflow.
pub fn distance(a: Location, b: Location) -> f64 {
    let dx = f64::from(b.x) - f64::from(a.x);
    let dy = f64::from(b.y) - f64::from(a.y);
    dx.hypot(dy)
}
