use super::{Location, LocationVector, EARTH_RADIUS_KM};

/// Applies `vector` to `origin`, returning the displaced location.
///
/// The horizontal component moves the point along the great circle leaving
/// `origin` at the vector's azimuth; the vertical component adds to depth.
/// Inverse-consistent with [`vector_between`](super::vector_between):
/// translating `a` by the vector from `a` to `b` reproduces `b` to within
/// floating-point tolerance.
#[must_use]
pub fn translate(origin: &Location, vector: &LocationVector) -> Location {
    let phi1 = origin.lat().to_radians();
    let lam1 = origin.lon().to_radians();
    let theta = vector.azimuth().to_radians();
    // Angular distance subtended by the horizontal displacement.
    let delta = vector.horizontal() / EARTH_RADIUS_KM;

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
    let lam2 = lam1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    Location::new(
        phi2.to_degrees(),
        lam2.to_degrees(),
        origin.depth() + vector.vertical(),
    )
}
