use super::{Location, LocationVector, EARTH_RADIUS_KM};

/// Initial great-circle bearing from `a` to `b` in degrees, `[0, 360)`.
///
/// Coincident locations yield 0.
#[must_use]
pub fn azimuth(a: &Location, b: &Location) -> f64 {
    let phi1 = a.lat().to_radians();
    let phi2 = b.lat().to_radians();
    let d_lon = (b.lon() - a.lon()).to_radians();

    let y = d_lon.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lon.cos();
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Great-circle (haversine) surface distance between `a` and `b` in
/// kilometers, ignoring depth.
#[must_use]
pub fn horizontal_distance(a: &Location, b: &Location) -> f64 {
    let phi1 = a.lat().to_radians();
    let phi2 = b.lat().to_radians();
    let d_phi = phi2 - phi1;
    let d_lon = (b.lon() - a.lon()).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lon / 2.0).sin().powi(2);
    // Clamp guards against sqrt(h) nudging past 1 for near-antipodal pairs.
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Slant distance between `a` and `b` in kilometers: the great-circle
/// surface separation combined with the depth delta.
///
/// Positive, symmetric, and zero only when the locations coincide. This is
/// the single distance formula used throughout surface construction, so
/// derived row and column counts stay mutually consistent.
#[must_use]
pub fn distance(a: &Location, b: &Location) -> f64 {
    horizontal_distance(a, b).hypot(b.depth() - a.depth())
}

/// Vector from `a` to `b`: azimuth, horizontal distance, and signed
/// vertical distance (`b.depth() - a.depth()`).
#[must_use]
pub fn vector_between(a: &Location, b: &Location) -> LocationVector {
    LocationVector::new(
        azimuth(a, b),
        horizontal_distance(a, b),
        b.depth() - a.depth(),
    )
}
