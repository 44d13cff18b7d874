use nalgebra::Vector3;

use crate::error::{GeoError, Result};

use super::{Location, TOLERANCE};

/// Geometric mean position of a set of locations.
///
/// Positions are averaged as unit vectors on the sphere and the mean is
/// projected back to latitude and longitude; depths are averaged
/// arithmetically.
///
/// # Errors
///
/// Returns an error if `points` is empty, or if the unit vectors cancel
/// exactly (antipodal symmetry) leaving no defined mean direction.
pub fn centroid(points: &[Location]) -> Result<Location> {
    if points.is_empty() {
        return Err(GeoError::EmptyPointSet.into());
    }

    let mut sum = Vector3::zeros();
    let mut depth_sum = 0.0;
    for p in points {
        let phi = p.lat().to_radians();
        let lam = p.lon().to_radians();
        sum += Vector3::new(phi.cos() * lam.cos(), phi.cos() * lam.sin(), phi.sin());
        depth_sum += p.depth();
    }

    let norm = sum.norm();
    if norm < TOLERANCE {
        return Err(GeoError::Degenerate("centroid direction cancels to zero".into()).into());
    }
    let mean = sum / norm;

    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    Ok(Location::new(
        mean.z.asin().to_degrees(),
        mean.y.atan2(mean.x).to_degrees(),
        depth_sum / n,
    ))
}
