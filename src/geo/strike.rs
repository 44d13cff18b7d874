use nalgebra::Vector2;

use crate::error::{GeoError, Result};

use super::{vector_between, Trace, TOLERANCE};

/// Best-fit strike direction of a trace in degrees, `[0, 360)`.
///
/// Computed as the segment-length-weighted circular mean of the segment
/// azimuths, so a densely digitized bend does not dominate the direction
/// the way a per-vertex average would.
///
/// # Errors
///
/// Returns an error if the weighted segment directions cancel (an
/// out-and-back trace with no net direction).
pub fn strike(trace: &Trace) -> Result<f64> {
    let mut sum = Vector2::zeros();
    for pair in trace.points().windows(2) {
        let v = vector_between(&pair[0], &pair[1]);
        let az = v.azimuth().to_radians();
        sum += Vector2::new(az.sin(), az.cos()) * v.horizontal();
    }

    if sum.norm() < TOLERANCE {
        return Err(GeoError::Degenerate("trace has no net strike direction".into()).into());
    }
    Ok(sum.x.atan2(sum.y).to_degrees().rem_euclid(360.0))
}
