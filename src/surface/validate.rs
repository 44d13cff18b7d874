use crate::error::{Result, SurfaceError};
use crate::geo::{azimuth, horizontal_distance, strike, Trace, TOLERANCE};

/// Checks that an upper/lower trace pair adheres to the right-hand rule:
/// the direction the surface descends toward must lie within 180 degrees
/// clockwise of the upper trace's strike.
///
/// Construction never runs this check; catalog geometry is normally
/// validated before surfaces are built. Callers holding unvetted traces can
/// run it as a separate pass and decide whether a violation is fatal or
/// merely worth logging.
///
/// A purely vertical pair (no horizontal separation between the first
/// points) has no descent direction to test and passes vacuously.
///
/// # Errors
///
/// Returns an error carrying the offending strike and dip azimuth when the
/// convention is violated, or when the upper trace has no defined strike.
pub fn check_right_hand_rule(upper: &Trace, lower: &Trace) -> Result<()> {
    if horizontal_distance(upper.first(), lower.first()) < TOLERANCE {
        return Ok(());
    }

    let strike_deg = strike(upper)?;
    let dip_azimuth = azimuth(upper.first(), lower.first());

    let delta = (dip_azimuth - strike_deg).rem_euclid(360.0);
    if delta <= 0.0 || delta >= 180.0 {
        return Err(SurfaceError::RightHandRule {
            strike: strike_deg,
            dip_azimuth,
        }
        .into());
    }
    Ok(())
}
