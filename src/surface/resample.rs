use log::debug;

use crate::error::{Result, SurfaceError};
use crate::geo::{distance, translate, vector_between, Trace};

/// Resamples `trace` into `segments` equal-length segments, returning a new
/// trace with `segments + 1` points.
///
/// Points are spaced evenly in cumulative path length, so the resampled
/// curve follows the original polyline rather than the single great circle
/// between its endpoints. Interior points are placed by translating a
/// scaled copy of the containing segment's vector, which interpolates depth
/// linearly along each segment. The first and last points are copied from
/// the input exactly.
///
/// # Errors
///
/// Returns an error if `segments` is zero.
pub fn resample(trace: &Trace, segments: usize) -> Result<Trace> {
    if segments == 0 {
        return Err(SurfaceError::ZeroSegments.into());
    }

    let points = trace.points();

    // Cumulative path length up to each input point.
    let mut cumulative = Vec::with_capacity(points.len());
    cumulative.push(0.0);
    let mut total = 0.0;
    for pair in points.windows(2) {
        total += distance(&pair[0], &pair[1]);
        cumulative.push(total);
    }

    #[allow(clippy::cast_precision_loss)]
    let interval = total / segments as f64;
    debug!(
        "resampling {} points over {total:.3} km at {interval:.3} km intervals",
        points.len()
    );

    let mut resampled = Vec::with_capacity(segments + 1);
    resampled.push(*trace.first());

    let mut seg = 0;
    for k in 1..segments {
        #[allow(clippy::cast_precision_loss)]
        let target = interval * k as f64;
        // Advance to the segment containing the target length. Zero-length
        // segments never satisfy the walk and are skipped.
        while seg + 2 < cumulative.len() && cumulative[seg + 1] <= target {
            seg += 1;
        }
        let seg_len = cumulative[seg + 1] - cumulative[seg];
        let frac = if seg_len > 0.0 {
            (target - cumulative[seg]) / seg_len
        } else {
            0.0
        };
        let step = vector_between(&points[seg], &points[seg + 1]).scaled(frac);
        resampled.push(translate(&points[seg], &step));
    }

    resampled.push(*trace.last());
    Ok(Trace::from_points(resampled))
}
