use log::debug;

use crate::error::{Result, SurfaceError};
use crate::geo::{centroid, distance, strike, translate, vector_between, Location, Trace};

use super::grid::Grid;
use super::resample::resample;

/// A fault surface discretized into a rectangular grid of locations lying
/// between an upper and a lower boundary trace.
///
/// Grid spacing is scaled to be as close to the requested target spacing as
/// possible over the whole surface. The supplied traces must adhere to the
/// right-hand rule (the surface dips to the right of the direction of
/// travel along the upper trace); see
/// [`check_right_hand_rule`](super::check_right_hand_rule) for an explicit
/// check. If the convention is violated the builder still succeeds and
/// produces a geometrically inverted but structurally valid surface.
///
/// All derived attributes are computed once at construction; reads are
/// side-effect-free and safe from concurrent readers.
#[derive(Debug, Clone)]
pub struct GriddedSurface {
    grid: Grid,
    spacing: f64,
    strike: f64,
    dip: f64,
    dip_rad: f64,
    depth: f64,
    centroid: Location,
}

impl GriddedSurface {
    /// Builds a surface between `upper` and `lower`, re-sampling both
    /// traces to a common column count derived from `spacing` and filling
    /// each down-dip column by evenly sampling the straight line between
    /// its top and bottom points.
    ///
    /// The column count is the average trace length divided by `spacing`
    /// (plus one) and the row count is the average distance between paired
    /// top and bottom points divided by `spacing` (plus one), each rounded
    /// half-away-from-zero and clamped to the 2-point grid minimum. The
    /// bottom row is reached by repeated translation of a per-step vector,
    /// not snapped to the supplied lower trace, so small discretization
    /// drift from the true lower boundary is expected.
    ///
    /// # Errors
    ///
    /// Returns an error if `spacing` is not positive and finite, or if the
    /// upper trace has no defined strike direction.
    pub fn from_traces(upper: &Trace, lower: &Trace, spacing: f64) -> Result<Self> {
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(SurfaceError::InvalidSpacing(spacing).into());
        }

        let avg_trace_len = (upper.path_length() + lower.path_length()) / 2.0;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let segments = ((avg_trace_len / spacing).round() as usize).max(1);
        let n_cols = segments + 1;

        let upper_rs = resample(upper, segments)?;
        let lower_rs = resample(lower, segments)?;

        let col_dist_sum: f64 = upper_rs
            .iter()
            .zip(lower_rs.iter())
            .map(|(top, bottom)| distance(top, bottom))
            .sum();
        #[allow(clippy::cast_precision_loss)]
        let avg_col_dist = col_dist_sum / n_cols as f64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n_rows = ((avg_col_dist / spacing).round() as usize + 1).max(2);

        debug!(
            "gridding: avg trace length {avg_trace_len:.3} km, \
             avg column distance {avg_col_dist:.3} km, {n_rows} rows x {n_cols} cols"
        );

        // Fill column by column, then flatten to row-major storage.
        let mut columns: Vec<Vec<Location>> = Vec::with_capacity(n_cols);
        for (top, bottom) in upper_rs.iter().zip(lower_rs.iter()) {
            let full = vector_between(top, bottom);
            #[allow(clippy::cast_precision_loss)]
            let step = full.scaled(1.0 / (n_rows - 1) as f64);

            let mut column = Vec::with_capacity(n_rows);
            column.push(*top);
            let mut prev = *top;
            for _ in 1..n_rows {
                let next = translate(&prev, &step);
                column.push(next);
                prev = next;
            }
            columns.push(column);
        }

        let mut points = Vec::with_capacity(n_rows * n_cols);
        for r in 0..n_rows {
            for column in &columns {
                points.push(column[r]);
            }
        }
        let grid = Grid::new(n_rows, n_cols, points)?;

        // Dip: plunge of the end-column vectors between the unresampled
        // traces, averaged.
        let plunge_first = vector_between(upper.first(), lower.first()).plunge();
        let plunge_last = vector_between(upper.last(), lower.last()).plunge();
        let dip = (plunge_first + plunge_last) / 2.0;

        Ok(Self {
            spacing,
            strike: strike(upper)?,
            dip,
            dip_rad: dip.to_radians(),
            depth: upper.depth(),
            centroid: centroid(grid.points())?,
            grid,
        })
    }

    /// Best-fit strike of the original upper trace in degrees, `[0, 360)`.
    #[must_use]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Average dip in degrees: the mean plunge of the vectors joining the
    /// first and last points of the upper and lower traces.
    #[must_use]
    pub fn dip(&self) -> f64 {
        self.dip
    }

    /// Average dip in radians.
    #[must_use]
    pub fn dip_rad(&self) -> f64 {
        self.dip_rad
    }

    /// Compass direction the surface descends toward.
    ///
    /// # Errors
    ///
    /// Always returns an error: a dip direction consistent with the
    /// right-hand rule is not derivable from the approximate grid geometry,
    /// and callers must handle the absence rather than receive a wrong
    /// number.
    pub fn dip_direction(&self) -> Result<f64> {
        Err(SurfaceError::DipDirectionUnsupported.into())
    }

    /// Depth of the first point of the upper trace in kilometers.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Geometric centroid of all grid points.
    #[must_use]
    pub fn centroid(&self) -> Location {
        self.centroid
    }

    /// The target spacing the surface was built with, in kilometers.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// The underlying point grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of down-dip rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of along-strike columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// The point at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Location> {
        self.grid.get(row, col)
    }

    /// Row `index` as a trace, or `None` if out of bounds.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<Trace> {
        self.grid
            .row(index)
            .map(|points| Trace::from_points(points.to_vec()))
    }

    /// The closed outline of the surface: the top row left-to-right, the
    /// bottom row right-to-left, and the first point again to close the
    /// loop. Contains exactly `2 * cols + 1` points; pure reordering of
    /// grid points.
    #[must_use]
    pub fn perimeter(&self) -> Trace {
        let cols = self.grid.cols();
        let all = self.grid.points();
        let top = &all[..cols];
        let bottom = &all[all.len() - cols..];

        let mut points = Vec::with_capacity(2 * cols + 1);
        points.extend_from_slice(top);
        points.extend(bottom.iter().rev().copied());
        points.push(top[0]);
        Trace::from_points(points)
    }

    /// Mean distance between laterally adjacent grid points, averaged over
    /// all rows.
    #[must_use]
    pub fn spacing_along_strike(&self) -> f64 {
        let cols = self.grid.cols();
        let all = self.grid.points();
        let mut sum = 0.0;
        let mut count = 0usize;
        for r in 0..self.grid.rows() {
            for pair in all[r * cols..(r + 1) * cols].windows(2) {
                sum += distance(&pair[0], &pair[1]);
                count += 1;
            }
        }
        #[allow(clippy::cast_precision_loss)]
        let n = count as f64;
        sum / n
    }

    /// Mean distance between vertically adjacent grid points, averaged
    /// over all columns.
    #[must_use]
    pub fn spacing_down_dip(&self) -> f64 {
        let cols = self.grid.cols();
        let all = self.grid.points();
        let mut sum = 0.0;
        let mut count = 0usize;
        for c in 0..cols {
            for r in 0..self.grid.rows() - 1 {
                sum += distance(&all[r * cols + c], &all[(r + 1) * cols + c]);
                count += 1;
            }
        }
        #[allow(clippy::cast_precision_loss)]
        let n = count as f64;
        sum / n
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FaultGridError;
    use crate::geo::LocationVector;
    use approx::assert_relative_eq;

    fn trace(points: &[(f64, f64, f64)]) -> Trace {
        Trace::new(
            points
                .iter()
                .map(|&(lat, lon, depth)| Location::new(lat, lon, depth))
                .collect(),
        )
        .unwrap()
    }

    /// One degree of latitude along-strike, 40 km of pure depth offset.
    fn vertical_fault() -> (Trace, Trace) {
        (
            trace(&[(0.0, 0.0, 10.0), (1.0, 0.0, 10.0)]),
            trace(&[(0.0, 0.0, 50.0), (1.0, 0.0, 50.0)]),
        )
    }

    #[test]
    fn vertical_fault_dimensions() {
        let (upper, lower) = vertical_fault();
        let surf = GriddedSurface::from_traces(&upper, &lower, 10.0).unwrap();
        // ~111.2 km along strike at 10 km spacing -> 11 segments, 12 cols;
        // 40 km down dip -> 5 rows.
        assert_eq!(surf.cols(), 12);
        assert_eq!(surf.rows(), 5);
        assert_eq!(surf.grid().len(), 60);
    }

    #[test]
    fn vertical_fault_dips_ninety() {
        let (upper, lower) = vertical_fault();
        let surf = GriddedSurface::from_traces(&upper, &lower, 10.0).unwrap();
        assert_relative_eq!(surf.dip(), 90.0, epsilon = 1e-9);
        assert_relative_eq!(surf.dip_rad(), std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn depth_is_upper_trace_first_point_depth() {
        let (upper, lower) = vertical_fault();
        let surf = GriddedSurface::from_traces(&upper, &lower, 10.0).unwrap();
        assert!((surf.depth() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn strike_follows_upper_trace() {
        let (upper, lower) = vertical_fault();
        let surf = GriddedSurface::from_traces(&upper, &lower, 10.0).unwrap();
        assert!(surf.strike().abs() < 1e-6, "strike {}", surf.strike());
    }

    #[test]
    fn centroid_sits_mid_surface() {
        let (upper, lower) = vertical_fault();
        let surf = GriddedSurface::from_traces(&upper, &lower, 10.0).unwrap();
        let c = surf.centroid();
        assert!((c.lat() - 0.5).abs() < 1e-2, "lat {}", c.lat());
        assert!(c.lon().abs() < 1e-6, "lon {}", c.lon());
        // Row depths run 10, 20, 30, 40, 50.
        assert_relative_eq!(c.depth(), 30.0, epsilon = 1e-6);
    }

    #[test]
    fn rows_step_down_dip() {
        let (upper, lower) = vertical_fault();
        let surf = GriddedSurface::from_traces(&upper, &lower, 10.0).unwrap();
        for r in 0..surf.rows() {
            #[allow(clippy::cast_precision_loss)]
            let expected = 10.0 + 10.0 * r as f64;
            let row = surf.row(r).unwrap();
            for p in &row {
                assert_relative_eq!(p.depth(), expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn identical_traces_collapse_without_error() {
        let t = trace(&[(0.0, 0.0, 10.0), (1.0, 0.0, 10.0)]);
        let surf = GriddedSurface::from_traces(&t, &t, 10.0).unwrap();
        assert!(surf.dip().abs() < 1e-12);
        assert_eq!(surf.rows(), 2);
        let top = surf.row(0).unwrap();
        let bottom = surf.row(1).unwrap();
        for (a, b) in top.iter().zip(bottom.iter()) {
            assert_relative_eq!(a.lat(), b.lat(), epsilon = 1e-9);
            assert_relative_eq!(a.lon(), b.lon(), epsilon = 1e-9);
            assert_relative_eq!(a.depth(), b.depth(), epsilon = 1e-9);
        }
    }

    #[test]
    fn forty_five_degree_dip() {
        let upper = trace(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
        let offset = LocationVector::new(90.0, 40.0, 40.0);
        let lower = Trace::new(
            upper
                .iter()
                .map(|p| crate::geo::translate(p, &offset))
                .collect(),
        )
        .unwrap();
        let surf = GriddedSurface::from_traces(&upper, &lower, 10.0).unwrap();
        assert_relative_eq!(surf.dip(), 45.0, epsilon = 1e-6);
        assert!(surf.dip() >= 0.0 && surf.dip() <= 90.0);
    }

    #[test]
    fn construction_is_deterministic() {
        let (upper, lower) = vertical_fault();
        let a = GriddedSurface::from_traces(&upper, &lower, 10.0).unwrap();
        let b = GriddedSurface::from_traces(&upper, &lower, 10.0).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert!((a.strike() - b.strike()).abs() < f64::EPSILON);
        assert!((a.dip() - b.dip()).abs() < f64::EPSILON);
        assert_eq!(a.centroid(), b.centroid());
    }

    #[test]
    fn perimeter_closes_with_expected_count() {
        let (upper, lower) = vertical_fault();
        let surf = GriddedSurface::from_traces(&upper, &lower, 10.0).unwrap();
        let p = surf.perimeter();
        assert_eq!(p.len(), 2 * surf.cols() + 1);
        assert_eq!(p.first(), p.last());
        // Walks the top row first, then the bottom row backwards.
        assert_eq!(p.points()[0], *surf.get(0, 0).unwrap());
        assert_eq!(
            p.points()[surf.cols()],
            *surf.get(surf.rows() - 1, surf.cols() - 1).unwrap()
        );
    }

    #[test]
    fn grid_spacing_tracks_target() {
        let (upper, lower) = vertical_fault();
        let surf = GriddedSurface::from_traces(&upper, &lower, 10.0).unwrap();
        assert!(
            (surf.spacing_along_strike() - 10.0).abs() < 0.5,
            "along strike {}",
            surf.spacing_along_strike()
        );
        assert!(
            (surf.spacing_down_dip() - 10.0).abs() < 0.5,
            "down dip {}",
            surf.spacing_down_dip()
        );
        assert!((surf.spacing() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn invalid_spacing_is_rejected() {
        let (upper, lower) = vertical_fault();
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = GriddedSurface::from_traces(&upper, &lower, bad).unwrap_err();
            assert!(matches!(
                err,
                FaultGridError::Surface(SurfaceError::InvalidSpacing(_))
            ));
        }
    }

    #[test]
    fn dip_direction_is_unsupported() {
        let (upper, lower) = vertical_fault();
        let surf = GriddedSurface::from_traces(&upper, &lower, 10.0).unwrap();
        let err = surf.dip_direction().unwrap_err();
        assert!(matches!(
            err,
            FaultGridError::Surface(SurfaceError::DipDirectionUnsupported)
        ));
    }

    #[test]
    fn out_of_bounds_queries_are_none() {
        let (upper, lower) = vertical_fault();
        let surf = GriddedSurface::from_traces(&upper, &lower, 10.0).unwrap();
        assert!(surf.get(surf.rows(), 0).is_none());
        assert!(surf.get(0, surf.cols()).is_none());
        assert!(surf.row(surf.rows()).is_none());
    }

    #[test]
    fn bottom_row_drifts_rather_than_snapping() {
        // A dipping, obliquely offset fault: the iteratively translated
        // bottom row approximates the resampled lower trace but is not
        // forced onto it.
        let upper = trace(&[(0.0, 0.0, 5.0), (0.6, 0.1, 5.0), (1.2, 0.0, 5.0)]);
        let lower = trace(&[(0.05, 0.4, 45.0), (0.65, 0.5, 45.0), (1.25, 0.4, 45.0)]);
        let surf = GriddedSurface::from_traces(&upper, &lower, 8.0).unwrap();

        let bottom = surf.row(surf.rows() - 1).unwrap();
        let lower_rs = resample(&lower, surf.cols() - 1).unwrap();
        for (b, l) in bottom.iter().zip(lower_rs.iter()) {
            // Within a small multiple of the spacing, not exact.
            assert!(distance(b, l) < 1.0, "drift {} km", distance(b, l));
        }
    }
}
