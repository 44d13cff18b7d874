use crate::error::{Result, SurfaceError};
use crate::geo::Location;

/// A fixed-size rectangular grid of locations stored as one flat row-major
/// array.
///
/// Row 0 is the upper edge and increasing row index moves down-dip; column
/// indexes move along-strike. A grid is created fully populated and is
/// never jagged: every row has the same column count and both dimensions
/// are at least two.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    points: Vec<Location>,
}

impl Grid {
    /// Creates a grid from row-major points.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is less than two, or if the
    /// point count does not equal `rows * cols`.
    pub fn new(rows: usize, cols: usize, points: Vec<Location>) -> Result<Self> {
        if rows < 2 || cols < 2 {
            return Err(SurfaceError::GridTooSmall { rows, cols }.into());
        }
        if points.len() != rows * cols {
            return Err(SurfaceError::DimensionMismatch {
                rows,
                cols,
                points: points.len(),
            }
            .into());
        }
        Ok(Self { rows, cols, points })
    }

    /// Number of rows (down-dip point count).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (along-strike point count).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a grid holds at least four points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The point at `(row, col)`, or `None` if either index is out of
    /// bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Location> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.points.get(row * self.cols + col)
    }

    /// The points of row `row` in column order, or `None` if out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Location]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.points[start..start + self.cols])
    }

    /// All points in row-major order.
    #[must_use]
    pub fn points(&self) -> &[Location] {
        &self.points
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FaultGridError;

    #[allow(clippy::cast_precision_loss)]
    fn points(n: usize) -> Vec<Location> {
        (0..n)
            .map(|i| Location::new(i as f64, 0.0, 0.0))
            .collect()
    }

    #[test]
    fn rejects_undersized_dimensions() {
        let err = Grid::new(1, 3, points(3)).unwrap_err();
        assert!(matches!(
            err,
            FaultGridError::Surface(SurfaceError::GridTooSmall { rows: 1, cols: 3 })
        ));
        assert!(Grid::new(3, 1, points(3)).is_err());
    }

    #[test]
    fn rejects_point_count_mismatch() {
        let err = Grid::new(2, 3, points(5)).unwrap_err();
        assert!(matches!(
            err,
            FaultGridError::Surface(SurfaceError::DimensionMismatch {
                rows: 2,
                cols: 3,
                points: 5
            })
        ));
    }

    #[test]
    fn get_is_row_major() {
        let g = Grid::new(2, 3, points(6)).unwrap();
        assert!((g.get(0, 0).unwrap().lat()).abs() < 1e-12);
        assert!((g.get(0, 2).unwrap().lat() - 2.0).abs() < 1e-12);
        assert!((g.get(1, 0).unwrap().lat() - 3.0).abs() < 1e-12);
        assert!((g.get(1, 2).unwrap().lat() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let g = Grid::new(2, 3, points(6)).unwrap();
        assert!(g.get(2, 0).is_none());
        assert!(g.get(0, 3).is_none());
    }

    #[test]
    fn row_extracts_full_rows() {
        let g = Grid::new(2, 3, points(6)).unwrap();
        let bottom = g.row(1).unwrap();
        assert_eq!(bottom.len(), 3);
        assert!((bottom[0].lat() - 3.0).abs() < 1e-12);
        assert!(g.row(2).is_none());
    }

    #[test]
    fn dimensions_and_len_agree() {
        let g = Grid::new(4, 5, points(20)).unwrap();
        assert_eq!(g.rows(), 4);
        assert_eq!(g.cols(), 5);
        assert_eq!(g.len(), 20);
        assert_eq!(g.points().len(), 20);
        assert!(!g.is_empty());
    }
}
