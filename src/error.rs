use thiserror::Error;

/// Top-level error type for the faultgrid kernel.
#[derive(Debug, Error)]
pub enum FaultGridError {
    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Errors related to geodetic computations.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("trace requires at least {min} points, got {actual}")]
    TraceTooShort { min: usize, actual: usize },

    #[error("centroid of an empty point set")]
    EmptyPointSet,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to surface construction and queries.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("grid spacing must be positive and finite, got {0}")]
    InvalidSpacing(f64),

    #[error("resampling requires at least one segment")]
    ZeroSegments,

    #[error("grid must be at least 2x2, got {rows}x{cols}")]
    GridTooSmall { rows: usize, cols: usize },

    #[error("{rows}x{cols} grid does not match {points} points")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        points: usize,
    },

    #[error("dip direction is not derived for trace-defined surfaces")]
    DipDirectionUnsupported,

    #[error(
        "traces violate the right-hand rule: strike {strike:.1}\u{b0}, dip azimuth {dip_azimuth:.1}\u{b0}"
    )]
    RightHandRule { strike: f64, dip_azimuth: f64 },
}

/// Convenience type alias for results using [`FaultGridError`].
pub type Result<T> = std::result::Result<T, FaultGridError>;
