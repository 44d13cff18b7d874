pub mod centroid;
pub mod distance;
pub mod location;
pub mod strike;
pub mod trace;
pub mod translate;
pub mod vector;

pub use centroid::centroid;
pub use distance::{azimuth, distance, horizontal_distance, vector_between};
pub use location::Location;
pub use strike::strike;
pub use trace::Trace;
pub use translate::translate;
pub use vector::LocationVector;

/// Mean earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0072;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
