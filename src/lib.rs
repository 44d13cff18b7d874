pub mod error;
pub mod geo;
pub mod surface;

pub use error::{FaultGridError, Result};
