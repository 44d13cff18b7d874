pub mod grid;
pub mod gridded;
pub mod resample;
pub mod validate;

pub use grid::Grid;
pub use gridded::GriddedSurface;
pub use resample::resample;
pub use validate::check_right_hand_rule;
