pub mod cartesian;
pub mod polar;

pub use cartesian::{Cartesian2, Cartesian3};
pub use polar::{Polar2, Polar3};
