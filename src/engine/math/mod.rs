mod vector2;
mod interpolation;

pub use vector2::*;
pub use interpolation::*;
