pub mod beatmaps;
pub mod gameplay;

pub use beatmaps::*;
pub use gameplay::*;
