mod math;
mod audio;
mod input;
mod errors;
mod logging;
mod settings;

pub use math::*;
pub use audio::*;
pub use input::*;
pub use errors::*;
pub use logging::*;
pub use settings::*;
