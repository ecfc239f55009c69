mod settings;
mod taiko_settings;
mod catch_settings;
mod mania_settings;
mod standard_settings;
mod logging_settings;

pub use settings::*;
pub use taiko_settings::*;
pub use catch_settings::*;
pub use mania_settings::*;
pub use standard_settings::*;
pub use logging_settings::*;
