mod spinner;
mod osu_game;
mod slider_path;
mod osu_hit_judgments;

pub use spinner::*;
pub use osu_game::*;
pub use slider_path::*;
pub use osu_hit_judgments::*;
