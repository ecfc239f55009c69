mod mania_game;
mod mania_hit_judgments;

pub use mania_game::*;
pub use mania_hit_judgments::*;
