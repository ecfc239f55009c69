mod taiko_game;
mod taiko_hit_judgments;

pub use taiko_game::*;
pub use taiko_hit_judgments::*;
