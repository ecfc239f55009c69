mod catcher;
mod catch_game;
mod catch_hit_judgments;

pub use catcher::*;
pub use catch_game::*;
pub use catch_hit_judgments::*;
