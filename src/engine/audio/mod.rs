mod audio;
mod game_clock;
mod manual_audio;
mod instant_audio;

pub use audio::*;
pub use game_clock::*;
pub use manual_audio::*;
pub use instant_audio::*;
