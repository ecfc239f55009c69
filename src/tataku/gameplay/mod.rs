mod score;
mod game_mode;
mod play_loop;
mod key_counter;
mod note_cursor;
mod hit_windows;
mod hit_judgments;
mod ingame_manager;
pub mod modes;

pub use score::*;
pub use game_mode::*;
pub use play_loop::*;
pub use key_counter::*;
pub use note_cursor::*;
pub use hit_windows::*;
pub use hit_judgments::*;
pub use ingame_manager::*;
