mod key_press;
mod key_bindings;
mod replay_frame;
mod input_manager;

pub use key_press::*;
pub use key_bindings::*;
pub use replay_frame::*;
pub use input_manager::*;
