use crate::prelude::*;

/// one input event, as the gameplay sees it
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ReplayFrame {
    Press(KeyPress),
    Release(KeyPress),
    /// pointer position in chart space
    MousePos(f32, f32),
}
