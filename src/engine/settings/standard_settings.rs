use crate::prelude::*;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StandardSettings {
    // input
    pub left_key: String,
    pub right_key: String,
    pub ignore_mouse_buttons: bool,

    /// how far the tested cursor moves toward the real one each frame (0..=1)
    pub cursor_smoothing: f32,
}
impl StandardSettings {
    pub fn key_bindings(&self) -> KeyBindings {
        let mut bindings = KeyBindings::new()
            .with(&self.left_key, KeyPress::Left)
            .with(&self.right_key, KeyPress::Right);

        if !self.ignore_mouse_buttons {
            bindings.bind_mouse(MouseButton::Left, KeyPress::LeftMouse);
            bindings.bind_mouse(MouseButton::Right, KeyPress::RightMouse);
        }
        bindings
    }
}
impl Default for StandardSettings {
    fn default() -> Self {
        Self {
            left_key: "z".to_owned(),
            right_key: "x".to_owned(),
            ignore_mouse_buttons: false,
            cursor_smoothing: 0.6,
        }
    }
}
