use crate::prelude::*;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TaikoSettings {
    // sv
    pub sv_multiplier: f32,

    // keys
    pub left_kat: String,
    pub left_don: String,
    pub right_don: String,
    pub right_kat: String,
}
impl TaikoSettings {
    pub fn key_bindings(&self) -> KeyBindings {
        KeyBindings::new()
            .with(&self.left_kat, KeyPress::LeftKat)
            .with(&self.left_don, KeyPress::LeftDon)
            .with(&self.right_don, KeyPress::RightDon)
            .with(&self.right_kat, KeyPress::RightKat)
    }
}
impl Default for TaikoSettings {
    fn default() -> Self {
        Self {
            // keys
            left_kat: "d".to_owned(),
            left_don: "f".to_owned(),
            right_don: "j".to_owned(),
            right_kat: "k".to_owned(),

            // sv
            sv_multiplier: 1.0,
        }
    }
}
