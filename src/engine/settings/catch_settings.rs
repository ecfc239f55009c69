use crate::prelude::*;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatchSettings {
    // keys
    pub left_key: String,
    pub right_key: String,
    pub dash_key: String,

    /// ms between juice stream droplets
    pub droplet_interval: f32,
}
impl CatchSettings {
    pub fn key_bindings(&self) -> KeyBindings {
        KeyBindings::new()
            .with(&self.left_key, KeyPress::CatchLeft)
            .with(&self.right_key, KeyPress::CatchRight)
            .with(&self.dash_key, KeyPress::Dash)
    }
}
impl Default for CatchSettings {
    fn default() -> Self {
        Self {
            left_key: "ArrowLeft".to_owned(),
            right_key: "ArrowRight".to_owned(),
            dash_key: "Shift".to_owned(),
            droplet_interval: 50.0,
        }
    }
}
