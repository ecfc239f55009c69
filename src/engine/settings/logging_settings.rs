use crate::prelude::*;

/// helper so i dont need to recompile every time i want to change what things are logged
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// log every judgment as it happens
    pub judgment_logging: bool,
    /// log every input frame the driver receives
    pub input_logging: bool,
}
